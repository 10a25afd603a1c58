use crate::catalog::{SexField, ValueKind};
use crate::data::RegionRecord;

/// Compute the scalar to visualize for one region, or `None` for
/// "no data". A missing record, missing field, missing year, or a zero
/// total all yield `None`; no NaN ever reaches the color ramp.
pub fn extract(
    record: Option<&RegionRecord>,
    kind: ValueKind,
    field: SexField,
    year: Option<u16>,
) -> Option<f64> {
    let record = record?;
    match kind {
        ValueKind::Absolute => record.field(field),
        ValueKind::Percentage => {
            let part = record.field(field)?;
            let whole = record.total?;
            if whole == 0.0 {
                return None;
            }
            // Rounded once here; the same value feeds both the color
            // ramp and the tooltip, so they agree at bucket boundaries.
            Some(round1(part / whole * 100.0))
        }
        ValueKind::Density => record.density_for(year?),
    }
}

/// Format a value for tooltips: grouped thousands for counts, at most
/// one fractional digit for percentages and densities.
pub fn format_value(value: f64, kind: ValueKind) -> String {
    match kind {
        ValueKind::Absolute => group_thousands(value.round() as i64),
        ValueKind::Percentage => format!("{}%", trim_fraction(value)),
        ValueKind::Density => trim_fraction(value),
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn trim_fraction(v: f64) -> String {
    let r = round1(v);
    if r == r.trunc() {
        format!("{}", r as i64)
    } else {
        format!("{r:.1}")
    }
}

pub(crate) fn group_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    let lead = digits.len() % 3;
    if lead > 0 {
        grouped.push_str(&digits[..lead]);
    }
    for (i, chunk) in digits[lead..].as_bytes().chunks(3).enumerate() {
        if lead > 0 || i > 0 {
            grouped.push(',');
        }
        grouped.push_str(std::str::from_utf8(chunk).unwrap());
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn record(total: Option<f64>, male: Option<f64>, female: Option<f64>) -> RegionRecord {
        RegionRecord {
            total,
            male,
            female,
            density: BTreeMap::new(),
        }
    }

    #[test]
    fn absolute_reads_named_field() {
        let r = record(Some(50000.0), Some(26000.0), Some(24000.0));
        assert_eq!(
            extract(Some(&r), ValueKind::Absolute, SexField::Male, None),
            Some(26000.0)
        );
        assert_eq!(
            extract(Some(&r), ValueKind::Absolute, SexField::Total, None),
            Some(50000.0)
        );
    }

    #[test]
    fn percentage_rounds_to_one_digit() {
        let r = record(Some(50000.0), Some(26000.0), None);
        assert_eq!(
            extract(Some(&r), ValueKind::Percentage, SexField::Male, None),
            Some(52.0)
        );
        let r = record(Some(3.0), Some(1.0), None);
        assert_eq!(
            extract(Some(&r), ValueKind::Percentage, SexField::Male, None),
            Some(33.3)
        );
    }

    #[test]
    fn percentage_with_zero_or_missing_total_is_no_data() {
        let zero = record(Some(0.0), Some(10.0), None);
        assert_eq!(
            extract(Some(&zero), ValueKind::Percentage, SexField::Male, None),
            None
        );
        let missing = record(None, Some(10.0), None);
        assert_eq!(
            extract(Some(&missing), ValueKind::Percentage, SexField::Male, None),
            None
        );
    }

    #[test]
    fn missing_record_is_no_data_for_every_kind() {
        for kind in ValueKind::order() {
            assert_eq!(extract(None, kind, SexField::Total, Some(2017)), None);
        }
    }

    #[test]
    fn density_requires_matching_year() {
        let mut r = record(None, None, None);
        r.density.insert(2017, 53.4);
        assert_eq!(
            extract(Some(&r), ValueKind::Density, SexField::Total, Some(2017)),
            Some(53.4)
        );
        assert_eq!(
            extract(Some(&r), ValueKind::Density, SexField::Total, Some(2005)),
            None
        );
        assert_eq!(
            extract(Some(&r), ValueKind::Density, SexField::Total, None),
            None
        );
    }

    #[test]
    fn formats_counts_with_grouping() {
        assert_eq!(format_value(138736.0, ValueKind::Absolute), "138,736");
        assert_eq!(format_value(950.0, ValueKind::Absolute), "950");
        assert_eq!(format_value(1000.0, ValueKind::Absolute), "1,000");
    }

    #[test]
    fn formats_percentages_without_trailing_zero() {
        assert_eq!(format_value(52.0, ValueKind::Percentage), "52%");
        assert_eq!(format_value(47.85, ValueKind::Percentage), "47.9%");
    }

    #[test]
    fn formats_density_with_single_digit() {
        assert_eq!(format_value(53.4, ValueKind::Density), "53.4");
        assert_eq!(format_value(38.0, ValueKind::Density), "38");
    }
}
