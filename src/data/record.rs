use std::collections::BTreeMap;

use serde::Deserialize;

use crate::catalog::SexField;

/// Raw statistics for one dzongkhag, under the field names the published
/// JSON uses ("Both Sex", "Male", "Female", year-keyed "Density").
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegionRecord {
    #[serde(default, alias = "Both Sex", alias = "Total")]
    pub total: Option<f64>,
    #[serde(default, alias = "Male")]
    pub male: Option<f64>,
    #[serde(default, alias = "Female")]
    pub female: Option<f64>,
    /// Persons per square kilometre, keyed by census/survey year.
    #[serde(default, alias = "Density")]
    pub density: BTreeMap<u16, f64>,
}

impl RegionRecord {
    pub fn field(&self, field: SexField) -> Option<f64> {
        match field {
            SexField::Total => self.total,
            SexField::Male => self.male,
            SexField::Female => self.female,
        }
    }

    pub fn density_for(&self, year: u16) -> Option<f64> {
        self.density.get(&year).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_published_field_names() {
        let record: RegionRecord = serde_json::from_str(
            r#"{ "Both Sex": 138736, "Male": 72397, "Female": 66339 }"#,
        )
        .unwrap();
        assert_eq!(record.field(SexField::Total), Some(138736.0));
        assert_eq!(record.field(SexField::Male), Some(72397.0));
        assert_eq!(record.field(SexField::Female), Some(66339.0));
        assert!(record.density.is_empty());
    }

    #[test]
    fn deserializes_year_keyed_density() {
        let record: RegionRecord =
            serde_json::from_str(r#"{ "Density": { "2005": 38.3, "2017": 53.4 } }"#).unwrap();
        assert_eq!(record.density_for(2005), Some(38.3));
        assert_eq!(record.density_for(2017), Some(53.4));
        assert_eq!(record.density_for(2010), None);
        assert_eq!(record.field(SexField::Total), None);
    }
}
