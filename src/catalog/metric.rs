use super::value_kind::ValueKind;

/// Which numeric field of a region record a metric reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SexField {
    Total,
    Male,
    Female,
}

impl SexField {
    pub fn to_str(&self) -> &'static str {
        match self {
            SexField::Total => "total",
            SexField::Male => "male",
            SexField::Female => "female",
        }
    }
}

/// One selectable entry in the navigation tree.
#[derive(Debug, Clone)]
pub struct MetricSubcategory {
    pub id: &'static str,
    pub label: &'static str,
    pub dataset_ref: Option<&'static str>, // Overrides the category default
    pub kind: ValueKind,
    pub field: SexField,
}

/// Top-level navigation grouping. Categories without subsections are
/// shown in the navigation but offer nothing to select.
#[derive(Debug, Clone)]
pub struct MetricCategory {
    pub id: &'static str,
    pub label: &'static str,
    pub default_dataset: Option<&'static str>,
    pub subsections: Vec<MetricSubcategory>,
}

/// A subcategory resolved against its category defaults: exactly one
/// dataset ref and one value kind.
#[derive(Debug, Clone)]
pub struct ResolvedMetric {
    pub id: &'static str,
    pub label: &'static str,
    pub dataset_ref: &'static str,
    pub kind: ValueKind,
    pub field: SexField,
}
