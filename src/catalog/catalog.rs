use crate::error::AtlasError;

use super::metric::{MetricCategory, MetricSubcategory, ResolvedMetric, SexField};
use super::value_kind::ValueKind;

const POPULATION_DATA: &str = "data/dzongkhag-population.json";
const DENSITY_DATA: &str = "data/dzongkhag-density.json";

/// Read-only ordered registry of selectable categories and subcategories.
/// Drives navigation construction and resolves subcategory ids to a
/// dataset ref, value kind, and field.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<MetricCategory>,
}

impl Catalog {
    /// The standard navigation tree. Only Population carries live
    /// subsections; Economy and Environment are placeholders.
    pub fn standard() -> Self {
        Self {
            categories: vec![
                MetricCategory {
                    id: "population",
                    label: "Population",
                    default_dataset: Some(POPULATION_DATA),
                    subsections: vec![
                        MetricSubcategory {
                            id: "total-population",
                            label: "Total Population",
                            dataset_ref: None,
                            kind: ValueKind::Absolute,
                            field: SexField::Total,
                        },
                        MetricSubcategory {
                            id: "male-population",
                            label: "Population By Male",
                            dataset_ref: None,
                            kind: ValueKind::Absolute,
                            field: SexField::Male,
                        },
                        MetricSubcategory {
                            id: "female-population",
                            label: "Population By Female",
                            dataset_ref: None,
                            kind: ValueKind::Absolute,
                            field: SexField::Female,
                        },
                        MetricSubcategory {
                            id: "male-population-pct",
                            label: "Male Population Percentage",
                            dataset_ref: None,
                            kind: ValueKind::Percentage,
                            field: SexField::Male,
                        },
                        MetricSubcategory {
                            id: "female-population-pct",
                            label: "Female Population Percentage",
                            dataset_ref: None,
                            kind: ValueKind::Percentage,
                            field: SexField::Female,
                        },
                        MetricSubcategory {
                            id: "population-density",
                            label: "Population Density",
                            dataset_ref: Some(DENSITY_DATA),
                            kind: ValueKind::Density,
                            field: SexField::Total,
                        },
                    ],
                },
                MetricCategory {
                    id: "economy",
                    label: "Economy",
                    default_dataset: None,
                    subsections: vec![],
                },
                MetricCategory {
                    id: "environment",
                    label: "Environment",
                    default_dataset: None,
                    subsections: vec![],
                },
            ],
        }
    }

    /// The subcategory selected at startup.
    pub fn default_subcategory(&self) -> &'static str {
        "total-population"
    }

    pub fn categories(&self) -> &[MetricCategory] {
        &self.categories
    }

    /// Resolve a subcategory id to its dataset ref, value kind, and field.
    /// The dataset ref falls back from the subcategory override to the
    /// category default.
    pub fn resolve(&self, id: &str) -> Result<ResolvedMetric, AtlasError> {
        for category in &self.categories {
            for sub in &category.subsections {
                if sub.id != id {
                    continue;
                }
                let dataset_ref = sub
                    .dataset_ref
                    .or(category.default_dataset)
                    .ok_or_else(|| AtlasError::UnknownSubcategory(id.to_string()))?;
                return Ok(ResolvedMetric {
                    id: sub.id,
                    label: sub.label,
                    dataset_ref,
                    kind: sub.kind,
                    field: sub.field,
                });
            }
        }
        Err(AtlasError::UnknownSubcategory(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn subcategory_ids_globally_unique() {
        let catalog = Catalog::standard();
        let mut seen = HashSet::new();
        for category in catalog.categories() {
            for sub in &category.subsections {
                assert!(seen.insert(sub.id), "duplicate subcategory id {}", sub.id);
            }
        }
    }

    #[test]
    fn every_subcategory_resolves() {
        let catalog = Catalog::standard();
        for category in catalog.categories() {
            for sub in &category.subsections {
                let resolved = catalog.resolve(sub.id).unwrap();
                assert_eq!(resolved.id, sub.id);
                assert!(!resolved.dataset_ref.is_empty());
            }
        }
    }

    #[test]
    fn default_subcategory_resolves_to_total_population() {
        let catalog = Catalog::standard();
        let resolved = catalog.resolve(catalog.default_subcategory()).unwrap();
        assert_eq!(resolved.kind, ValueKind::Absolute);
        assert_eq!(resolved.field, SexField::Total);
        assert_eq!(resolved.dataset_ref, POPULATION_DATA);
    }

    #[test]
    fn density_overrides_category_dataset() {
        let catalog = Catalog::standard();
        let resolved = catalog.resolve("population-density").unwrap();
        assert_eq!(resolved.dataset_ref, DENSITY_DATA);
        assert_eq!(resolved.kind, ValueKind::Density);
    }

    #[test]
    fn unknown_id_is_rejected() {
        let catalog = Catalog::standard();
        assert!(matches!(
            catalog.resolve("gross-national-happiness"),
            Err(AtlasError::UnknownSubcategory(_))
        ));
    }
}
