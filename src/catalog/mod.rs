mod catalog;
mod metric;
mod value_kind;

pub use catalog::Catalog;
pub use metric::{MetricCategory, MetricSubcategory, ResolvedMetric, SexField};
pub use value_kind::ValueKind;
