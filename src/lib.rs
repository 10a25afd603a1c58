#![doc = "Dzongkhag Atlas public API"]
mod catalog;
mod color;
mod data;
mod error;
mod extract;
mod render;
mod surface;

#[doc(inline)]
pub use catalog::{Catalog, MetricCategory, MetricSubcategory, ResolvedMetric, SexField, ValueKind};

#[doc(inline)]
pub use color::{color_for, legend_entries, legend_title, Color, LegendEntry};

#[doc(inline)]
pub use data::{
    Dataset, DirSource, FetchSource, Loader, RegionCollection, RegionFeature, RegionRecord,
    GEOMETRY_PATH,
};

#[cfg(feature = "http")]
#[doc(inline)]
pub use data::HttpSource;

#[doc(inline)]
pub use error::AtlasError;

#[doc(inline)]
pub use extract::{extract, format_value};

#[doc(inline)]
pub use render::{
    auxiliary_controls_visible, Applied, Coordinator, LegendModel, LoadRequest, Phase,
    RegionOverlay, RegionRender, RegionStyle, RenderSurface,
};

#[doc(inline)]
pub use surface::SvgSurface;
