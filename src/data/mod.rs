mod dataset;
mod geometry;
mod loader;
mod record;
mod source;

pub use dataset::Dataset;
pub use geometry::{RegionCollection, RegionFeature};
pub use loader::{Loader, GEOMETRY_PATH};
pub use record::RegionRecord;
pub use source::{DirSource, FetchSource};

#[cfg(feature = "http")]
pub use source::HttpSource;
