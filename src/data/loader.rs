use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::AtlasError;

use super::dataset::Dataset;
use super::geometry::RegionCollection;
use super::source::FetchSource;

/// Path of the GADM level-1 boundary file, relative to the source root.
pub const GEOMETRY_PATH: &str = "gadm41_BTN_1.json";

/// Loads datasets and the region geometry. Geometry never changes within
/// a session, so it is cached after the first successful load; datasets
/// are refetched per selection.
#[derive(Debug)]
pub struct Loader<S> {
    source: S,
    geometry: Option<Arc<RegionCollection>>,
}

impl<S: FetchSource> Loader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            geometry: None,
        }
    }

    pub fn load_dataset(&self, dataset_ref: &str) -> Result<Dataset, AtlasError> {
        debug!(dataset_ref, "loading dataset");
        let bytes = self.source.fetch(dataset_ref).map_err(|err| {
            warn!(dataset_ref, error = %err, "dataset fetch failed");
            AtlasError::unavailable(err)
        })?;
        Dataset::from_json(&bytes).map_err(AtlasError::unavailable)
    }

    pub fn load_geometry(&mut self) -> Result<Arc<RegionCollection>, AtlasError> {
        if let Some(geometry) = &self.geometry {
            return Ok(Arc::clone(geometry));
        }
        debug!(path = GEOMETRY_PATH, "loading region geometry");
        let bytes = self.source.fetch(GEOMETRY_PATH).map_err(|err| {
            warn!(path = GEOMETRY_PATH, error = %err, "geometry fetch failed");
            AtlasError::unavailable(err)
        })?;
        let collection = RegionCollection::from_geojson(&bytes).map_err(AtlasError::unavailable)?;
        let geometry = Arc::new(collection);
        self.geometry = Some(Arc::clone(&geometry));
        Ok(geometry)
    }

    /// Geometry from a previous successful load, if any.
    pub fn cached_geometry(&self) -> Option<Arc<RegionCollection>> {
        self.geometry.as_ref().map(Arc::clone)
    }
}
