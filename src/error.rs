use thiserror::Error;

/// Errors that terminate a single render transaction. Neither variant
/// corrupts previously rendered state.
#[derive(Debug, Error)]
pub enum AtlasError {
    /// A data or geometry source could not be fetched or parsed.
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    /// Navigation referenced a subcategory the catalog cannot resolve.
    #[error("unknown subcategory: {0}")]
    UnknownSubcategory(String),
}

impl AtlasError {
    pub(crate) fn unavailable(err: anyhow::Error) -> Self {
        Self::DataUnavailable(format!("{err:#}"))
    }
}
