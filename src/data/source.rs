use std::path::PathBuf;

use anyhow::{Context, Result};

/// Byte-level access to the dataset and boundary endpoints.
pub trait FetchSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>>;
}

/// Reads resources from a local directory (data shipped alongside the app).
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FetchSource for DirSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let full = self.root.join(path);
        std::fs::read(&full).with_context(|| format!("Failed to read {}", full.display()))
    }
}

/// Fetches resources over HTTP against a fixed base URL. Non-2xx
/// responses are failures.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    base: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl HttpSource {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

#[cfg(feature = "http")]
impl FetchSource for HttpSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let url = format!("{}/{}", self.base.trim_end_matches('/'), path);
        let response = self
            .client
            .get(&url)
            .send()
            .and_then(|response| response.error_for_status())
            .with_context(|| format!("GET {url}"))?;
        let body = response
            .bytes()
            .with_context(|| format!("Reading body of {url}"))?;
        Ok(body.to_vec())
    }
}
