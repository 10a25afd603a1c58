use std::collections::BTreeSet;

use ahash::AHashMap;
use anyhow::{Context, Result};

use super::record::RegionRecord;

/// Region-name keyed statistics for one dataset ref. Lookups by a
/// geometry region name may miss; that is normal "no data", not an error.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: AHashMap<String, RegionRecord>,
}

impl Dataset {
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let records: AHashMap<String, RegionRecord> =
            serde_json::from_slice(bytes).context("Failed to parse dataset JSON")?;
        Ok(Self { records })
    }

    pub fn get(&self, region: &str) -> Option<&RegionRecord> {
        self.records.get(region)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted distinct years present in any record's density map.
    pub fn years(&self) -> Vec<u16> {
        let years: BTreeSet<u16> = self
            .records
            .values()
            .flat_map(|record| record.density.keys().copied())
            .collect();
        years.into_iter().collect()
    }
}
