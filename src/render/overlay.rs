use serde_json::Value;

use crate::color::LegendEntry;

use super::style::RegionStyle;

/// One styled region ready for the surface: the opaque geometry, its
/// paint instructions, and the tooltip text.
#[derive(Debug, Clone)]
pub struct RegionRender {
    pub name: String,
    pub geometry: Value,
    pub style: RegionStyle,
    pub tooltip: String,
    pub value: Option<f64>,
}

/// The full set of styled regions produced by one render transaction.
#[derive(Debug, Clone, Default)]
pub struct RegionOverlay {
    pub regions: Vec<RegionRender>,
}

/// Legend rows plus title for the active metric.
#[derive(Debug, Clone)]
pub struct LegendModel {
    pub title: &'static str,
    pub entries: Vec<LegendEntry>,
}
