use crate::color::Color;

/// Per-region paint instructions handed to the rendering surface, one
/// per feature per render transaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionStyle {
    pub fill_color: Color,
    pub stroke_color: &'static str,
    pub stroke_weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
    pub dash_pattern: &'static str,
}

impl RegionStyle {
    /// Choropleth defaults: white dashed outline over a 70% fill.
    pub fn choropleth(fill: Color) -> Self {
        Self {
            fill_color: fill,
            stroke_color: "white",
            stroke_weight: 2.0,
            opacity: 1.0,
            fill_opacity: 0.7,
            dash_pattern: "3",
        }
    }
}
