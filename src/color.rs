use std::fmt;

use crate::catalog::ValueKind;
use crate::extract::group_thousands;

/// Hex color token as handed to the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub &'static str);

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One legend row: a swatch color and its value range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub range_label: String,
    pub color: Color,
}

// Break tables are strictly descending (lower_bound, color) pairs; the
// first bound the value exceeds wins. Values exceeding no bound get the
// floor color, which doubles as the "no data" color.

const ABSOLUTE_BREAKS: &[(f64, Color)] = &[
    (100_000.0, Color("#800026")),
    (60_000.0, Color("#BD0026")),
    (35_000.0, Color("#E31A1C")),
    (15_000.0, Color("#FC4E2A")),
    (5_000.0, Color("#FD8D3C")),
    (2_000.0, Color("#FEB24C")),
];
const ABSOLUTE_FLOOR: Color = Color("#FFEDA0");

const PERCENTAGE_BREAKS: &[(f64, Color)] = &[
    (60.0, Color("#8B0000")),
    (55.0, Color("#C72E1B")),
    (50.0, Color("#FF8D72")),
    (45.0, Color("#FFA58C")),
    (40.0, Color("#FFBCA6")),
    (35.0, Color("#FFD0BF")),
    (30.0, Color("#FFE1D6")),
    (25.0, Color("#FFEEE8")),
    (20.0, Color("#FFF8F5")),
];
const PERCENTAGE_FLOOR: Color = Color("#FFFFFF");

const DENSITY_BREAKS: &[(f64, Color)] = &[
    (50.0, Color("#00441B")),
    (40.0, Color("#006D2C")),
    (30.0, Color("#238B45")),
    (20.0, Color("#41AB5D")),
    (10.0, Color("#74C476")),
    (5.0, Color("#A1D99B")),
];
const DENSITY_FLOOR: Color = Color("#E5F5E0");

// Legend bucket edges are a separate, slightly offset list used purely
// for labeling; one edge per color in the matching break table.
const ABSOLUTE_EDGES: &[f64] = &[0.0, 1_000.0, 2_000.0, 5_000.0, 20_000.0, 50_000.0, 100_000.0];
const PERCENTAGE_EDGES: &[f64] = &[0.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0];
const DENSITY_EDGES: &[f64] = &[0.0, 10.0, 20.0, 30.0, 40.0, 50.0];

fn table(kind: ValueKind) -> (&'static [(f64, Color)], Color) {
    match kind {
        ValueKind::Absolute => (ABSOLUTE_BREAKS, ABSOLUTE_FLOOR),
        ValueKind::Percentage => (PERCENTAGE_BREAKS, PERCENTAGE_FLOOR),
        ValueKind::Density => (DENSITY_BREAKS, DENSITY_FLOOR),
    }
}

fn edges(kind: ValueKind) -> &'static [f64] {
    match kind {
        ValueKind::Absolute => ABSOLUTE_EDGES,
        ValueKind::Percentage => PERCENTAGE_EDGES,
        ValueKind::Density => DENSITY_EDGES,
    }
}

/// Map a scalar to its bucket color. `None` ("no data") takes the floor
/// color, matching the original map where a missing value fails every
/// threshold comparison.
pub fn color_for(value: Option<f64>, kind: ValueKind) -> Color {
    let (breaks, floor) = table(kind);
    let Some(v) = value else { return floor };
    for &(bound, color) in breaks {
        if v > bound {
            return color;
        }
    }
    floor
}

/// Ordered legend rows for a kind. Swatches are computed through
/// `color_for(edge + 1)` so each matches what its range actually
/// renders; the last entry is open-ended.
pub fn legend_entries(kind: ValueKind) -> Vec<LegendEntry> {
    let edges = edges(kind);
    edges
        .iter()
        .enumerate()
        .map(|(i, &edge)| {
            let color = color_for(Some(edge + 1.0), kind);
            let range_label = match edges.get(i + 1) {
                Some(&next) => format!("{}\u{2013}{}", edge_label(edge, kind), edge_label(next, kind)),
                None => format!("{}+", edge_label(edge, kind)),
            };
            LegendEntry { range_label, color }
        })
        .collect()
}

/// Legend panel heading for a kind.
pub fn legend_title(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::Absolute => "Population",
        ValueKind::Percentage => "Population Share (%)",
        ValueKind::Density => "Population Density (per km\u{b2})",
    }
}

fn edge_label(edge: f64, kind: ValueKind) -> String {
    match kind {
        ValueKind::Absolute => group_thousands(edge as i64),
        ValueKind::Percentage | ValueKind::Density => format!("{}", edge as i64),
    }
}
