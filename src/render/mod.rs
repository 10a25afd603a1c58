mod coordinator;
mod overlay;
mod style;
mod surface;

pub use coordinator::{Applied, Coordinator, LoadRequest, Phase};
pub use overlay::{LegendModel, RegionOverlay, RegionRender};
pub use style::RegionStyle;
pub use surface::RenderSurface;

use crate::catalog::ValueKind;

/// Whether the auxiliary year selector applies to a kind.
pub fn auxiliary_controls_visible(kind: ValueKind) -> bool {
    kind == ValueKind::Density
}
