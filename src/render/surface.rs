use super::overlay::{LegendModel, RegionOverlay};

/// Seam to the UI shell. The coordinator guarantees detach-before-attach
/// and at most one overlay and one legend at any time.
pub trait RenderSurface {
    fn attach_overlay(&mut self, overlay: &RegionOverlay);
    fn detach_overlay(&mut self);

    fn attach_legend(&mut self, legend: &LegendModel);
    fn detach_legend(&mut self);

    /// Show or hide the year selector. `years` lists the selectable
    /// years and `active` the one currently applied; both are empty/None
    /// while hidden.
    fn set_year_control(&mut self, visible: bool, years: &[u16], active: Option<u16>);

    /// Surface a user-visible message for a failed transaction.
    fn show_message(&mut self, text: &str);
}
