pub mod legend;
pub mod metrics;
pub mod render;
