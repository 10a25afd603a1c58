use std::path::PathBuf;

/// Dzongkhag choropleth CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "dzatlas", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Render a metric as an SVG choropleth
    Render(RenderArgs),

    /// Print the legend model for a metric
    Legend(LegendArgs),

    /// List selectable categories and subcategories
    Metrics,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Subcategory id, e.g. total-population, male-population-pct
    pub metric: String,

    /// Directory holding the boundary file and data/ subdirectory
    #[arg(short, long, value_hint = clap::ValueHint::DirPath, default_value = ".")]
    pub data_dir: PathBuf,

    /// Survey year (density metrics only)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Output SVG file, defaults to "./map.svg"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Rendered width in pixels
    #[arg(long, default_value_t = 1200)]
    pub width: u32,
}

#[derive(clap::Args, Debug)]
pub struct LegendArgs {
    /// Subcategory id, e.g. total-population, population-density
    pub metric: String,
}
