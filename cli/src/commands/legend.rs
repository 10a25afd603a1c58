use anyhow::Result;

use dzongkhag_atlas::{legend_entries, legend_title, Catalog};

use crate::cli::{Cli, LegendArgs};

pub fn run(_cli: &Cli, args: &LegendArgs) -> Result<()> {
    let catalog = Catalog::standard();
    let metric = catalog.resolve(&args.metric)?;

    println!("{}", legend_title(metric.kind));
    for entry in legend_entries(metric.kind) {
        println!("  {}  {}", entry.color, entry.range_label);
    }
    Ok(())
}
