use anyhow::Result;

use dzongkhag_atlas::Catalog;

use crate::cli::Cli;

pub fn run(_cli: &Cli) -> Result<()> {
    let catalog = Catalog::standard();
    for category in catalog.categories() {
        println!("{} ({})", category.label, category.id);
        for sub in &category.subsections {
            println!("  {}  [{}]", sub.id, sub.kind.to_str());
        }
    }
    Ok(())
}
