use std::path::PathBuf;

use anyhow::Result;

use dzongkhag_atlas::{Catalog, Coordinator, DirSource, Loader, SvgSurface};

use crate::cli::{Cli, RenderArgs};

pub fn run(cli: &Cli, args: &RenderArgs) -> Result<()> {
    let catalog = Catalog::standard();
    let loader = Loader::new(DirSource::new(&args.data_dir));
    let mut coordinator = Coordinator::new(catalog, loader);
    let mut surface = SvgSurface::new(args.width as f64, 10.0);

    coordinator.select(&mut surface, &args.metric)?;
    if let Some(year) = args.year {
        coordinator.set_year(&mut surface, year)?;
    }

    let output = args.output.clone().unwrap_or_else(|| PathBuf::from("map.svg"));
    surface.write_to(&output)?;

    if cli.verbose > 0 {
        eprintln!("[render] {} -> {}", args.metric, output.display());
    }
    Ok(())
}
