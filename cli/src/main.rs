mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{legend, metrics, render};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Render(args) => render::run(&cli, args),
        Commands::Legend(args) => legend::run(&cli, args),
        Commands::Metrics => metrics::run(&cli),
    }
}

fn main() -> anyhow::Result<()> {
    run()
}
