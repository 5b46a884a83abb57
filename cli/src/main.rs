mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{catalog, regions, render};
use tracing_subscriber::EnvFilter;

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Render(args) => render::run(&cli, args),
        Commands::Regions(args) => regions::run(&cli, args),
        Commands::Catalog(args) => catalog::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
