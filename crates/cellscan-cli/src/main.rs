//! cellscan CLI - clean and query phone specification datasets.

mod cli;
mod commands;

use std::io;

use cellscan::Catalog;
use clap::Parser;
use cli::{Cli, Commands};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Log to stderr; stdout carries command output. `RUST_LOG` overrides the level.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: Cli) -> commands::CommandResult {
    let config = cli.files.to_config();
    debug!(data = %config.data_path.display(), output_dir = %config.output_dir.display(), "opening catalog");
    let catalog = Catalog::open(config)?;
    let mut out = io::stdout().lock();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => commands::menu::run(&catalog, io::stdin().lock(), &mut out),
        Commands::Uniques => commands::reports::uniques(&catalog, &mut out),
        Commands::Weight => commands::queries::weight(&catalog, &mut out),
        Commands::Mismatches { json } => commands::queries::mismatches(&catalog, json, &mut out),
        Commands::Sensors => commands::queries::sensors(&catalog, &mut out),
        Commands::PeakYear => commands::queries::peak_year(&catalog, &mut out),
        Commands::Delete { model } => commands::mutate::delete(&catalog, &model, &mut out),
        Commands::Search { oem } => commands::mutate::search(&catalog, &oem, &mut out),
        Commands::Clean => commands::reports::clean(&catalog, &mut out),
        Commands::Status { json } => commands::status::run(&catalog, json, &mut out),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
