//! City Chain - CLI
//!
//! Plays the city-chain game against a deterministic computer opponent,
//! and inspects the city dataset it draws from.

use anyhow::{Context, Result, bail};
use city_chain::{
    catalog::{Catalog, EMBEDDED_CITIES_JSON, LoadOutcome, load_from_file, records_from_json},
    commands::{catalog_stats, lookup_city, run_play},
    output::display::{print_catalog_stats, print_lookup_result},
};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "city_chain",
    about = "The city-chain naming game: answer with a city starting with the previous city's last letter",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a city dataset (JSON); defaults to the embedded one
    #[arg(short = 'c', long, global = true)]
    cities: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game (default)
    Play,

    /// Show a city's details and the letter it hands over
    Lookup {
        /// City name, case-insensitive
        name: String,
    },

    /// Summarize the loaded dataset
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let catalog = load_catalog(cli.cities.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            run_play(&catalog).map_err(|e| anyhow::anyhow!(e))?;
            Ok(())
        }
        Commands::Lookup { name } => {
            let result = lookup_city(&catalog, &name).map_err(|e| anyhow::anyhow!(e))?;
            print_lookup_result(&result);
            Ok(())
        }
        Commands::Stats => {
            print_catalog_stats(&catalog_stats(&catalog));
            Ok(())
        }
    }
}

/// Load the catalog from `--cities` or fall back to the embedded dataset
///
/// Per-record problems are diagnostics on stderr, not failures; only an
/// unreadable file or a malformed document aborts.
fn load_catalog(path: Option<&std::path::Path>) -> Result<Catalog> {
    let outcome = match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("loading city dataset from {}", path.display()))?,
        None => records_from_json(EMBEDDED_CITIES_JSON).context("parsing embedded city dataset")?,
    };

    let LoadOutcome { records, skipped } = outcome;

    for skip in &skipped {
        eprintln!("{} {skip}", "warning:".bright_yellow());
    }

    let (catalog, duplicates) = Catalog::from_records(records);
    for dup in &duplicates {
        eprintln!(
            "{} duplicate city '{}' ignored",
            "warning:".bright_yellow(),
            dup.name()
        );
    }

    if catalog.is_empty() {
        bail!("no valid cities in the dataset");
    }

    Ok(catalog)
}
