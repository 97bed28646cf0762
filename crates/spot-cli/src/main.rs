use std::error::Error;
use std::fs;
use std::path::Path;

use clap::{Parser, Subcommand};
use commands::{
    generate::{self, GenerateArgs},
    layout::{self, LayoutArgs},
    orders,
    stats::{self, StatsArgs},
    verify::{self, VerifyArgs},
    version::{self, VersionArgs},
};
use serde::Serialize;
use spot_deck::{from_json, DeckConfig, DeckDocument};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "spot-cli", about = "Projective plane symbol deck generator")]
struct Cli {
    /// Emit debug logs for every pipeline stage.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a deck from a symbol directory or manifest file.
    Generate(GenerateArgs),
    /// Re-check a saved deck document.
    Verify(VerifyArgs),
    /// Compute printable card and symbol positions for a saved deck.
    Layout(LayoutArgs),
    /// Print symbol occurrence statistics for a saved deck.
    Stats(StatsArgs),
    /// List the supported plane orders.
    Orders,
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Command::Generate(args) => generate::run(&args),
        Command::Verify(args) => verify::run(&args),
        Command::Layout(args) => layout::run(&args),
        Command::Stats(args) => stats::run(&args),
        Command::Orders => orders::run(),
        Command::Version(args) => version::run(&args),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub(crate) fn load_config(path: Option<&Path>) -> Result<DeckConfig, Box<dyn Error>> {
    match path {
        Some(path) => Ok(DeckConfig::from_path(path)?),
        None => Ok(DeckConfig::default()),
    }
}

pub(crate) fn load_document(path: &Path) -> Result<DeckDocument, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    Ok(from_json(&contents)?)
}

pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), Box<dyn Error>> {
    write_text(path, &serde_json::to_string_pretty(value)?)
}

pub(crate) fn write_text(path: &Path, contents: &str) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}
