//! Arena monitor - Entry Point
//!
//! Every command prints JSON on stdout; logs go to stderr.

use anyhow::Result;
use arena_monitor::{AppConfig, Application, SnapshotQuery};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

/// Model identity and dashboard views for the trading arena
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via ARENA_CONFIG env var)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Emit single-line JSON
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve model identifiers to display identities
    Resolve {
        /// Identifiers as sent upstream (quote ids with spaces)
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Build a dashboard snapshot from an exported feed
    Snapshot {
        /// JSON file with trades, positions, account_totals and accounts
        #[arg(short, long)]
        input: PathBuf,
        /// Only show trades and positions of this model id ("ALL" for every model)
        #[arg(short, long)]
        model: Option<String>,
        /// Only show positions in this symbol
        #[arg(long)]
        symbol: Option<String>,
        /// Only show positions on this side (long/short)
        #[arg(long)]
        side: Option<String>,
    },
    /// Print the effective model registry
    Registry,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration: CLI arg > ARENA_CONFIG env var > default
    let config = AppConfig::load(args.config.as_deref())?;

    // Initialize logging
    arena_telemetry::init_logging(&config.telemetry)?;

    info!("Starting arena-monitor v{}", env!("CARGO_PKG_VERSION"));

    let app = Application::new(config)?;

    match args.command {
        Command::Resolve { ids } => {
            println!("{}", app.render(&app.resolve_ids(&ids), args.compact)?);
        }
        Command::Snapshot {
            input,
            model,
            symbol,
            side,
        } => {
            let query = SnapshotQuery { model, symbol, side };
            let snapshot = app.snapshot_file(&input, &query)?;
            println!("{}", app.render(&snapshot, args.compact)?);
        }
        Command::Registry => {
            println!("{}", app.render(&app.registry_dump(), args.compact)?);
        }
    }

    Ok(())
}
