// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! dexterm CLI - browse the PokeAPI catalog from the command line.
//!
//! # Examples
//!
//! ```bash
//! # First page of the catalog
//! dexterm browse
//!
//! # Three pages, 60 items
//! dexterm browse --pages 3
//!
//! # Detail page with stat bars
//! dexterm show pikachu
//! dexterm show 25
//!
//! # Multi-type intersection
//! dexterm filter fire flying
//!
//! # Favorites
//! dexterm fav add 25
//! dexterm fav list
//! dexterm fav rm 25
//!
//! # JSON output
//! dexterm browse --format json --pretty
//! ```

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::{browse, fav, filter, show, types};

// ============================================================================
// CLI Definition
// ============================================================================

/// dexterm - a terminal catalog browser for the PokeAPI.
#[derive(Parser)]
#[command(name = "dexterm")]
#[command(about = "Browse the PokeAPI catalog from your terminal")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run. If none, runs 'browse' by default.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Browse the paginated catalog (default if no command specified).
    #[command(visible_alias = "b")]
    Browse(browse::BrowseArgs),

    /// Show the detail page for one item.
    #[command(visible_alias = "s")]
    Show(show::ShowArgs),

    /// Filter the catalog by one or more types (intersection).
    Filter(filter::FilterArgs),

    /// List the known types.
    Types(types::TypesArgs),

    /// Manage favorites.
    Fav(fav::FavArgs),
}

/// Output format selection.
#[derive(Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match &cli.command {
        Some(Commands::Browse(args)) => browse::run(args, &cli).await,
        Some(Commands::Show(args)) => show::run(args, &cli).await,
        Some(Commands::Filter(args)) => filter::run(args, &cli).await,
        Some(Commands::Types(args)) => types::run(args, &cli).await,
        Some(Commands::Fav(args)) => fav::run(args, &cli).await,
        None => browse::run(&browse::BrowseArgs::default(), &cli).await,
    }
}

/// Initializes the tracing subscriber.
///
/// Verbose mode turns on debug logs for the dexterm crates; otherwise
/// `RUST_LOG` decides and defaults to warnings only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,dexterm_api=debug,dexterm_catalog=debug,dexterm_store=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
