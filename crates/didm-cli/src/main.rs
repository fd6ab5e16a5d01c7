//! # didm CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use didm_cli::alias::{run_alias, AliasArgs};
use didm_cli::inspect::{run_inspect, InspectArgs};
use didm_cli::mint::{run_new, NewArgs};

/// Decentralized identity data model toolkit.
///
/// Validates, mints, and inspects identity records.
#[derive(Parser, Debug)]
#[command(name = "didm", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    /// `RUST_LOG`, when set, takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a stored identity record and print its canonical form.
    Inspect(InspectArgs),

    /// Mint a new identity record.
    New(NewArgs),

    /// Check whether an alias is acceptable.
    Alias(AliasArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("didm CLI starting");

    let result = match cli.command {
        Commands::Inspect(args) => run_inspect(&args),
        Commands::New(args) => run_new(&args),
        Commands::Alias(args) => run_alias(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
