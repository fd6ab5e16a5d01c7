//! # Inspect Subcommand
//!
//! Loads a stored identity record, rebuilds it through the validating
//! factory, and prints the canonical record and its fingerprint. A record
//! that fails validation is reported, never repaired.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use didm_identity::{Identity, IdentityInput};

/// Arguments for the `didm inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Identity record to inspect (JSON, or YAML by extension).
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Print the record indented instead of canonical.
    #[arg(long)]
    pub pretty: bool,
}

/// Execute the inspect subcommand.
///
/// Returns exit code: 0 for a valid record, 1 for an invalid one.
pub fn run_inspect(args: &InspectArgs) -> Result<u8> {
    let document = crate::read_document(&args.path)?;

    let input: IdentityInput = match serde_json::from_value(document) {
        Ok(input) => input,
        Err(e) => {
            println!("FAIL: {} is not an identity record: {e}", args.path.display());
            return Ok(1);
        }
    };

    let identity = match Identity::create(input) {
        Ok(identity) => identity,
        Err(e) => {
            println!("FAIL: {}: {e}", args.path.display());
            return Ok(1);
        }
    };

    tracing::info!(
        alias = identity.alias(),
        did = identity.did(),
        "identity record valid"
    );

    let rendered = if args.pretty {
        identity.to_json_pretty()
    } else {
        identity.to_json()
    }
    .context("failed to encode identity record")?;
    let fingerprint = identity
        .fingerprint()
        .context("failed to fingerprint identity record")?;

    println!("{rendered}");
    println!("fingerprint: {fingerprint}");
    Ok(0)
}
