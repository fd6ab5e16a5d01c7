//! # Alias Subcommand
//!
//! Reports whether an alias would be accepted on an identity record, and
//! which rule it breaks if not.

use anyhow::Result;
use clap::Args;

use didm_core::{Alias, ALIAS_MAX_LEN, ALIAS_MIN_LEN};

/// Arguments for the `didm alias` subcommand.
#[derive(Args, Debug)]
pub struct AliasArgs {
    /// The alias to check.
    #[arg(value_name = "ALIAS")]
    pub alias: String,
}

/// Execute the alias subcommand.
pub fn run_alias(args: &AliasArgs) -> Result<u8> {
    match Alias::new(args.alias.as_str()) {
        Ok(alias) => {
            println!("OK: {alias}");
            Ok(0)
        }
        Err(e) => {
            println!("FAIL: {e}");
            println!("  aliases use [A-Za-z0-9_-] and are {ALIAS_MIN_LEN}-{ALIAS_MAX_LEN} characters long");
            Ok(1)
        }
    }
}
