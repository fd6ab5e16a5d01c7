//! # didm-cli — CLI Tool for the Identity Data Model
//!
//! Provides the `didm` command-line interface.
//!
//! ## Subcommands
//!
//! - `didm inspect` — Validate a stored identity record and print its
//!   canonical form and fingerprint.
//! - `didm new` — Mint a new identity record from flags.
//! - `didm alias` — Check whether an alias is acceptable.
//!
//! ```bash
//! didm alias user-001
//! didm new --alias user-001 --did did:key:z6Mk --kid key-1 \
//!     --public-key-hex 0xabc --provider did:key --output user-001.json
//! didm inspect user-001.json --pretty
//! ```
//!
//! Every handler returns an exit code: 0 on success, 1 on a validation
//! failure. Operational errors (I/O, parse) bubble up as `anyhow::Error`
//! and exit with 2.

pub mod alias;
pub mod inspect;
pub mod mint;

use std::path::Path;

use anyhow::{Context, Result};

/// Read a JSON or YAML document into a JSON value.
///
/// Files ending in `.yaml` or `.yml` are parsed as YAML; everything else
/// as JSON.
pub fn read_document(path: &Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML: {}", path.display()))
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON: {}", path.display()))
    }
}
