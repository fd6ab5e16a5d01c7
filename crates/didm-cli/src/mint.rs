//! # New Subcommand
//!
//! Mints an identity record from command-line flags. Key material and the
//! credential are taken as given; this tool does not generate keys or issue
//! credentials.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use didm_core::Metadata;
use didm_identity::{Identity, IdentityInput};

/// Arguments for the `didm new` subcommand.
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Human-readable alias, [A-Za-z0-9_-]{2,32}.
    #[arg(long)]
    pub alias: String,

    /// Decentralized identifier.
    #[arg(long)]
    pub did: String,

    /// Key identifier.
    #[arg(long)]
    pub kid: String,

    /// Hex-encoded public key.
    #[arg(long)]
    pub public_key_hex: String,

    /// Hex-encoded private key, if held locally.
    #[arg(long)]
    pub private_key_hex: Option<String>,

    /// Identity method, e.g. did:key or did:web.
    #[arg(long)]
    pub provider: String,

    /// Verifiable credential document (JSON, or YAML by extension).
    #[arg(long, value_name = "PATH")]
    pub credential: PathBuf,

    /// Metadata entry as KEY=VALUE. Repeatable.
    #[arg(long = "meta", value_name = "KEY=VALUE")]
    pub meta: Vec<String>,

    /// Creation time (RFC 3339). Defaults to now.
    #[arg(long)]
    pub created_at: Option<String>,

    /// Record-shape version. Defaults to 1.0.0.
    #[arg(long)]
    pub record_version: Option<String>,

    /// Write the record here instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Indent the record instead of writing it canonically.
    #[arg(long)]
    pub pretty: bool,
}

/// Execute the new subcommand.
///
/// Returns exit code: 0 when the record was written, 1 when the flags do
/// not describe a valid identity.
pub fn run_new(args: &NewArgs) -> Result<u8> {
    let credential = crate::read_document(&args.credential)?;
    let metadata = parse_meta(&args.meta)?;

    let mut input = IdentityInput::new(
        args.alias.as_str(),
        args.did.as_str(),
        args.kid.as_str(),
        args.public_key_hex.as_str(),
        args.provider.as_str(),
        credential,
    )
    .with_metadata(metadata);
    if let Some(ref pk) = args.private_key_hex {
        input = input.with_private_key_hex(pk.as_str());
    }
    if let Some(ref ts) = args.created_at {
        input = input.with_created_at(ts.as_str());
    }
    if let Some(ref v) = args.record_version {
        input = input.with_version(v.as_str());
    }

    let identity = match Identity::create(input) {
        Ok(identity) => identity,
        Err(e) => {
            println!("FAIL: {e}");
            return Ok(1);
        }
    };

    let rendered = if args.pretty {
        identity.to_json_pretty()
    } else {
        identity.to_json()
    }
    .context("failed to encode identity record")?;

    match args.output {
        Some(ref path) => {
            std::fs::write(path, format!("{rendered}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(alias = identity.alias(), path = %path.display(), "wrote identity record");
            println!("OK: wrote {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(0)
}

/// Parse `KEY=VALUE` pairs. Values that parse as JSON keep their type;
/// anything else is stored as a string.
fn parse_meta(pairs: &[String]) -> Result<Metadata> {
    let mut metadata = Metadata::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("metadata entry must be KEY=VALUE, got {pair:?}");
        };
        if key.is_empty() {
            bail!("metadata key must be non-empty, got {pair:?}");
        }
        let value = serde_json::from_str(value)
            .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
        metadata.insert(key.to_string(), value);
    }
    Ok(metadata)
}
