//! # Structural snapshot
//!
//! [`IdentitySnapshot`] is the plain-data form of an identity: every
//! attribute at its defaulted value, no behavior. Field names and
//! optionality on the wire are part of the interchange contract with
//! downstream services and must not drift.

use serde::{Deserialize, Serialize};

use didm_core::{Metadata, Timestamp};

/// Every identity attribute, as plain data.
///
/// `privateKeyHex` is always emitted, as `null` when no private key is held,
/// so that the record lists every attribute.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentitySnapshot<C = serde_json::Value> {
    /// Human-readable label.
    pub alias: String,
    /// Decentralized identifier.
    pub did: String,
    /// Key identifier.
    pub kid: String,
    /// Hex-encoded public key material.
    pub public_key_hex: String,
    /// Hex-encoded private key material, when held locally.
    #[serde(default)]
    pub private_key_hex: Option<String>,
    /// Identity-method discriminator.
    pub provider: String,
    /// Opaque verifiable credential.
    pub credential: C,
    /// Free-form metadata; empty when none was supplied.
    pub metadata: Metadata,
    /// Creation time (ISO 8601, UTC).
    pub created_at: Timestamp,
    /// Record-shape version.
    pub version: String,
}

impl<C: std::fmt::Debug> std::fmt::Debug for IdentitySnapshot<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentitySnapshot")
            .field("alias", &self.alias)
            .field("did", &self.did)
            .field("kid", &self.kid)
            .field("public_key_hex", &self.public_key_hex)
            .field("private_key_hex", &crate::redact(&self.private_key_hex))
            .field("provider", &self.provider)
            .field("credential", &self.credential)
            .field("metadata", &self.metadata)
            .field("created_at", &self.created_at)
            .field("version", &self.version)
            .finish()
    }
}
