//! # Identity construction input
//!
//! [`IdentityInput`] holds the caller-supplied attributes before validation.
//! Optional attributes are defaulted by [`Identity::create`](crate::Identity::create):
//! `metadata` to an empty map, `created_at` to the current time, and
//! `version` to [`DEFAULT_VERSION`](crate::DEFAULT_VERSION).
//!
//! The serde shape matches [`IdentitySnapshot`], so a stored record
//! deserializes straight into an input.

use serde::{Deserialize, Serialize};

use didm_core::{Metadata, TimestampInput};

use crate::snapshot::IdentitySnapshot;

/// Unvalidated attributes for a new identity.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityInput<C = serde_json::Value> {
    /// Human-readable label, `[A-Za-z0-9_-]{2,32}`.
    pub alias: String,
    /// Decentralized identifier, opaque here.
    pub did: String,
    /// Key identifier.
    pub kid: String,
    /// Hex-encoded public key material.
    pub public_key_hex: String,
    /// Hex-encoded private key material, when held locally.
    #[serde(default)]
    pub private_key_hex: Option<String>,
    /// Identity-method discriminator, conventionally `did:key` or `did:web`.
    pub provider: String,
    /// Opaque verifiable credential.
    pub credential: C,
    /// Free-form metadata.
    #[serde(default)]
    pub metadata: Option<Metadata>,
    /// Creation time; any [`TimestampInput`] shape.
    #[serde(default)]
    pub created_at: Option<TimestampInput>,
    /// Record-shape version.
    #[serde(default)]
    pub version: Option<String>,
}

impl<C> IdentityInput<C> {
    /// Start an input from the required attributes.
    pub fn new(
        alias: impl Into<String>,
        did: impl Into<String>,
        kid: impl Into<String>,
        public_key_hex: impl Into<String>,
        provider: impl Into<String>,
        credential: C,
    ) -> Self {
        Self {
            alias: alias.into(),
            did: did.into(),
            kid: kid.into(),
            public_key_hex: public_key_hex.into(),
            private_key_hex: None,
            provider: provider.into(),
            credential,
            metadata: None,
            created_at: None,
            version: None,
        }
    }

    /// Attach locally held private key material.
    pub fn with_private_key_hex(mut self, private_key_hex: impl Into<String>) -> Self {
        self.private_key_hex = Some(private_key_hex.into());
        self
    }

    /// Attach metadata.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Supply the creation time explicitly.
    pub fn with_created_at(mut self, created_at: impl Into<TimestampInput>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    /// Override the record-shape version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

impl<C> From<IdentitySnapshot<C>> for IdentityInput<C> {
    fn from(snapshot: IdentitySnapshot<C>) -> Self {
        Self {
            alias: snapshot.alias,
            did: snapshot.did,
            kid: snapshot.kid,
            public_key_hex: snapshot.public_key_hex,
            private_key_hex: snapshot.private_key_hex,
            provider: snapshot.provider,
            credential: snapshot.credential,
            metadata: Some(snapshot.metadata),
            created_at: Some(snapshot.created_at.into()),
            version: Some(snapshot.version),
        }
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for IdentityInput<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityInput")
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
