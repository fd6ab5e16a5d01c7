//! # Key Descriptors
//!
//! Passive descriptions of the cryptographic keys bound to identities.
//! Nothing here generates, parses, or uses key material; hex strings are
//! carried as given for the key managers and signers that own them.

use serde::{Deserialize, Serialize};

use crate::value_object::Metadata;

/// Signature and key-agreement algorithms an identity key may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyAlgorithm {
    /// EdDSA over Curve25519.
    Ed25519,
    /// ECDSA over secp256k1.
    Secp256k1,
    /// ECDSA over NIST P-256.
    Secp256r1,
    /// ECDH over Curve25519.
    X25519,
}

impl KeyAlgorithm {
    /// Every algorithm, in declaration order.
    pub fn all() -> &'static [KeyAlgorithm] {
        &[Self::Ed25519, Self::Secp256k1, Self::Secp256r1, Self::X25519]
    }

    /// The wire name of this algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ed25519 => "Ed25519",
            Self::Secp256k1 => "Secp256k1",
            Self::Secp256r1 => "Secp256r1",
            Self::X25519 => "X25519",
        }
    }
}

impl std::fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A key known to the identity layer.
///
/// `private_key_hex` is present only when the private half is held locally.
/// Custom `Debug` redacts it to prevent key leakage in log output.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyDescriptor {
    /// Key identifier.
    pub kid: String,
    /// Algorithm the key is used with.
    pub algorithm: KeyAlgorithm,
    /// Hex-encoded public key material.
    pub public_key_hex: String,
    /// Hex-encoded private key material, when held locally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key_hex: Option<String>,
    /// Free-form key metadata owned by the key manager.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Metadata>,
}

impl KeyDescriptor {
    /// Whether the private half of this key is held locally.
    pub fn has_private_key(&self) -> bool {
        self.private_key_hex.is_some()
    }
}

impl std::fmt::Debug for KeyDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyDescriptor")
            .field("kid", &self.kid)
            .field("algorithm", &self.algorithm)
            .field("public_key_hex", &self.public_key_hex)
            .field(
                "private_key_hex",
                &self.private_key_hex.as_ref().map(|_| "[REDACTED]"),
            )
            .field("meta", &self.meta)
            .finish()
    }
}
