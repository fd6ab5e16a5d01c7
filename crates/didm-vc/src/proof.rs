//! # Proof descriptors for Verifiable Credentials

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The type of cryptographic proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProofType {
    /// Ed25519 signature.
    Ed25519Signature2020,
    /// ECDSA secp256k1 signature.
    EcdsaSecp256k1Signature2019,
    /// Detached JWS over any supported curve.
    JsonWebSignature2020,
}

/// The purpose of the proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProofPurpose {
    /// The issuer asserts the credential claims.
    AssertionMethod,
    /// Authentication of the holder.
    Authentication,
}

/// A cryptographic proof attached to a Verifiable Credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proof {
    /// The proof type.
    #[serde(rename = "type")]
    pub proof_type: ProofType,
    /// When the proof was created.
    pub created: DateTime<Utc>,
    /// The verification method (DID URL of the signing key).
    pub verification_method: String,
    /// The purpose of this proof.
    pub proof_purpose: ProofPurpose,
    /// The proof value (encoded signature bytes).
    pub proof_value: String,
}
