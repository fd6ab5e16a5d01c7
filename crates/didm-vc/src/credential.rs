//! # Verifiable Credential structure
//!
//! Defines [`VerifiableCredential`] following the W3C VC Data Model 1.1.
//! The subject is a type parameter so that issuers can attach a typed claim
//! set, while identity records default to an untyped one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use didm_core::Metadata;

use crate::proof::Proof;

/// The base JSON-LD context every credential lists first.
pub const VC_CONTEXT_V1: &str = "https://www.w3.org/2018/credentials/v1";

/// The base type every credential lists.
pub const VC_TYPE: &str = "VerifiableCredential";

/// A W3C Verifiable Credential.
///
/// The envelope fields are typed. Anything else found on the envelope
/// (`credentialStatus`, `evidence`, ...) is kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiableCredential<S = serde_json::Value> {
    /// The JSON-LD context URIs.
    #[serde(rename = "@context")]
    pub context: Vec<String>,
    /// The credential identifier (DID or URI).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The credential type(s).
    #[serde(rename = "type")]
    pub credential_type: Vec<String>,
    /// The DID of the credential issuer.
    pub issuer: String,
    /// When the credential was issued (UTC).
    pub issuance_date: DateTime<Utc>,
    /// Optional expiration date (UTC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
    /// The credential subject.
    pub credential_subject: S,
    /// Cryptographic proofs attached to this credential.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub proof: Vec<Proof>,
    /// Envelope members without a typed field.
    #[serde(flatten)]
    pub extra: Metadata,
}

impl<S> VerifiableCredential<S> {
    /// Whether `credential_type` lists `ty`.
    pub fn has_type(&self, ty: &str) -> bool {
        self.credential_type.iter().any(|t| t == ty)
    }

    /// Whether the credential has expired as of `at`.
    ///
    /// Credentials without an expiration date never expire.
    pub fn is_expired_at(&self, at: DateTime<Utc>) -> bool {
        self.expiration_date.is_some_and(|exp| exp <= at)
    }
}
