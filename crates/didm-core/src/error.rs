//! # Error Hierarchy
//!
//! Structured error types for the identity data model, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Validation failures are ordinary outcomes: constructors return them inside
//! a [`Validated`](crate::Validated) result and never panic.

use thiserror::Error;

/// Top-level error type for the identity data model.
#[derive(Error, Debug)]
pub enum DidmError {
    /// Domain primitive or record validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Canonicalization failure during textual encoding or digest computation.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// JSON serialization failed during canonicalization.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Validation errors for domain primitives and identity records.
///
/// The alias variants render the exact messages callers branch on:
/// `"alias empty"`, `"invalid alias characters"`, and
/// `"alias length out of bounds"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The alias is the empty string.
    #[error("alias empty")]
    AliasEmpty,

    /// The alias contains a character outside `[A-Za-z0-9_-]`.
    #[error("invalid alias characters")]
    InvalidAliasCharacters,

    /// The alias length is outside the accepted bounds.
    #[error("alias length out of bounds")]
    AliasLengthOutOfBounds,

    /// DID does not conform to W3C DID syntax (did:method:identifier).
    #[error("invalid DID format: \"{0}\" (expected did:<method>:<identifier>)")]
    InvalidDid(String),

    /// Provider string is not one of the known DID methods.
    #[error("unknown identity provider: \"{0}\" (expected did:key or did:web)")]
    UnknownProvider(String),

    /// Timestamp value could not be coerced to a UTC instant.
    #[error("invalid timestamp: \"{value}\" ({reason})")]
    InvalidTimestamp {
        /// The value that failed to coerce, rendered as text.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}
