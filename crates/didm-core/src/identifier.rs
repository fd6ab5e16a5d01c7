//! # Identifier Newtypes
//!
//! String identifiers that carry format constraints. [`Alias`] and [`Did`]
//! validate at construction time and re-validate on deserialization, so a
//! value of either type is always well-formed.
//!
//! [`Provider`] names the DID methods this data model knows about. Records
//! store the provider as an unconstrained string; the enum is a lookup aid.
//!
//! Reference: <https://www.w3.org/TR/did-core/#did-syntax>

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Minimum alias length, inclusive.
pub const ALIAS_MIN_LEN: usize = 2;

/// Maximum alias length, inclusive.
pub const ALIAS_MAX_LEN: usize = 32;

// ---------------------------------------------------------------------------
// Alias
// ---------------------------------------------------------------------------

/// Human-friendly label for an identity, safe to use as a lookup key.
///
/// # Validation
///
/// Checks run in this order and stop at the first failure:
///
/// 1. Must be non-empty ([`ValidationError::AliasEmpty`]).
/// 2. Every character must be in `[A-Za-z0-9_-]`
///    ([`ValidationError::InvalidAliasCharacters`]).
/// 3. Length must be within [`ALIAS_MIN_LEN`]..=[`ALIAS_MAX_LEN`]
///    ([`ValidationError::AliasLengthOutOfBounds`]).
///
/// Uniqueness within a user's scope is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alias(String);

impl Alias {
    /// Create an alias, validating character set and length.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule as a [`ValidationError`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        Self::check(&s)?;
        Ok(Self(s))
    }

    /// Run the alias rules against a borrowed string without taking it.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule as a [`ValidationError`].
    pub fn check(s: &str) -> Result<(), ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::AliasEmpty);
        }
        if !s.chars().all(is_alias_char) {
            return Err(ValidationError::InvalidAliasCharacters);
        }
        // All chars are ASCII at this point, so byte length == char count.
        if !(ALIAS_MIN_LEN..=ALIAS_MAX_LEN).contains(&s.len()) {
            return Err(ValidationError::AliasLengthOutOfBounds);
        }
        Ok(())
    }

    /// Access the alias string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_alias_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

impl TryFrom<String> for Alias {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Alias> for String {
    fn from(alias: Alias) -> Self {
        alias.0
    }
}

impl AsRef<str> for Alias {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Alias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// DID
// ---------------------------------------------------------------------------

/// W3C Decentralized Identifier (DID).
///
/// Format: `did:<method>:<method-specific-id>`
/// where method is lowercase alphanumeric and method-specific-id is non-empty.
///
/// Identity records keep their `did` as an opaque string. This type is for
/// collaborators that want the parsed form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Did(String);

impl Did {
    /// Create a DID from a string, validating format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDid`] if the string does not
    /// match the `did:method:identifier` format.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        let well_formed = match split_did(&s) {
            Some((method, identifier)) => {
                !method.is_empty()
                    && method
                        .chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
                    && !identifier.is_empty()
            }
            None => false,
        };
        if well_formed {
            Ok(Self(s))
        } else {
            Err(ValidationError::InvalidDid(s))
        }
    }

    /// Access the DID string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the DID method (the part between the first and second colons).
    pub fn method(&self) -> &str {
        split_did(&self.0).map(|(m, _)| m).unwrap_or_default()
    }

    /// Return the method-specific identifier (everything after `did:method:`).
    pub fn method_specific_id(&self) -> &str {
        split_did(&self.0).map(|(_, id)| id).unwrap_or_default()
    }
}

fn split_did(s: &str) -> Option<(&str, &str)> {
    s.strip_prefix("did:")?.split_once(':')
}

impl TryFrom<String> for Did {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Did> for String {
    fn from(did: Did) -> Self {
        did.0
    }
}

impl std::fmt::Display for Did {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Provider
// ---------------------------------------------------------------------------

/// Identity-method discriminators in conventional use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    /// Self-certifying `did:key` identities.
    #[serde(rename = "did:key")]
    DidKey,
    /// Domain-anchored `did:web` identities.
    #[serde(rename = "did:web")]
    DidWeb,
}

impl Provider {
    /// The provider string as stored on identity records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DidKey => "did:key",
            Self::DidWeb => "did:web",
        }
    }
}

impl std::str::FromStr for Provider {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "did:key" => Ok(Self::DidKey),
            "did:web" => Ok(Self::DidWeb),
            other => Err(ValidationError::UnknownProvider(other.to_string())),
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
