#![deny(missing_docs)]

//! # didm-core — Foundational Types for the Identity Data Model
//!
//! This crate defines the passive data shapes every other crate in the
//! workspace builds on. It has no internal crate dependencies — only `serde`,
//! `serde_json`, `thiserror`, `chrono`, and `sha2` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Validated newtypes for constrained strings.** An [`Alias`] or a [`Did`]
//!    can only exist in a valid state; the constructor is the only way in.
//!
//! 2. **Opaque material stays opaque.** Key material is carried as hex text
//!    and never parsed here. Key generation and signing live elsewhere.
//!
//! 3. **[`CanonicalBytes`] is the sole path to digest computation.** Textual
//!    encodings and fingerprints are deterministic regardless of how
//!    `serde_json` was compiled.
//!
//! 4. **[`DidmError`] hierarchy.** Structured errors with `thiserror` — no
//!    `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod identifier;
pub mod key;
pub mod service;
pub mod temporal;
pub mod value_object;

// Re-export primary types at crate root for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, ContentDigest, DigestAlgorithm};
pub use error::{CanonicalizationError, DidmError, ValidationError};
pub use identifier::{Alias, Did, Provider, ALIAS_MAX_LEN, ALIAS_MIN_LEN};
pub use key::{KeyAlgorithm, KeyDescriptor};
pub use service::{ServiceEndpoint, ServiceEndpointValue};
pub use temporal::{Timestamp, TimestampInput};
pub use value_object::{Metadata, Validated, ValueObject};
