//! # didm-vc — Verifiable Credential Shapes
//!
//! The W3C Verifiable Credentials Data Model envelope, as carried by identity
//! records. Issuance and verification belong to other services; this crate
//! only gives the payload a typed shape.
//!
//! - [`VerifiableCredential`] is generic over its subject type, defaulting to
//!   an untyped `serde_json::Value`.
//! - Unrecognized envelope members are kept in [`VerifiableCredential::extra`]
//!   so a credential passes through this layer without loss.

pub mod credential;
pub mod proof;

pub use credential::{VerifiableCredential, VC_CONTEXT_V1, VC_TYPE};
pub use proof::{Proof, ProofPurpose, ProofType};
