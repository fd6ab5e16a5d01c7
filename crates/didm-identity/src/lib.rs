//! # didm-identity — The Identity Value Object
//!
//! An [`Identity`] binds a human-friendly alias to a DID, a key, and a
//! verifiable credential. It is created exactly once through
//! [`Identity::create`], which either returns a fully valid, immutable
//! instance or the first validation rule the input broke. There is no
//! setter; a changed identity is a new identity.
//!
//! ## Wire shape
//!
//! [`IdentitySnapshot`] is the interchange record read by key managers,
//! credential issuers, and storage layers:
//!
//! ```json
//! {
//!   "alias": "user-001",
//!   "did": "did:key:z6Mk...",
//!   "kid": "key-1",
//!   "publicKeyHex": "0xabc",
//!   "privateKeyHex": null,
//!   "provider": "did:key",
//!   "credential": { ... },
//!   "metadata": {},
//!   "createdAt": "2023-01-01T00:00:00Z",
//!   "version": "1.0.0"
//! }
//! ```
//!
//! [`Identity::to_json`] renders it with sorted keys and no whitespace, and
//! [`Identity::from_json`] rebuilds an equal identity from that text.

pub mod identity;
pub mod input;
pub mod snapshot;

pub use identity::{Identity, DEFAULT_VERSION};
pub use input::IdentityInput;
pub use snapshot::IdentitySnapshot;

/// An identity whose credential is a typed W3C envelope.
pub type CredentialedIdentity<S = serde_json::Value> =
    Identity<didm_vc::VerifiableCredential<S>>;

/// Format an optional secret for `Debug` output without revealing it.
pub(crate) fn redact(secret: &Option<String>) -> Option<&'static str> {
    secret.as_ref().map(|_| "[REDACTED]")
}
