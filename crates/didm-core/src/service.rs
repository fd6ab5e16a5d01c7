//! # Service Endpoints
//!
//! The W3C DID-core service shape: a typed pointer from an identity to
//! somewhere it can be reached. Passive data only; nothing here dereferences
//! an endpoint.
//!
//! Reference: <https://www.w3.org/TR/did-core/#services>

use serde::{Deserialize, Serialize};

use crate::value_object::Metadata;

/// A service advertised by an identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEndpoint {
    /// Service identifier, typically a DID URL fragment (`did:web:x#hub`).
    pub id: String,
    /// Service type, e.g. `LinkedDomains` or `DIDCommMessaging`.
    #[serde(rename = "type")]
    pub service_type: String,
    /// Where the service lives.
    pub service_endpoint: ServiceEndpointValue,
}

/// The three endpoint shapes DID-core allows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceEndpointValue {
    /// A single URI.
    Uri(String),
    /// An ordered set of URIs.
    Set(Vec<String>),
    /// A method-specific map.
    Map(Metadata),
}

impl ServiceEndpointValue {
    /// The URIs this endpoint names directly. Maps yield none.
    pub fn uris(&self) -> Vec<&str> {
        match self {
            Self::Uri(u) => vec![u.as_str()],
            Self::Set(us) => us.iter().map(String::as_str).collect(),
            Self::Map(_) => Vec::new(),
        }
    }
}
