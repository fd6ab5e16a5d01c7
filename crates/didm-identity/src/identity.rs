//! # Identity
//!
//! The validated value object. An [`Identity`] has exactly two logical
//! states: it does not exist, or it is valid and immutable. Construction
//! through [`Identity::create`] is the only transition.
//!
//! ## Construction rules
//!
//! 1. The alias is checked as an [`Alias`]: non-empty, then character set,
//!    then length. The first failure is returned.
//! 2. A supplied `created_at` is coerced to a UTC [`Timestamp`]; a value
//!    that cannot be coerced is returned as a failure, not a panic.
//! 3. `metadata` defaults to `{}`, `created_at` to one read of the current
//!    clock, and `version` to [`DEFAULT_VERSION`].
//!
//! Everything else is stored as given. In particular `private_key_hex` is
//! kept independent of `public_key_hex`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use didm_core::{
    sha256_digest, Alias, CanonicalBytes, ContentDigest, DidmError, KeyAlgorithm, KeyDescriptor,
    Metadata, Provider, Timestamp, Validated, ValueObject,
};

use crate::input::IdentityInput;
use crate::snapshot::IdentitySnapshot;

/// Record-shape version stamped on identities that do not specify one.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// A decentralized identity bound to a key and a verifiable credential.
///
/// Fields are private; read them through the accessors. Equality is by
/// value over the held record.
#[derive(Clone)]
pub struct Identity<C = serde_json::Value> {
    props: IdentitySnapshot<C>,
}

impl<C> Identity<C> {
    /// Validate `input` and build an identity from it.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`](didm_core::ValidationError)
    /// encountered. No partially built identity is ever exposed.
    pub fn create(input: IdentityInput<C>) -> Validated<Self> {
        if let Err(e) = Alias::check(&input.alias) {
            tracing::debug!(alias = %input.alias, error = %e, "identity rejected");
            return Err(e);
        }
        let created_at = match input.created_at {
            Some(supplied) => Timestamp::coerce(supplied).map_err(|e| {
                tracing::debug!(alias = %input.alias, error = %e, "identity rejected");
                e
            })?,
            None => Timestamp::now(),
        };

        let identity = Self {
            props: IdentitySnapshot {
                alias: input.alias,
                did: input.did,
                kid: input.kid,
                public_key_hex: input.public_key_hex,
                private_key_hex: input.private_key_hex,
                provider: input.provider,
                credential: input.credential,
                metadata: input.metadata.unwrap_or_default(),
                created_at,
                version: input
                    .version
                    .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            },
        };
        tracing::trace!(
            alias = %identity.alias(),
            provider = %identity.provider(),
            "identity created"
        );
        Ok(identity)
    }

    /// Rebuild an identity from a structural snapshot, re-running validation.
    pub fn from_snapshot(snapshot: IdentitySnapshot<C>) -> Validated<Self> {
        Self::create(snapshot.into())
    }

    /// Human-readable label.
    pub fn alias(&self) -> &str {
        &self.props.alias
    }

    /// Decentralized identifier.
    pub fn did(&self) -> &str {
        &self.props.did
    }

    /// Key identifier.
    pub fn kid(&self) -> &str {
        &self.props.kid
    }

    /// Hex-encoded public key material.
    pub fn public_key_hex(&self) -> &str {
        &self.props.public_key_hex
    }

    /// Hex-encoded private key material, if held locally.
    pub fn private_key_hex(&self) -> Option<&str> {
        self.props.private_key_hex.as_deref()
    }

    /// Identity-method discriminator, as stored.
    pub fn provider(&self) -> &str {
        &self.props.provider
    }

    /// The provider as a known DID method, if it is one.
    pub fn known_provider(&self) -> Option<Provider> {
        self.props.provider.parse().ok()
    }

    /// The stored credential, unchanged.
    pub fn credential(&self) -> &C {
        &self.props.credential
    }

    /// Metadata; empty when none was supplied.
    pub fn metadata(&self) -> &Metadata {
        &self.props.metadata
    }

    /// Creation time.
    pub fn created_at(&self) -> Timestamp {
        self.props.created_at
    }

    /// Record-shape version.
    pub fn version(&self) -> &str {
        &self.props.version
    }

    /// Describe this identity's key for a key manager.
    pub fn key_descriptor(&self, algorithm: KeyAlgorithm) -> KeyDescriptor {
        KeyDescriptor {
            kid: self.props.kid.clone(),
            algorithm,
            public_key_hex: self.props.public_key_hex.clone(),
            private_key_hex: self.props.private_key_hex.clone(),
            meta: None,
        }
    }
}

impl<C: Clone> Identity<C> {
    /// Plain-data copy of every attribute.
    pub fn snapshot(&self) -> IdentitySnapshot<C> {
        self.props.clone()
    }
}

impl<C: Serialize> Identity<C> {
    /// The snapshot as a JSON mapping.
    pub fn to_value(&self) -> Result<serde_json::Value, DidmError> {
        Ok(serde_json::to_value(&self.props)?)
    }

    /// Deterministic textual encoding: sorted keys, no whitespace.
    pub fn to_json(&self) -> Result<String, DidmError> {
        let canonical = CanonicalBytes::new(&self.props)?;
        Ok(canonical.as_str().to_string())
    }

    /// Indented encoding for people. Field order follows the snapshot.
    pub fn to_json_pretty(&self) -> Result<String, DidmError> {
        Ok(serde_json::to_string_pretty(&self.props)?)
    }

    /// SHA-256 over the canonical encoding.
    pub fn fingerprint(&self) -> Result<ContentDigest, DidmError> {
        let canonical = CanonicalBytes::new(&self.props)?;
        Ok(sha256_digest(&canonical))
    }
}

impl<C: DeserializeOwned> Identity<C> {
    /// Rebuild an identity from its textual encoding, re-running validation.
    ///
    /// Accepts any JSON that deserializes as an [`IdentityInput`], so
    /// records missing optional attributes are defaulted as on creation.
    pub fn from_json(text: &str) -> Result<Self, DidmError> {
        let input: IdentityInput<C> = serde_json::from_str(text)?;
        Ok(Self::create(input)?)
    }
}

impl<C: PartialEq> ValueObject for Identity<C> {
    type Props = IdentitySnapshot<C>;

    fn props(&self) -> &Self::Props {
        &self.props
    }
}

impl<C: PartialEq> PartialEq for Identity<C> {
    fn eq(&self, other: &Self) -> bool {
        self.same_value_as(other)
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for Identity<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("alias", &self.props.alias)
            .field("did", &self.props.did)
            .field("kid", &self.props.kid)
            .field("public_key_hex", &self.props.public_key_hex)
            .field("private_key_hex", &crate::redact(&self.props.private_key_hex))
            .field("provider", &self.props.provider)
            .field("credential", &self.props.credential)
            .field("metadata", &self.props.metadata)
            .field("created_at", &self.props.created_at)
            .field("version", &self.props.version)
            .finish()
    }
}

impl<C: Serialize> Serialize for Identity<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.props.serialize(serializer)
    }
}

impl<'de, C: Deserialize<'de>> Deserialize<'de> for Identity<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let input = IdentityInput::<C>::deserialize(deserializer)?;
        Self::create(input).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use didm_core::{TimestampInput, ValidationError};

    fn credential() -> serde_json::Value {
        serde_json::json!({
            "@context": ["https://www.w3.org/2018/credentials/v1"],
            "type": ["VerifiableCredential"],
            "issuer": "did:web:issuer.example",
            "credentialSubject": {"id": "did:key:z6Mk"}
        })
    }

    fn input(alias: &str) -> IdentityInput {
        IdentityInput::new(alias, "did:key:z6Mk", "key-1", "0xabc", "did:key", credential())
    }

    #[test]
    fn create_defaults_optional_attributes() {
        let before = Timestamp::now();
        let id = Identity::create(input("user-001")).unwrap();
        let after = Timestamp::now();

        assert_eq!(id.alias(), "user-001");
        assert_eq!(id.did(), "did:key:z6Mk");
        assert_eq!(id.kid(), "key-1");
        assert_eq!(id.public_key_hex(), "0xabc");
        assert_eq!(id.private_key_hex(), None);
        assert_eq!(id.provider(), "did:key");
        assert_eq!(id.credential(), &credential());
        assert!(id.metadata().is_empty());
        assert_eq!(id.version(), "1.0.0");
        assert!(id.created_at() >= before && id.created_at() <= after);
    }

    #[test]
    fn create_rejects_short_alias() {
        let err = Identity::create(input("u")).unwrap_err();
        assert_eq!(err, ValidationError::AliasLengthOutOfBounds);
        assert_eq!(err.to_string(), "alias length out of bounds");
    }

    #[test]
    fn create_rejects_bad_characters() {
        let err = Identity::create(input("bad alias!")).unwrap_err();
        assert_eq!(err.to_string(), "invalid alias characters");
    }

    #[test]
    fn create_rejects_empty_alias() {
        let err = Identity::create(input("")).unwrap_err();
        assert_eq!(err.to_string(), "alias empty");
    }

    #[test]
    fn explicit_created_at_is_returned_exactly() {
        let id = Identity::create(input("user-001").with_created_at("2023-01-01T00:00:00Z")).unwrap();
        assert_eq!(id.created_at().to_iso8601(), "2023-01-01T00:00:00Z");
        assert_eq!(id.created_at().epoch_millis(), 1_672_531_200_000);
    }

    #[test]
    fn uncoercible_created_at_is_a_failure() {
        let err = Identity::create(input("user-001").with_created_at(TimestampInput::Text(
            "last tuesday".to_string(),
        )))
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidTimestamp { .. }));
    }

    #[test]
    fn alias_is_checked_before_timestamp() {
        let err = Identity::create(input("").with_created_at("garbage")).unwrap_err();
        assert_eq!(err, ValidationError::AliasEmpty);
    }

    #[test]
    fn alias_bounds_are_stored_verbatim() {
        use didm_core::{ALIAS_MAX_LEN, ALIAS_MIN_LEN};
        let shortest = "a".repeat(ALIAS_MIN_LEN);
        let longest = "Z_9-".repeat(ALIAS_MAX_LEN / 4);
        for alias in [shortest.as_str(), longest.as_str()] {
            assert_eq!(Identity::create(input(alias)).unwrap().alias(), alias);
        }
        let over = format!("{longest}x");
        assert_eq!(
            Identity::create(input(&over)).unwrap_err(),
            ValidationError::AliasLengthOutOfBounds
        );
    }

    #[test]
    fn private_key_is_stored_as_given() {
        let id = Identity::create(input("user-001").with_private_key_hex("0xdef")).unwrap();
        assert_eq!(id.private_key_hex(), Some("0xdef"));
        assert_eq!(id.public_key_hex(), "0xabc");
    }

    #[test]
    fn known_provider_lookup() {
        let key = Identity::create(input("user-001")).unwrap();
        assert_eq!(key.known_provider(), Some(Provider::DidKey));

        let mut other = input("user-002");
        other.provider = "did:ion".to_string();
        let ion = Identity::create(other).unwrap();
        assert_eq!(ion.provider(), "did:ion");
        assert_eq!(ion.known_provider(), None);
    }

    #[test]
    fn key_descriptor_projects_key_fields() {
        let id = Identity::create(input("user-001").with_private_key_hex("0xdef")).unwrap();
        let kd = id.key_descriptor(KeyAlgorithm::Ed25519);
        assert_eq!(kd.kid, "key-1");
        assert_eq!(kd.public_key_hex, "0xabc");
        assert_eq!(kd.private_key_hex.as_deref(), Some("0xdef"));
        assert_eq!(kd.algorithm, KeyAlgorithm::Ed25519);
    }

    #[test]
    fn equality_is_by_value() {
        let a = Identity::create(input("user-001").with_created_at("2023-01-01T00:00:00Z")).unwrap();
        let b = Identity::create(input("user-001").with_created_at("2023-01-01T00:00:00Z")).unwrap();
        let c = Identity::create(input("user-002").with_created_at("2023-01-01T00:00:00Z")).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn snapshots_are_stable() {
        let id = Identity::create(input("user-001")).unwrap();
        assert_eq!(id.snapshot(), id.snapshot());
        assert_eq!(id.to_json().unwrap(), id.to_json().unwrap());
    }

    #[test]
    fn to_json_has_sorted_keys() {
        let id = Identity::create(input("user-001").with_created_at("2023-01-01T00:00:00Z")).unwrap();
        let text = id.to_json().unwrap();
        assert!(text.starts_with(r#"{"alias":"user-001","createdAt":"2023-01-01T00:00:00Z","#));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn json_round_trip() {
        let mut meta = Metadata::new();
        meta.insert("tier".to_string(), serde_json::json!("gold"));
        meta.insert("score".to_string(), serde_json::json!(0.75));
        let id = Identity::create(
            input("user-001")
                .with_metadata(meta)
                .with_private_key_hex("0xdef")
                .with_created_at("2023-01-01T00:00:00.250Z")
                .with_version("1.1.0"),
        )
        .unwrap();

        let back: Identity = Identity::from_json(&id.to_json().unwrap()).unwrap();
        assert_eq!(back, id);
        assert_eq!(back.snapshot(), id.snapshot());
    }

    #[test]
    fn from_json_rejects_invalid_alias() {
        let id = Identity::create(input("user-001")).unwrap();
        let text = id.to_json().unwrap().replace("user-001", "x");
        let err = Identity::<serde_json::Value>::from_json(&text).unwrap_err();
        assert!(matches!(
            err,
            DidmError::Validation(ValidationError::AliasLengthOutOfBounds)
        ));
    }

    #[test]
    fn from_json_rejects_malformed_text() {
        let err = Identity::<serde_json::Value>::from_json("{not json").unwrap_err();
        assert!(matches!(err, DidmError::Json(_)));
    }

    #[test]
    fn serde_deserialize_validates() {
        let id = Identity::create(input("user-001")).unwrap();
        let mut value = id.to_value().unwrap();
        value["alias"] = serde_json::json!("bad alias!");
        let err = serde_json::from_value::<Identity>(value).unwrap_err();
        assert!(err.to_string().contains("invalid alias characters"));
    }

    #[test]
    fn fingerprint_tracks_content() {
        let a = Identity::create(input("user-001").with_created_at("2023-01-01T00:00:00Z")).unwrap();
        let b = Identity::create(input("user-001").with_created_at("2023-01-01T00:00:00Z")).unwrap();
        let c = Identity::create(input("user-001").with_created_at("2023-01-02T00:00:00Z")).unwrap();
        assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
        assert_ne!(a.fingerprint().unwrap(), c.fingerprint().unwrap());
    }

    #[test]
    fn debug_redacts_private_key() {
        let id = Identity::create(input("user-001").with_private_key_hex("0xsecret")).unwrap();
        let dbg = format!("{id:?}");
        assert!(!dbg.contains("0xsecret"));
        assert!(dbg.contains("user-001"));
    }
}
