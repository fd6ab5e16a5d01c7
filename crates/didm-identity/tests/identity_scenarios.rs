//! # Identity construction scenarios
//!
//! End-to-end checks of the public surface: the canonical example inputs,
//! round trips through the interchange record, and identities carrying a
//! typed W3C credential.

use chrono::{TimeZone, Utc};

use didm_core::{Metadata, Provider, Timestamp, ValidationError};
use didm_identity::{CredentialedIdentity, Identity, IdentityInput, IdentitySnapshot};
use didm_vc::{VerifiableCredential, VC_CONTEXT_V1, VC_TYPE};

fn opaque_credential() -> serde_json::Value {
    serde_json::json!({
        "@context": [VC_CONTEXT_V1],
        "type": [VC_TYPE],
        "issuer": "did:web:issuer.example",
        "issuanceDate": "2023-01-01T00:00:00Z",
        "credentialSubject": {"id": "did:key:z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK"}
    })
}

fn example_input(alias: &str) -> IdentityInput {
    IdentityInput::new(
        alias,
        "did:key:z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK",
        "key-1",
        "0xabc",
        "did:key",
        opaque_credential(),
    )
}

#[test]
fn scenario_valid_identity() {
    let id = Identity::create(example_input("user-001")).unwrap();
    assert_eq!(id.alias(), "user-001");
    assert!(id.metadata().is_empty());
    assert_eq!(id.version(), "1.0.0");
    assert_eq!(id.known_provider(), Some(Provider::DidKey));
}

#[test]
fn scenario_alias_too_short() {
    let err = Identity::create(example_input("u")).unwrap_err();
    assert_eq!(err, ValidationError::AliasLengthOutOfBounds);
}

#[test]
fn scenario_alias_invalid_characters() {
    let err = Identity::create(example_input("bad alias!")).unwrap_err();
    assert_eq!(err, ValidationError::InvalidAliasCharacters);
}

#[test]
fn scenario_alias_empty() {
    let err = Identity::create(example_input("")).unwrap_err();
    assert_eq!(err, ValidationError::AliasEmpty);
}

#[test]
fn scenario_explicit_created_at() {
    let instant = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    let id = Identity::create(example_input("user-001").with_created_at(instant)).unwrap();
    assert_eq!(id.created_at(), Timestamp::from_utc(instant));
}

#[test]
fn stored_record_without_optionals_is_defaulted() {
    let text = r#"{
        "alias": "legacy_user",
        "did": "did:web:example.com",
        "kid": "did:web:example.com#key-1",
        "publicKeyHex": "04a1b2",
        "provider": "did:web",
        "credential": {"id": "urn:vc:legacy"}
    }"#;
    let id: Identity = Identity::from_json(text).unwrap();
    assert_eq!(id.known_provider(), Some(Provider::DidWeb));
    assert!(id.metadata().is_empty());
    assert_eq!(id.version(), "1.0.0");
    assert!(id.private_key_hex().is_none());
}

#[test]
fn snapshot_round_trips_through_text() {
    let mut meta = Metadata::new();
    meta.insert("labels".to_string(), serde_json::json!(["work", "primary"]));
    let id = Identity::create(
        example_input("user-001")
            .with_metadata(meta)
            .with_created_at("2023-06-15T08:30:00+02:00"),
    )
    .unwrap();
    assert_eq!(id.created_at().to_iso8601(), "2023-06-15T06:30:00Z");

    let text = serde_json::to_string(&id.snapshot()).unwrap();
    let snapshot: IdentitySnapshot = serde_json::from_str(&text).unwrap();
    let rebuilt = Identity::from_snapshot(snapshot).unwrap();
    assert_eq!(rebuilt.snapshot(), id.snapshot());
    assert_eq!(rebuilt.fingerprint().unwrap(), id.fingerprint().unwrap());
}

#[test]
fn accessors_and_snapshot_do_not_mutate() {
    let id = Identity::create(example_input("user-001")).unwrap();
    let first = id.to_value().unwrap();
    let _ = id.alias();
    let _ = id.metadata();
    let _ = id.snapshot();
    let _ = id.to_json_pretty().unwrap();
    assert_eq!(id.to_value().unwrap(), first);
}

#[test]
fn typed_credential_identity() {
    let vc: VerifiableCredential = serde_json::from_value(opaque_credential()).unwrap();
    let id: CredentialedIdentity = Identity::create(IdentityInput::new(
        "typed-user",
        "did:key:z6Mk",
        "key-1",
        "0xabc",
        "did:key",
        vc.clone(),
    ))
    .unwrap();
    assert_eq!(id.credential(), &vc);
    assert!(id.credential().has_type(VC_TYPE));

    let back: CredentialedIdentity = Identity::from_json(&id.to_json().unwrap()).unwrap();
    assert_eq!(back, id);
}

#[test]
fn opaque_credential_passes_through_unchanged() {
    let odd = serde_json::json!({"anything": [1, "two", {"three": null}], "x": 1.5});
    let id = Identity::create(IdentityInput::new(
        "opaque", "did:key:z6Mk", "key-1", "0xabc", "did:key", odd.clone(),
    ))
    .unwrap();
    assert_eq!(id.credential(), &odd);
    let back: Identity = Identity::from_json(&id.to_json().unwrap()).unwrap();
    assert_eq!(back.credential(), &odd);
}
