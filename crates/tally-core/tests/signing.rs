use std::collections::BTreeMap;

use tally_canonical::{MetadataValue, Timestamp};
use tally_core::{CoreError, HmacSha256Signer, RecordSigner, Sample, SampleKind};

const SECRET: &[u8] = b"metering-secret";

fn make_sample() -> Sample {
    let mut metadata = BTreeMap::new();
    metadata.insert("display_name".to_string(), MetadataValue::from("test-server"));
    metadata.insert("tag".to_string(), MetadataValue::from("self.counter"));

    Sample {
        name: "instance".to_string(),
        kind: SampleKind::Cumulative,
        volume: 1.0,
        user_id: "user-id".to_string(),
        project_id: "project-id".to_string(),
        resource_id: "resource-id".to_string(),
        timestamp: Timestamp::parse("2012-07-02T10:40:00Z").unwrap(),
        metadata,
    }
}

#[test]
fn seal_produces_verifiable_record() {
    let signer = HmacSha256Signer::new();
    let record = signer.seal(make_sample(), "test", SECRET).unwrap();

    assert_eq!(record.origin, "test");
    assert_eq!(record.sample, make_sample());
    signer.verify(&record, SECRET).unwrap();
}

#[test]
fn identical_inputs_produce_identical_signatures() {
    let signer = HmacSha256Signer::new();
    let first = signer.seal(make_sample(), "test", SECRET).unwrap();
    let second = signer.seal(make_sample(), "test", SECRET).unwrap();

    assert_eq!(first.signature, second.signature);
    assert_eq!(first, second);
}

#[test]
fn signature_depends_on_origin() {
    let signer = HmacSha256Signer::new();
    let first = signer.seal(make_sample(), "test", SECRET).unwrap();
    let second = signer.seal(make_sample(), "other-source", SECRET).unwrap();

    assert_ne!(first.signature, second.signature);
}

#[test]
fn verify_fails_with_wrong_secret() {
    let signer = HmacSha256Signer::new();
    let record = signer.seal(make_sample(), "test", SECRET).unwrap();

    let result = signer.verify(&record, b"some-other-secret");
    assert!(matches!(result, Err(CoreError::Unauthenticated)));
}

#[test]
fn verify_fails_when_any_field_is_altered() {
    let signer = HmacSha256Signer::new();
    let sealed = signer.seal(make_sample(), "test", SECRET).unwrap();

    let mut tampered = sealed.clone();
    tampered.sample.volume = 2.0;
    assert!(matches!(
        signer.verify(&tampered, SECRET),
        Err(CoreError::Unauthenticated)
    ));

    let mut tampered = sealed.clone();
    tampered.sample.user_id = "intruder".to_string();
    assert!(matches!(
        signer.verify(&tampered, SECRET),
        Err(CoreError::Unauthenticated)
    ));

    let mut tampered = sealed.clone();
    tampered.sample.resource_id = "resource-id-alternate".to_string();
    assert!(matches!(
        signer.verify(&tampered, SECRET),
        Err(CoreError::Unauthenticated)
    ));

    let mut tampered = sealed.clone();
    tampered.origin = "forged".to_string();
    assert!(matches!(
        signer.verify(&tampered, SECRET),
        Err(CoreError::Unauthenticated)
    ));

    let mut tampered = sealed.clone();
    tampered
        .sample
        .metadata
        .insert("tag".to_string(), MetadataValue::from("replaced"));
    assert!(matches!(
        signer.verify(&tampered, SECRET),
        Err(CoreError::Unauthenticated)
    ));

    let mut tampered = sealed;
    tampered.sample.timestamp = Timestamp::parse("2012-07-02T10:41:00Z").unwrap();
    assert!(matches!(
        signer.verify(&tampered, SECRET),
        Err(CoreError::Unauthenticated)
    ));
}

#[test]
fn sealed_record_survives_store_round_trip() {
    let signer = HmacSha256Signer::new();
    let record = signer.seal(make_sample(), "test", SECRET).unwrap();

    // Records cross the store boundary as plain JSON; a decode must
    // still verify against the same secret.
    let json = serde_json::to_value(&record).unwrap();
    let decoded: tally_core::SignedRecord = serde_json::from_value(json).unwrap();
    signer.verify(&decoded, SECRET).unwrap();
}

#[test]
fn validation_rejects_empty_name() {
    let signer = HmacSha256Signer::new();
    let mut sample = make_sample();
    sample.name = String::new();

    let result = signer.seal(sample, "test", SECRET);
    assert!(matches!(
        result,
        Err(CoreError::InvalidSample { field: "name" })
    ));
}

#[test]
fn validation_rejects_empty_resource_id() {
    let signer = HmacSha256Signer::new();
    let mut sample = make_sample();
    sample.resource_id = String::new();

    let result = signer.seal(sample, "test", SECRET);
    assert!(matches!(
        result,
        Err(CoreError::InvalidSample {
            field: "resource_id"
        })
    ));
}

#[test]
fn validation_rejects_non_finite_volume() {
    let signer = HmacSha256Signer::new();
    let mut sample = make_sample();
    sample.volume = f64::NAN;

    let result = signer.seal(sample, "test", SECRET);
    assert!(matches!(
        result,
        Err(CoreError::InvalidSample { field: "volume" })
    ));
}

#[test]
fn empty_owner_identities_are_allowed() {
    let signer = HmacSha256Signer::new();
    let mut sample = make_sample();
    sample.user_id = String::new();
    sample.project_id = String::new();

    let record = signer.seal(sample, "test", SECRET).unwrap();
    signer.verify(&record, SECRET).unwrap();
}
