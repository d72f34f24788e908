use std::collections::BTreeMap;

use tally_canonical::{MetadataValue, NestedValue, ScalarValue, Timestamp};
use tally_core::{
    aggregate_resources, HmacSha256Signer, RecordSigner, Sample, SampleKind, SignedRecord,
};

const SECRET: &[u8] = b"metering-secret";

fn make_record(
    resource_id: &str,
    user_id: &str,
    timestamp: &str,
    origin: &str,
    metadata: BTreeMap<String, MetadataValue>,
) -> SignedRecord {
    let sample = Sample {
        name: "instance".to_string(),
        kind: SampleKind::Cumulative,
        volume: 1.0,
        user_id: user_id.to_string(),
        project_id: "project-id".to_string(),
        resource_id: resource_id.to_string(),
        timestamp: Timestamp::parse(timestamp).unwrap(),
        metadata,
    };
    HmacSha256Signer::new().seal(sample, origin, SECRET).unwrap()
}

fn tagged(tag: &str) -> BTreeMap<String, MetadataValue> {
    BTreeMap::from([("tag".to_string(), MetadataValue::from(tag))])
}

#[test]
fn one_resource_per_distinct_resource_id() {
    let records = vec![
        make_record("resource-id", "user-id", "2012-07-02T10:40:00Z", "test", tagged("a")),
        make_record("resource-id", "user-id", "2012-07-02T10:41:00Z", "test", tagged("b")),
        make_record("resource-id-alternate", "user-id", "2012-07-02T10:41:00Z", "test", tagged("c")),
    ];

    let index = aggregate_resources(records);
    assert_eq!(index.len(), 2);
    assert!(index.contains_key("resource-id"));
    assert!(index.contains_key("resource-id-alternate"));
}

#[test]
fn latest_record_wins_regardless_of_input_order() {
    let older = make_record("resource-id", "user-old", "2012-07-02T10:40:00Z", "test", tagged("old"));
    let newer = make_record("resource-id", "user-new", "2012-07-02T10:41:00Z", "test", tagged("new"));

    for records in [
        vec![older.clone(), newer.clone()],
        vec![newer.clone(), older.clone()],
    ] {
        let index = aggregate_resources(records);
        let resource = &index["resource-id"];
        assert_eq!(resource.user_id, "user-new");
        assert_eq!(
            resource.metadata.get("tag"),
            Some(&ScalarValue::String("new".to_string()))
        );
    }
}

#[test]
fn equal_timestamps_resolve_to_last_supplied() {
    let first = make_record("resource-id", "user-first", "2012-07-02T10:40:00Z", "test", tagged("first"));
    let second = make_record("resource-id", "user-second", "2012-07-02T10:40:00Z", "test", tagged("second"));

    let index = aggregate_resources(vec![first, second]);
    assert_eq!(index["resource-id"].user_id, "user-second");
}

#[test]
fn origins_accumulate_across_all_records() {
    let records = vec![
        make_record("resource-id", "user-id", "2012-07-02T10:40:00Z", "old-source", tagged("a")),
        make_record("resource-id", "user-id", "2012-07-02T10:41:00Z", "new-source", tagged("b")),
    ];

    let index = aggregate_resources(records);
    let resource = &index["resource-id"];

    // Attributes follow the latest record; provenance keeps both tags.
    assert_eq!(
        resource.metadata.get("tag"),
        Some(&ScalarValue::String("b".to_string()))
    );
    assert!(resource.origins.contains("old-source"));
    assert!(resource.origins.contains("new-source"));
    assert_eq!(resource.origins.len(), 2);
}

#[test]
fn metadata_projection_drops_nested_entries() {
    let mut metadata = tagged("x");
    metadata.insert("display_name".to_string(), MetadataValue::from("test-server"));
    metadata.insert(
        "ignored_dict".to_string(),
        MetadataValue::Nested(NestedValue::Map(BTreeMap::from([(
            "key".to_string(),
            MetadataValue::from("value"),
        )]))),
    );
    metadata.insert(
        "ignored_list".to_string(),
        MetadataValue::Nested(NestedValue::List(vec![MetadataValue::from("not-returned")])),
    );

    let records = vec![make_record(
        "resource-id",
        "user-id",
        "2012-07-02T10:40:00Z",
        "test",
        metadata,
    )];

    let index = aggregate_resources(records);
    let projected = &index["resource-id"].metadata;

    assert_eq!(projected.len(), 2);
    assert_eq!(
        projected.get("display_name"),
        Some(&ScalarValue::String("test-server".to_string()))
    );
    assert_eq!(
        projected.get("tag"),
        Some(&ScalarValue::String("x".to_string()))
    );
}

#[test]
fn empty_input_yields_empty_index() {
    let index = aggregate_resources(Vec::new());
    assert!(index.is_empty());
}

#[test]
fn aggregation_is_idempotent_over_the_same_sequence() {
    let records = vec![
        make_record("resource-id", "user-id", "2012-07-02T10:40:00Z", "test", tagged("a")),
        make_record("resource-id", "user-id2", "2012-07-02T10:41:00Z", "not-test", tagged("b")),
        make_record("resource-id-alternate", "user-id", "2012-07-02T10:41:00Z", "test", tagged("c")),
    ];

    let first = aggregate_resources(records.clone());
    let second = aggregate_resources(records);
    assert_eq!(first, second);
}
