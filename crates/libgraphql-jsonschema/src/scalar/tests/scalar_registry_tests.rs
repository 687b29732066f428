use crate::scalar::PassthroughScalarCodec;
use crate::scalar::ScalarCodec;
use crate::scalar::ScalarRegistry;
use crate::schema::SchemaBuilder;
use crate::test_utils::pets_schema;
use crate::test_utils::timestamp_codec;
use serde_json::json;

#[test]
fn insert_and_lookup() {
    let mut registry = ScalarRegistry::new();
    assert!(registry.is_empty());
    registry
        .insert("Timestamp", timestamp_codec())
        .insert("Json", PassthroughScalarCodec::new());

    assert_eq!(registry.len(), 2);
    assert!(registry.contains("Timestamp"));
    assert!(registry.get("Missing").is_none());
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["Timestamp", "Json"]);
}

#[test]
fn later_insert_replaces() {
    let mut registry = ScalarRegistry::new();
    registry.insert("Json", PassthroughScalarCodec::new());
    registry.insert("Json", PassthroughScalarCodec::with_default_value(json!(1)));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("Json").unwrap().default_value(), Some(json!(1)));
}

#[test]
fn passthrough_only_for_unregistered_custom_scalars() {
    let schema = SchemaBuilder::from_str(None, concat!(
        "scalar Json\n",
        "scalar Timestamp\n",
        "type Query { a: Json, b: Timestamp, c: String }",
    )).unwrap().build().unwrap();

    let mut registry = ScalarRegistry::new();
    registry.insert("Timestamp", timestamp_codec());
    registry.insert_passthrough_for_unregistered(&schema);

    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["Timestamp", "Json"]);
    // The registered codec keeps its own schema.
    assert_eq!(
        registry.get("Timestamp").unwrap().deserialized_schema(),
        json!({"type": "integer"}),
    );
    assert!(!registry.contains("String"));
}

#[test]
fn passthrough_for_pets_schema() {
    let mut registry = ScalarRegistry::new();
    registry.insert_passthrough_for_unregistered(&pets_schema());
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["Timestamp"]);
}
