mod common;

use std::fs;

use studyhub_catalog::core::snapshot;
use studyhub_catalog::{builtin_catalog, CatalogError, SnapshotError, TopicRegistry};
use crate::common::{folder_to_use, topic};

#[test]
fn test_export_then_load_keeps_order_and_content() {
    let dir = folder_to_use();
    let path = dir.join("catalog.json");
    let registry = builtin_catalog().unwrap();

    snapshot::save_to_file(&registry, &path).expect("save failed");
    let loaded = snapshot::load_from_file(&path).expect("load failed");

    assert_eq!(&loaded, registry.as_ref());
    let original: Vec<&str> = registry.ids().collect();
    let reloaded: Vec<&str> = loaded.ids().collect();
    assert_eq!(original, reloaded);
}

#[test]
fn test_snapshot_is_an_array_of_camel_case_records() {
    let topics = vec![topic("arrays", "Arrays"), topic("strings", "Strings")];
    let registry = TopicRegistry::new(topics).unwrap();
    let json = snapshot::to_json(&registry).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let records = value.as_array().expect("top-level array");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["id"], "arrays");
    assert_eq!(records[1]["id"], "strings");
    assert_eq!(records[0]["estimatedTime"], "1 hour");
    assert_eq!(records[0]["sections"][1]["title"], "Details");
}

#[test]
fn test_duplicate_ids_in_snapshot_are_rejected() {
    let topics = vec![topic("x", "A"), topic("x", "B")];
    let json = serde_json::to_string(&topics).unwrap();

    match snapshot::from_json(&json) {
        Err(SnapshotError::Catalog(CatalogError::DuplicateIdentifier(id))) => assert_eq!(id, "x"),
        other => panic!("expected duplicate identifier, got {:?}", other),
    }
}

#[test]
fn test_unknown_difficulty_is_a_parse_error() {
    let mut value = serde_json::to_value(vec![topic("arrays", "Arrays")]).unwrap();
    value[0]["difficulty"] = serde_json::Value::from("Legendary");

    let result = snapshot::from_json(&value.to_string());
    assert!(matches!(result, Err(SnapshotError::Parse(_))));
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    assert!(matches!(snapshot::from_json("{not json"), Err(SnapshotError::Parse(_))));
    assert!(matches!(snapshot::from_json("{}"), Err(SnapshotError::Parse(_))));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = folder_to_use();
    let result = snapshot::load_from_file(&dir.join("nope.json"));
    assert!(matches!(result, Err(SnapshotError::Io(_))));
}

#[test]
fn test_empty_array_loads_empty_registry() {
    let dir = folder_to_use();
    let path = dir.join("empty.json");
    fs::write(&path, "[]").unwrap();

    let registry = snapshot::load_from_file(&path).unwrap();
    assert!(registry.is_empty());
}
