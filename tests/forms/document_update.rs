//! In-place document mutation semantics

use kuflow_forms::document::{find_property, get_property, update_property};
use kuflow_forms::{Error, PropertyPath};
use serde_json::{json, Value};

fn path(raw: &str) -> PropertyPath {
    raw.parse().unwrap()
}

fn set(doc: &mut Value, raw: &str, value: Value) {
    update_property(doc, &path(raw), Some(value)).unwrap();
}

#[test]
fn test_auto_vivification_builds_the_expected_shape() {
    let mut doc = json!({});
    set(&mut doc, "key_1.0.key_2.0", json!("first"));
    set(&mut doc, "key_1.0.key_2.1", json!("second"));
    set(&mut doc, "key_1.0.key_2.2.key_1", json!("value"));
    set(&mut doc, "key_1.0.key_2.2.key_2", json!(true));

    assert_eq!(
        doc,
        json!({
            "key_1": [
                {
                    "key_2": [
                        "first",
                        "second",
                        {"key_1": "value", "key_2": true}
                    ]
                }
            ]
        })
    );
}

#[test]
fn test_write_on_empty_document_creates_parents() {
    let mut doc = json!({});
    set(&mut doc, "a.0.b", json!("v"));
    assert_eq!(doc, json!({"a": [{"b": "v"}]}));
}

#[test]
fn test_null_removes_with_shift() {
    let mut doc = json!({
        "key_2": [
            "3000-01-01",
            "3001-01-01T01:00:00+05:05",
            "3002-01-01T02:00:00Z"
        ]
    });
    update_property(&mut doc, &path("key_2.1"), None).unwrap();
    assert_eq!(
        doc,
        json!({"key_2": ["3000-01-01", "3002-01-01T02:00:00Z"]})
    );
}

#[test]
fn test_null_removes_map_key() {
    let mut doc = json!({"a": 1, "b": 2});
    update_property(&mut doc, &path("a"), None).unwrap();
    assert_eq!(doc, json!({"b": 2}));
    // Removing an absent key is a no-op.
    update_property(&mut doc, &path("a"), None).unwrap();
    assert_eq!(doc, json!({"b": 2}));
}

#[test]
fn test_find_vs_get_on_missing_path() {
    let doc = json!({"a": 1});
    assert_eq!(find_property(&doc, &path("nope.0.x")), None);
    assert_eq!(
        get_property(&doc, &path("nope.0.x")),
        Err(Error::PropertyMissing {
            path: "nope.0.x".to_string()
        })
    );
}

#[test]
fn test_stored_null_reads_as_absent() {
    let doc = json!({"a": null});
    assert_eq!(find_property(&doc, &path("a")), None);
}

#[test]
fn test_container_conflict_is_never_auto_corrected() {
    let mut doc = json!({"a": {"b": 1}});
    let before = doc.clone();
    assert!(matches!(
        update_property(&mut doc, &path("a.0"), Some(json!("x"))),
        Err(Error::PathConflict { .. })
    ));
    // Sibling data untouched after a refused write.
    assert_eq!(doc, before);
}

#[test]
fn test_index_past_the_end_is_an_error() {
    let mut doc = json!({"list": ["a"]});
    assert_eq!(
        update_property(&mut doc, &path("list.3"), Some(json!("x"))),
        Err(Error::IndexOutOfBounds {
            path: "list.3".to_string(),
            index: 3,
            len: 1,
        })
    );
    // Exactly at the length appends.
    set(&mut doc, "list.1", json!("b"));
    assert_eq!(doc, json!({"list": ["a", "b"]}));
}
