//! End-to-end expansion scenarios.
//!
//! Each test expands a shape document and compares the result with the
//! expected path sets in their JSON form.

mod common;

use common::{expand_json, paths_to_value, person_shape};
use serde_json::json;
use shapepaths::{expand, RangeSelector, Shape};

// =============================================================================
// Flat structures
// =============================================================================

#[test]
fn test_empty_shape() {
    assert_eq!(expand_json("{}"), json!([]));
}

#[test]
fn test_one_key_shape() {
    assert_eq!(expand_json(r#"{"name": true}"#), json!([["name"]]));
}

#[test]
fn test_multiple_keys_shape() {
    assert_eq!(
        expand_json(r#"{"name": true, "age": true, "provider": true}"#),
        json!([["name"], ["age"], ["provider"]])
    );
}

// =============================================================================
// Nested structures
// =============================================================================

#[test]
fn test_one_key_nested() {
    assert_eq!(
        expand_json(r#"{"name": {"first": true, "last": true}}"#),
        json!([["name", "first"], ["name", "last"]])
    );
}

#[test]
fn test_multiple_keys_nested() {
    assert_eq!(
        expand_json(
            r#"{
                "name": {"first": true, "last": true},
                "location": {"city": true, "region": true, "country": true}
            }"#
        ),
        json!([
            ["name", "first"],
            ["name", "last"],
            ["location", "city"],
            ["location", "region"],
            ["location", "country"]
        ])
    );
}

#[test]
fn test_three_levels_nested() {
    let paths = expand(&person_shape()).unwrap();
    assert_eq!(
        paths_to_value(&paths),
        json!([
            ["name", "first"],
            ["name", "last"],
            ["mother", "name", "first"],
            ["mother", "name", "last"],
            ["mother", "age"],
            ["mother", "location", "city"],
            ["mother", "location", "region"],
            ["mother", "location", "country"],
            ["location", "city"],
            ["location", "region"],
            ["location", "country"]
        ])
    );
}

#[test]
fn test_empty_nested_shape_emits_nothing() {
    assert_eq!(expand_json(r#"{"name": {}, "age": true}"#), json!([["age"]]));
}

// =============================================================================
// Range structures
// =============================================================================

#[test]
fn test_simple_range_shape() {
    assert_eq!(
        expand_json(r#"{"$": [{"from": 0, "to": 100}, {"name": true}]}"#),
        json!([[{"from": 0, "to": 100}, "name"]])
    );
}

#[test]
fn test_simple_number_list_shape() {
    assert_eq!(
        expand_json(r#"{"$": [[0, 1, 2, 3], {"name": true}]}"#),
        json!([[[0, 1, 2, 3], "name"]])
    );
}

#[test]
fn test_opaque_selector_passes_through() {
    assert_eq!(
        expand_json(r#"{"$": [{"from": 0, "length": 10}, {"name": true}]}"#),
        json!([[{"from": 0, "length": 10}, "name"]])
    );
}

#[test]
fn test_mixed_range_shape() {
    assert_eq!(
        expand_json(
            r#"{"people": {"length": true, "$": [{"from": 0, "to": 100}, {"name": true}]}}"#
        ),
        json!([
            ["people", "length"],
            ["people", {"from": 0, "to": 100}, "name"]
        ])
    );
}

#[test]
fn test_range_position_follows_key_order() {
    assert_eq!(
        expand_json(
            r#"{"people": {"$": [{"from": 0, "to": 100}, {"name": true}], "length": true}}"#
        ),
        json!([
            ["people", {"from": 0, "to": 100}, "name"],
            ["people", "length"]
        ])
    );
}

#[test]
fn test_complex_range_shape() {
    assert_eq!(
        expand_json(
            r#"{"people": {
                "length": true,
                "$": [{"from": 0, "to": 100}, {
                    "name": {"first": true, "last": true},
                    "age": true
                }]
            }}"#
        ),
        json!([
            ["people", "length"],
            ["people", {"from": 0, "to": 100}, "name", "first"],
            ["people", {"from": 0, "to": 100}, "name", "last"],
            ["people", {"from": 0, "to": 100}, "age"]
        ])
    );
}

#[test]
fn test_nested_range_shape() {
    let shape = Shape::new().nested(
        "people",
        Shape::new().leaf("length").range(
            RangeSelector::range(0, 100),
            Shape::new()
                .nested("name", Shape::new().leaf("first").leaf("last"))
                .nested(
                    "friends",
                    Shape::new().range(RangeSelector::range(0, 50), Shape::new().leaf("name")),
                ),
        ),
    );

    assert_eq!(
        paths_to_value(&expand(&shape).unwrap()),
        json!([
            ["people", "length"],
            ["people", {"from": 0, "to": 100}, "name", "first"],
            ["people", {"from": 0, "to": 100}, "name", "last"],
            ["people", {"from": 0, "to": 100}, "friends", {"from": 0, "to": 50}, "name"]
        ])
    );
}

// =============================================================================
// Documents
// =============================================================================

#[test]
fn test_yaml_document() {
    let shape = Shape::from_yaml_str(
        "people:\n  length: true\n  $:\n    - {from: 0, to: 100}\n    - name: true\n",
    )
    .unwrap();
    assert_eq!(
        paths_to_value(&expand(&shape).unwrap()),
        json!([
            ["people", "length"],
            ["people", {"from": 0, "to": 100}, "name"]
        ])
    );
}

#[test]
fn test_to_json_output() {
    let shape = Shape::from_json_str(r#"{"name": {"first": true}}"#).unwrap();
    let paths = expand(&shape).unwrap();
    assert_eq!(shapepaths::to_json(&paths).unwrap(), r#"[["name","first"]]"#);
}

#[test]
fn test_selector_key_order_is_kept_in_output() {
    let shape = Shape::from_json_str(r#"{"$": [{"to": 100, "from": 0}, {"name": true}]}"#).unwrap();
    let paths = expand(&shape).unwrap();
    assert_eq!(
        shapepaths::to_json(&paths).unwrap(),
        r#"[[{"to":100,"from":0},"name"]]"#
    );
}
