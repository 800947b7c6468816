use serde_json::json;

use crate::{
  generator::converter::{ModelConverter, forward_refs::has_ref},
  tests::common::{create_test_graph, node},
};

#[test]
fn test_direct_ref_is_detected() {
  assert!(has_ref(&node(json!({"$ref": "#/components/schemas/Foo"}))));
}

#[test]
fn test_ref_inside_array_items_is_detected() {
  assert!(has_ref(&node(json!({
    "type": "array",
    "items": {"$ref": "#/components/schemas/Foo"}
  }))));
  assert!(has_ref(&node(json!({
    "type": "array",
    "items": {"type": "array", "items": {"$ref": "#/components/schemas/Foo"}}
  }))));
}

#[test]
fn test_ref_inside_anyof_branch_is_detected() {
  assert!(has_ref(&node(json!({
    "anyOf": [{"type": "integer"}, {"$ref": "#/components/schemas/Foo"}]
  }))));
}

#[test]
fn test_allof_branches_are_not_scanned() {
  assert!(!has_ref(&node(json!({
    "allOf": [{"$ref": "#/components/schemas/Foo"}]
  }))));
}

#[test]
fn test_plain_schemas_are_not_flagged() {
  assert!(!has_ref(&node(json!({"type": "integer"}))));
  assert!(!has_ref(&node(json!({"type": "array", "items": {"type": "string"}}))));
  assert!(!has_ref(&node(json!({}))));
}

#[test]
fn test_backward_reference_still_flags_the_class() {
  // The flag is conservative: it marks any class whose raw properties carry
  // a ref, even when the target was declared earlier.
  let graph = create_test_graph(json!({
    "First": {"title": "First", "type": "object", "properties": {}},
    "Second": {
      "type": "object",
      "properties": {"first": {"$ref": "#/components/schemas/First"}}
    }
  }));

  let output = ModelConverter::new(&graph).convert_components().unwrap();
  assert!(!output.models[0].needs_rebuild());
  assert!(output.models[1].needs_rebuild());
}

#[test]
fn test_mutually_recursive_classes_both_flagged() {
  let graph = create_test_graph(json!({
    "Node": {
      "title": "Node",
      "type": "object",
      "properties": {
        "edges": {"type": "array", "items": {"$ref": "#/components/schemas/Edge"}}
      }
    },
    "Edge": {
      "title": "Edge",
      "type": "object",
      "properties": {
        "target": {"$ref": "#/components/schemas/Node"}
      }
    }
  }));

  let output = ModelConverter::new(&graph).convert_components().unwrap();
  assert!(output.models.iter().all(|model| model.needs_rebuild()));
}
