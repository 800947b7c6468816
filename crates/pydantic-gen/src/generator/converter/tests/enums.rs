use serde_json::json;

use crate::{
  generator::{
    ast::{EnumBase, ModelDef},
    converter::ModelConverter,
  },
  tests::common::create_test_graph,
};

fn convert_single_enum(schemas: serde_json::Value) -> crate::generator::ast::EnumDef {
  let graph = create_test_graph(schemas);
  let output = ModelConverter::new(&graph).convert_components().unwrap();
  assert_eq!(output.models.len(), 1);
  let ModelDef::Enum(enum_def) = output.models.into_iter().next().unwrap() else {
    panic!("expected enum");
  };
  enum_def
}

#[test]
fn test_string_enum_uses_literals_as_identifiers() {
  let enum_def = convert_single_enum(json!({
    "Color": {"type": "string", "enum": ["red", "green", "blue"]}
  }));

  assert_eq!(enum_def.base, EnumBase::Str);
  let members: Vec<(&str, &serde_json::Value)> = enum_def
    .members
    .iter()
    .map(|m| (m.ident.as_str(), &m.value))
    .collect();
  assert_eq!(
    members,
    [
      ("red", &json!("red")),
      ("green", &json!("green")),
      ("blue", &json!("blue"))
    ]
  );
}

#[test]
fn test_integer_enum_synthesizes_sequential_identifiers() {
  let enum_def = convert_single_enum(json!({
    "Level": {"type": "integer", "enum": [10, 20, 30]}
  }));

  assert_eq!(enum_def.base, EnumBase::Int);
  assert_eq!(enum_def.members.len(), 3);
  let members: Vec<(&str, &serde_json::Value)> = enum_def
    .members
    .iter()
    .map(|m| (m.ident.as_str(), &m.value))
    .collect();
  assert_eq!(members, [("a", &json!(10)), ("b", &json!(20)), ("c", &json!(30))]);
}

#[test]
fn test_untyped_enum_gets_plain_base() {
  let enum_def = convert_single_enum(json!({
    "Mode": {"enum": ["auto", "manual"]}
  }));

  assert_eq!(enum_def.base, EnumBase::Plain);
  assert_eq!(enum_def.members[0].ident, "auto");
}

#[test]
fn test_non_string_non_integer_type_gets_plain_base() {
  let enum_def = convert_single_enum(json!({
    "Weird": {"type": "custom", "enum": ["one"]}
  }));

  assert_eq!(enum_def.base, EnumBase::Plain);
}

#[test]
fn test_enum_member_with_invalid_identifier_is_rejected() {
  let graph = create_test_graph(json!({
    "Bad": {"type": "string", "enum": ["has space"]}
  }));

  let err = ModelConverter::new(&graph).convert_components().unwrap_err();
  let chain = format!("{err:#}");
  assert!(chain.contains("not a valid Python identifier"), "{chain}");
  assert!(chain.contains("has space"), "{chain}");
}

#[test]
fn test_enum_member_starting_with_digit_is_rejected() {
  let graph = create_test_graph(json!({
    "Bad": {"type": "string", "enum": ["2x"]}
  }));

  assert!(ModelConverter::new(&graph).convert_components().is_err());
}

#[test]
fn test_keyword_enum_member_is_rejected() {
  let graph = create_test_graph(json!({
    "Bad": {"enum": ["class"]}
  }));

  assert!(ModelConverter::new(&graph).convert_components().is_err());
}

#[test]
fn test_non_string_member_under_string_base_is_rejected() {
  let graph = create_test_graph(json!({
    "Bad": {"type": "string", "enum": ["fine", 7]}
  }));

  let err = ModelConverter::new(&graph).convert_components().unwrap_err();
  assert!(format!("{err:#}").contains("not a string literal"));
}

#[test]
fn test_non_integer_member_under_integer_base_is_rejected() {
  let graph = create_test_graph(json!({
    "Bad": {"type": "integer", "enum": [1, "two"]}
  }));

  let err = ModelConverter::new(&graph).convert_components().unwrap_err();
  assert!(format!("{err:#}").contains("not an integer"));
}

#[test]
fn test_object_with_enum_key_is_still_a_class() {
  let graph = create_test_graph(json!({
    "Both": {
      "type": "object",
      "properties": {"x": {"type": "integer"}},
      "enum": ["ignored"]
    }
  }));

  let output = ModelConverter::new(&graph).convert_components().unwrap();
  assert!(matches!(output.models[0], ModelDef::Class(_)));
}
