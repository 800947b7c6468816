use serde_json::{Value, json};

use crate::generator::schema_graph::{SchemaGraph, SchemaNode};

pub(crate) fn create_test_graph(schemas: Value) -> SchemaGraph {
  let document = json!({
    "openapi": "3.0.0",
    "info": { "title": "Test API", "version": "1.0.0" },
    "paths": {},
    "components": { "schemas": schemas }
  });
  SchemaGraph::from_document(document).unwrap()
}

pub(crate) fn node(value: Value) -> SchemaNode {
  serde_json::from_value(value).unwrap()
}
