use anyhow::anyhow;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single JSON-Schema-like node from the OpenAPI document.
///
/// Every attribute is optional; classification happens in [`SchemaNode::shape`]
/// based on which attributes are present. Nodes are immutable once parsed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub(crate) struct SchemaNode {
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub schema_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub format: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub properties: Option<IndexMap<String, SchemaNode>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub items: Option<Box<SchemaNode>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub required: Option<Vec<String>>,
  #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
  pub enum_values: Option<Vec<Value>>,
  #[serde(rename = "anyOf", skip_serializing_if = "Option::is_none")]
  pub any_of: Option<Vec<SchemaNode>>,
  #[serde(rename = "allOf", skip_serializing_if = "Option::is_none")]
  pub all_of: Option<Vec<SchemaNode>>,
  #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
  pub ref_path: Option<String>,
  /// `Some(Value::Null)` when the document says `"default": null`; a missing
  /// key stays `None`. The two must not collapse, a null default is still
  /// emitted as `= None`.
  #[serde(
    default,
    deserialize_with = "deserialize_explicit_null",
    skip_serializing_if = "Option::is_none"
  )]
  pub default: Option<Value>,
}

fn deserialize_explicit_null<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
  D: serde::Deserializer<'de>,
{
  Value::deserialize(deserializer).map(Some)
}

/// Closed classification of a schema node by which attributes are present.
///
/// Arms are ordered by dispatch precedence: primitive `type` markers win over
/// a `$ref`, a `$ref` wins over `array`/`anyOf`/`allOf`, and anything that
/// matches nothing (bare objects, multi-element `allOf`, `oneOf`, `not`,
/// external references) collapses into `Opaque`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SchemaShape<'a> {
  Integer,
  DateTime,
  Uuid,
  Str,
  Boolean,
  Reference(&'a str),
  Array(&'a SchemaNode),
  AnyOf(&'a [SchemaNode]),
  SingleAllOf(&'a SchemaNode),
  Opaque,
}

impl SchemaNode {
  pub(crate) fn shape(&self) -> SchemaShape<'_> {
    match self.schema_type.as_deref() {
      Some("integer") => return SchemaShape::Integer,
      Some("string") => {
        return match self.format.as_deref() {
          Some("date-time") => SchemaShape::DateTime,
          Some("uuid" | "uuid4") => SchemaShape::Uuid,
          _ => SchemaShape::Str,
        };
      }
      _ => {}
    }

    if let Some(ref pointer) = self.ref_path
      && pointer.starts_with("#/")
    {
      return SchemaShape::Reference(pointer);
    }

    if self.schema_type.as_deref() == Some("array")
      && let Some(ref items) = self.items
    {
      return SchemaShape::Array(items);
    }

    if let Some(ref branches) = self.any_of {
      return SchemaShape::AnyOf(branches);
    }

    if let Some(ref parts) = self.all_of
      && parts.len() == 1
    {
      return SchemaShape::SingleAllOf(&parts[0]);
    }

    if self.schema_type.as_deref() == Some("boolean") {
      return SchemaShape::Boolean;
    }

    SchemaShape::Opaque
  }
}

/// The parsed OpenAPI document, read-only for the whole run.
///
/// Holds the raw ordered document root for `$ref` traversal alongside the
/// typed view of `components.schemas`. Declaration order of the schemas map
/// is preserved end to end; it drives emission order.
pub(crate) struct SchemaGraph {
  root: Value,
  schemas: IndexMap<String, SchemaNode>,
}

impl SchemaGraph {
  pub(crate) fn from_document(root: Value) -> anyhow::Result<Self> {
    let schemas = match root.pointer("/components/schemas") {
      Some(section) => serde_json::from_value(section.clone())
        .map_err(|err| anyhow!("invalid schema node under components.schemas: {err}"))?,
      None => IndexMap::new(),
    };
    Ok(Self { root, schemas })
  }

  pub(crate) fn schemas(&self) -> &IndexMap<String, SchemaNode> {
    &self.schemas
  }

  /// Resolves an internal `#/`-prefixed pointer to the referenced model name.
  ///
  /// The pointer is traversed segment by segment from the document root; the
  /// target must expose a string `title`. Both a dangling path and a missing
  /// title are fatal for the whole run.
  pub(crate) fn resolve_ref(&self, pointer: &str) -> anyhow::Result<String> {
    let mut node = &self.root;
    for segment in pointer.split('/').skip(1) {
      node = node
        .get(segment)
        .ok_or_else(|| anyhow!("reference `{pointer}` does not resolve: no `{segment}` in document"))?;
    }

    node
      .get("title")
      .and_then(Value::as_str)
      .map(str::to_owned)
      .ok_or_else(|| anyhow!("reference target `{pointer}` has no usable title"))
  }
}
