use anyhow::{Context, Result};
use indexmap::IndexMap;

use super::{forward_refs::has_ref, type_resolver::TypeResolver};
use crate::generator::{
  ast::{ClassDef, FieldDef},
  schema_graph::{SchemaGraph, SchemaNode},
};

/// Converts `{type: object, properties: ...}` schemas into pydantic class
/// declarations.
pub(crate) struct ClassConverter<'a> {
  resolver: TypeResolver<'a>,
}

impl<'a> ClassConverter<'a> {
  pub(crate) fn new(graph: &'a SchemaGraph) -> Self {
    Self {
      resolver: TypeResolver::new(graph),
    }
  }

  /// Builds one class declaration, one field per property in source order.
  ///
  /// The schema's `required` list (absent means empty) drives field
  /// optionality, and a literal `default` is carried over verbatim. The
  /// rebuild flag comes from scanning the raw property schemas, not the
  /// resolved types.
  pub(crate) fn convert(
    &self,
    name: &str,
    schema: &SchemaNode,
    properties: &IndexMap<String, SchemaNode>,
  ) -> Result<ClassDef> {
    let required = schema.required.as_deref().unwrap_or_default();

    let fields = properties
      .iter()
      .map(|(prop_name, prop_schema)| {
        let py_type = self
          .resolver
          .resolve_field(prop_name, prop_schema, required)
          .with_context(|| format!("resolving property `{prop_name}` of `{name}`"))?;

        Ok(
          FieldDef::builder()
            .name(prop_name)
            .py_type(py_type)
            .maybe_default(prop_schema.default.clone())
            .build(),
        )
      })
      .collect::<Result<Vec<_>>>()?;

    let needs_rebuild = properties.values().any(has_ref);

    Ok(
      ClassDef::builder()
        .name(name)
        .fields(fields)
        .needs_rebuild(needs_rebuild)
        .build(),
    )
  }
}
