mod classes;
mod enums;
mod forward_refs;
pub(crate) mod type_resolver;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};

use self::{classes::ClassConverter, enums::EnumConverter};
use super::{
  ast::ModelDef,
  schema_graph::{SchemaGraph, SchemaNode},
};

pub(crate) type ConversionResult<T> = anyhow::Result<T>;

/// Result of converting the whole `components.schemas` map: the declarations
/// in document order plus the names of schemas that produced no model.
#[derive(Debug, Default)]
pub(crate) struct ConversionOutput {
  pub models: Vec<ModelDef>,
  pub skipped: Vec<String>,
}

/// Walks `components.schemas` in declaration order and produces one model
/// declaration per recognized schema.
pub(crate) struct ModelConverter<'a> {
  graph: &'a SchemaGraph,
  class_converter: ClassConverter<'a>,
}

impl<'a> ModelConverter<'a> {
  pub(crate) fn new(graph: &'a SchemaGraph) -> Self {
    Self {
      graph,
      class_converter: ClassConverter::new(graph),
    }
  }

  pub(crate) fn convert_components(&self) -> ConversionResult<ConversionOutput> {
    let mut output = ConversionOutput::default();

    for (name, schema) in self.graph.schemas() {
      match self
        .convert_schema(name, schema)
        .with_context(|| format!("converting schema `{name}`"))?
      {
        Some(model) => output.models.push(model),
        None => output.skipped.push(name.clone()),
      }
    }

    Ok(output)
  }

  /// Dispatches one named schema. Object schemas with `properties` become
  /// classes, schemas with `enum` become enums (typed or bare), and any
  /// other shape produces no model at all.
  fn convert_schema(&self, name: &str, schema: &SchemaNode) -> Result<Option<ModelDef>> {
    if schema.schema_type.as_deref() == Some("object")
      && let Some(ref properties) = schema.properties
    {
      let class_def = self.class_converter.convert(name, schema, properties)?;
      return Ok(Some(ModelDef::Class(class_def)));
    }

    if let Some(ref values) = schema.enum_values {
      let enum_def = EnumConverter::convert(name, schema.schema_type.as_deref(), values)?;
      return Ok(Some(ModelDef::Enum(enum_def)));
    }

    Ok(None)
  }
}
