//! Orchestration for the OpenAPI to pydantic generation pipeline.
//!
//! The `Orchestrator` owns the parsed schema graph and runs the single-pass
//! transform: schema graph -> model converter -> Python writer. There is no
//! retry or partial output; any fatal condition fails the whole run.

use anyhow::Result;

use super::{ast::ModelDef, codegen::PythonWriter, converter::ModelConverter, schema_graph::SchemaGraph};

/// Statistics about one generation run.
#[derive(Debug, Default)]
pub(crate) struct GenerationStats {
  pub models_generated: usize,
  pub classes_generated: usize,
  pub enums_generated: usize,
  pub rebuild_calls: usize,
  /// Schemas that matched no recognized shape and produced no model.
  pub skipped_schemas: Vec<String>,
}

pub(crate) struct GeneratedOutput {
  pub code: String,
  pub stats: GenerationStats,
}

pub(crate) struct Orchestrator {
  graph: SchemaGraph,
}

impl Orchestrator {
  pub(crate) fn new(graph: SchemaGraph) -> Self {
    Self { graph }
  }

  /// Generates the Python module source.
  pub(crate) fn generate(&self) -> Result<GeneratedOutput> {
    let conversion = ModelConverter::new(&self.graph).convert_components()?;
    let stats = Self::collect_stats(&conversion.models, conversion.skipped);
    let code = PythonWriter::write_module(&conversion.models);
    Ok(GeneratedOutput { code, stats })
  }

  /// Generates a pretty-printed JSON dump of the intermediate declarations
  /// instead of Python source, for diagnostics.
  pub(crate) fn generate_debug(&self) -> Result<GeneratedOutput> {
    let conversion = ModelConverter::new(&self.graph).convert_components()?;
    let stats = Self::collect_stats(&conversion.models, conversion.skipped);
    let mut code = serde_json::to_string_pretty(&conversion.models)?;
    code.push('\n');
    Ok(GeneratedOutput { code, stats })
  }

  fn collect_stats(models: &[ModelDef], skipped: Vec<String>) -> GenerationStats {
    GenerationStats {
      models_generated: models.len(),
      classes_generated: models.iter().filter(|m| matches!(m, ModelDef::Class(_))).count(),
      enums_generated: models.iter().filter(|m| matches!(m, ModelDef::Enum(_))).count(),
      rebuild_calls: models.iter().filter(|m| m.needs_rebuild()).count(),
      skipped_schemas: skipped,
    }
  }
}
