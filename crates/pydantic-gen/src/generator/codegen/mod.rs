
use itertools::Itertools;

use super::ast::{ClassDef, EnumDef, ModelDef, render_literal};

const INDENT: &str = "    ";

/// Fixed import preamble; unused imports are an external formatter's problem,
/// not ours.
const PREAMBLE: &[&str] = &[
  "from pydantic import BaseModel",
  "from enum import Enum",
  "from datetime import datetime",
  "from uuid import UUID",
  "import typing",
];

/// Serializes the ordered declaration list to Python source.
///
/// Output layout is two-phase: the preamble, every model declaration in
/// schema-declaration order, then one `update_forward_refs()` call per
/// flagged class in the same relative order. The text is syntactically valid
/// but unformatted; whitespace normalization and import pruning are delegated
/// to the downstream formatting step.
pub(crate) struct PythonWriter;

impl PythonWriter {
  pub(crate) fn write_module(models: &[ModelDef]) -> String {
    let mut out = String::new();

    for import in PREAMBLE {
      out.push_str(import);
      out.push('\n');
    }

    for model in models {
      out.push('\n');
      match model {
        ModelDef::Class(def) => Self::write_class(&mut out, def),
        ModelDef::Enum(def) => Self::write_enum(&mut out, def),
      }
    }

    let rebuilds = models.iter().filter(|model| model.needs_rebuild());
    let mut wrote_rebuild_gap = false;
    for model in rebuilds {
      if !wrote_rebuild_gap {
        out.push('\n');
        wrote_rebuild_gap = true;
      }
      out.push_str(model.name());
      out.push_str(".update_forward_refs()\n");
    }

    out
  }

  fn write_class(out: &mut String, def: &ClassDef) {
    out.push_str(&format!("class {}(BaseModel):\n", def.name));

    if def.fields.is_empty() {
      out.push_str(INDENT);
      out.push_str("pass\n");
      return;
    }

    for field in &def.fields {
      out.push_str(INDENT);
      out.push_str(&field.name);
      out.push_str(": ");
      out.push_str(&field.py_type.render());
      if let Some(ref default) = field.default {
        out.push_str(" = ");
        out.push_str(&render_literal(default));
      }
      out.push('\n');
    }
  }

  fn write_enum(out: &mut String, def: &EnumDef) {
    out.push_str(&format!("class {}({}):\n", def.name, def.base.bases().iter().join(", ")));

    if def.members.is_empty() {
      out.push_str(INDENT);
      out.push_str("pass\n");
      return;
    }

    for member in &def.members {
      out.push_str(INDENT);
      out.push_str(&member.ident);
      out.push_str(" = ");
      out.push_str(&render_literal(&member.value));
      out.push('\n');
    }
  }
}
