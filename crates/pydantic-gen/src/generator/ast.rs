use itertools::Itertools;
use serde::Serialize;
use serde_json::Value;

/// Scalar Python annotations the resolver can produce directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum PyPrimitive {
  Int,
  Str,
  Bool,
  DateTime,
  Uuid,
}

impl PyPrimitive {
  pub(crate) const fn render(self) -> &'static str {
    match self {
      PyPrimitive::Int => "int",
      PyPrimitive::Str => "str",
      PyPrimitive::Bool => "bool",
      PyPrimitive::DateTime => "datetime",
      PyPrimitive::Uuid => "UUID",
    }
  }
}

/// Closed type-expression grammar for generated annotations.
///
/// `Named` carries a symbolic model name rather than a pointer to the model
/// itself; linkage happens at emission time (quoted annotation plus a
/// trailing `update_forward_refs()` call), so mutually recursive models need
/// no ownership cycle here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum PyTypeExpr {
  Primitive(PyPrimitive),
  Named(String),
  List(Box<PyTypeExpr>),
  Union(Vec<PyTypeExpr>),
  Optional(Box<PyTypeExpr>),
  Any,
}

impl PyTypeExpr {
  pub(crate) fn render(&self) -> String {
    match self {
      PyTypeExpr::Primitive(primitive) => primitive.render().to_owned(),
      PyTypeExpr::Named(name) => format!("'{name}'"),
      PyTypeExpr::List(item) => format!("list[{}]", item.render()),
      PyTypeExpr::Union(branches) => {
        format!("typing.Union[{}]", branches.iter().map(Self::render).join(", "))
      }
      PyTypeExpr::Optional(inner) => format!("typing.Optional[{}]", inner.render()),
      PyTypeExpr::Any => "typing.Any".to_owned(),
    }
  }
}

/// One annotated field of a generated pydantic class, in source order.
#[derive(Debug, Clone, PartialEq, Serialize, bon::Builder)]
pub(crate) struct FieldDef {
  #[builder(into)]
  pub name: String,
  pub py_type: PyTypeExpr,
  pub default: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, bon::Builder)]
pub(crate) struct ClassDef {
  #[builder(into)]
  pub name: String,
  #[builder(default)]
  pub fields: Vec<FieldDef>,
  /// True when any field's raw schema carries a `$ref`; the emitter appends
  /// an `update_forward_refs()` call for the class after all declarations.
  #[builder(default)]
  pub needs_rebuild: bool,
}

/// Base classes of a generated enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum EnumBase {
  Str,
  Int,
  Plain,
}

impl EnumBase {
  pub(crate) fn classify(schema_type: Option<&str>) -> Self {
    match schema_type {
      Some("string") => EnumBase::Str,
      Some("integer") => EnumBase::Int,
      _ => EnumBase::Plain,
    }
  }

  pub(crate) const fn bases(self) -> &'static [&'static str] {
    match self {
      EnumBase::Str => &["str", "Enum"],
      EnumBase::Int => &["int", "Enum"],
      EnumBase::Plain => &["Enum"],
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, bon::Builder)]
pub(crate) struct MemberDef {
  #[builder(into)]
  pub ident: String,
  pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, bon::Builder)]
pub(crate) struct EnumDef {
  #[builder(into)]
  pub name: String,
  pub base: EnumBase,
  #[builder(default)]
  pub members: Vec<MemberDef>,
}

/// Top-level generated declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ModelDef {
  Class(ClassDef),
  Enum(EnumDef),
}

impl ModelDef {
  pub(crate) fn name(&self) -> &str {
    match self {
      ModelDef::Class(def) => &def.name,
      ModelDef::Enum(def) => &def.name,
    }
  }

  pub(crate) fn needs_rebuild(&self) -> bool {
    match self {
      ModelDef::Class(def) => def.needs_rebuild,
      ModelDef::Enum(_) => false,
    }
  }
}

/// Renders a JSON literal as Python source.
pub(crate) fn render_literal(value: &Value) -> String {
  match value {
    Value::Null => "None".to_owned(),
    Value::Bool(true) => "True".to_owned(),
    Value::Bool(false) => "False".to_owned(),
    Value::Number(number) => number.to_string(),
    Value::String(text) => render_string_literal(text),
    Value::Array(items) => format!("[{}]", items.iter().map(render_literal).join(", ")),
    Value::Object(entries) => format!(
      "{{{}}}",
      entries
        .iter()
        .map(|(key, item)| format!("{}: {}", render_string_literal(key), render_literal(item)))
        .join(", ")
    ),
  }
}

fn render_string_literal(text: &str) -> String {
  let mut out = String::with_capacity(text.len() + 2);
  out.push('\'');
  for ch in text.chars() {
    match ch {
      '\\' => out.push_str("\\\\"),
      '\'' => out.push_str("\\'"),
      '\n' => out.push_str("\\n"),
      '\r' => out.push_str("\\r"),
      '\t' => out.push_str("\\t"),
      other => out.push(other),
    }
  }
  out.push('\'');
  out
}
