use anyhow::Result;

use crate::generator::{
  ast::{PyPrimitive, PyTypeExpr},
  schema_graph::{SchemaGraph, SchemaNode, SchemaShape},
};

/// Resolves schema nodes into Python type expressions (`PyTypeExpr`).
///
/// Resolution is a pure read-only traversal of the shared document; the only
/// failure mode is a `$ref` that does not resolve or whose target has no
/// usable title, which aborts the whole run.
pub(crate) struct TypeResolver<'a> {
  graph: &'a SchemaGraph,
}

impl<'a> TypeResolver<'a> {
  pub(crate) fn new(graph: &'a SchemaGraph) -> Self {
    Self { graph }
  }

  /// Maps one schema node to a type expression.
  ///
  /// Dispatch follows the shape precedence of [`SchemaNode::shape`]:
  /// primitives, internal references, arrays, `anyOf` unions (declaration
  /// order kept, no deduplication), single-element `allOf` flattened, and
  /// everything unrecognized degrades to `typing.Any`.
  pub(crate) fn resolve(&self, node: &SchemaNode) -> Result<PyTypeExpr> {
    match node.shape() {
      SchemaShape::Integer => Ok(PyTypeExpr::Primitive(PyPrimitive::Int)),
      SchemaShape::DateTime => Ok(PyTypeExpr::Primitive(PyPrimitive::DateTime)),
      SchemaShape::Uuid => Ok(PyTypeExpr::Primitive(PyPrimitive::Uuid)),
      SchemaShape::Str => Ok(PyTypeExpr::Primitive(PyPrimitive::Str)),
      SchemaShape::Boolean => Ok(PyTypeExpr::Primitive(PyPrimitive::Bool)),
      SchemaShape::Reference(pointer) => Ok(PyTypeExpr::Named(self.graph.resolve_ref(pointer)?)),
      SchemaShape::Array(items) => Ok(PyTypeExpr::List(Box::new(self.resolve(items)?))),
      SchemaShape::AnyOf(branches) => {
        let resolved = branches.iter().map(|branch| self.resolve(branch)).collect::<Result<_>>()?;
        Ok(PyTypeExpr::Union(resolved))
      }
      SchemaShape::SingleAllOf(inner) => self.resolve(inner),
      SchemaShape::Opaque => Ok(PyTypeExpr::Any),
    }
  }

  /// Resolves a property type, applying the `required`-set optionality rule.
  ///
  /// A field is wrapped in `typing.Optional` only when the schema declares a
  /// non-empty `required` list that does not contain the field. An absent or
  /// empty `required` list means every field is mandatory, not the inverse.
  pub(crate) fn resolve_field(&self, name: &str, node: &SchemaNode, required: &[String]) -> Result<PyTypeExpr> {
    let resolved = self.resolve(node)?;
    if !required.is_empty() && !required.iter().any(|entry| entry == name) {
      return Ok(PyTypeExpr::Optional(Box::new(resolved)));
    }
    Ok(resolved)
  }
}
