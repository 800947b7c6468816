use crate::generator::schema_graph::SchemaNode;

/// Scans a raw property schema for any `$ref` occurrence.
///
/// The scan is conservative and runs before resolution: a direct `$ref`, a
/// `$ref` inside array `items`, or a `$ref` in any `anyOf` branch flags the
/// owning class for a post-declaration rebuild, even when the reference
/// points at an earlier declaration. `allOf` branches are not scanned.
pub(crate) fn has_ref(node: &SchemaNode) -> bool {
  if node.ref_path.is_some() {
    return true;
  }

  if node.schema_type.as_deref() == Some("array")
    && let Some(ref items) = node.items
  {
    return has_ref(items);
  }

  if let Some(ref branches) = node.any_of {
    return branches.iter().any(has_ref);
  }

  false
}
