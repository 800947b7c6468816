use std::{collections::HashSet, sync::LazyLock};

static PYTHON_KEYWORDS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del",
    "elif", "else", "except", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda", "nonlocal",
    "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
  ]
  .into_iter()
  .collect()
});

/// Checks whether a string can be used verbatim as a Python identifier.
///
/// ASCII rule: leading letter or underscore, then letters, digits and
/// underscores, and not a keyword. Enum member synthesis rejects values that
/// fail this check instead of guessing at an escaped spelling.
pub(crate) fn is_valid_python_identifier(name: &str) -> bool {
  let mut chars = name.chars();
  let Some(first) = chars.next() else {
    return false;
  };
  if !(first.is_ascii_alphabetic() || first == '_') {
    return false;
  }
  if !chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_') {
    return false;
  }
  !PYTHON_KEYWORDS.contains(name)
}
