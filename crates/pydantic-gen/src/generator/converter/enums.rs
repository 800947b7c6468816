use anyhow::{Result, bail};
use serde_json::Value;

use crate::{
  generator::ast::{EnumBase, EnumDef, MemberDef},
  reserved::is_valid_python_identifier,
};

/// Converts enum schemas into Python `Enum` declarations.
///
/// The base kind follows the schema's `type`: `string` enums subclass
/// `(str, Enum)`, `integer` enums subclass `(int, Enum)`, anything else
/// (including an absent `type`) subclasses bare `Enum`.
pub(crate) struct EnumConverter;

impl EnumConverter {
  pub(crate) fn convert(name: &str, schema_type: Option<&str>, values: &[Value]) -> Result<EnumDef> {
    let base = EnumBase::classify(schema_type);
    let members = match base {
      EnumBase::Int => Self::integer_members(name, values)?,
      EnumBase::Str | EnumBase::Plain => Self::literal_members(name, values)?,
    };

    Ok(EnumDef::builder().name(name).base(base).members(members).build())
  }

  /// Integer enums get synthesized sequential identifiers (`a = 10`,
  /// `b = 20`, ...) since the literal values cannot name a member.
  fn integer_members(name: &str, values: &[Value]) -> Result<Vec<MemberDef>> {
    values
      .iter()
      .enumerate()
      .map(|(index, value)| {
        if !value.is_i64() && !value.is_u64() {
          bail!("enum `{name}` declares integer base but member `{value}` is not an integer");
        }
        Ok(
          MemberDef::builder()
            .ident(sequential_ident(index))
            .value(value.clone())
            .build(),
        )
      })
      .collect()
  }

  /// String and untyped enums use the literal value as the member identifier.
  /// Values that are not identifier-safe are rejected rather than escaped.
  fn literal_members(name: &str, values: &[Value]) -> Result<Vec<MemberDef>> {
    values
      .iter()
      .map(|value| {
        let Some(literal) = value.as_str() else {
          bail!("enum `{name}` member `{value}` is not a string literal");
        };
        if !is_valid_python_identifier(literal) {
          bail!("enum `{name}` member `{literal}` is not a valid Python identifier");
        }
        Ok(MemberDef::builder().ident(literal).value(value.clone()).build())
      })
      .collect()
  }
}

/// N-th lowercase identifier in enumeration order: `a..z`, then `aa`, `ab`, ...
fn sequential_ident(index: usize) -> String {
  let mut remaining = index;
  let mut reversed = Vec::new();
  loop {
    reversed.push(char::from(b'a' + (remaining % 26) as u8));
    if remaining < 26 {
      break;
    }
    remaining = remaining / 26 - 1;
  }
  reversed.iter().rev().collect()
}

#[cfg(test)]
mod ident_tests {
  use super::sequential_ident;

  #[test]
  fn test_sequential_ident_single_letters() {
    assert_eq!(sequential_ident(0), "a");
    assert_eq!(sequential_ident(1), "b");
    assert_eq!(sequential_ident(25), "z");
  }

  #[test]
  fn test_sequential_ident_wraps_past_alphabet() {
    assert_eq!(sequential_ident(26), "aa");
    assert_eq!(sequential_ident(27), "ab");
    assert_eq!(sequential_ident(51), "az");
    assert_eq!(sequential_ident(52), "ba");
  }
}
