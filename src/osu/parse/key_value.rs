//! Typed `Key: Value` parser, shared by `[General]`, `[Editor]`, `[Metadata]`, `[Difficulty]` and `[Colours]`.

use std::collections::HashMap;

use super::{parse_decimal, parse_integer};
use crate::osu::{
    error::{ParseErrorKind, Result, ValueKind},
    lex::{Line, entries},
    mixin::LineMixinExt,
    prompt::BooleanCoercion,
};

/// Declared fields of a section, mapping each key to the kind of its value.
pub type Schema = [(&'static str, ValueKind)];

/// A value coerced per the [`Schema`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Free text.
    String(String),
    /// A signed integer.
    Integer(i32),
    /// A finite decimal.
    Decimal(f64),
    /// A flag.
    Boolean(bool),
}

/// Typed values found in a section, by their key.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct KeyValues {
    entries: HashMap<&'static str, Value>,
}

impl KeyValues {
    /// Returns the value of `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns the number of values found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no value was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the string value of `key`, if present as a string.
    #[must_use]
    pub fn string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(value) => Some(value.clone()),
            _ => None,
        }
    }

    /// Returns the integer value of `key`, if present as an integer.
    #[must_use]
    pub fn integer(&self, key: &str) -> Option<i32> {
        match self.get(key)? {
            Value::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the decimal value of `key`, if present as a decimal.
    #[must_use]
    pub fn decimal(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Decimal(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the boolean value of `key`, if present as a boolean.
    #[must_use]
    pub fn boolean(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            Value::Boolean(value) => Some(*value),
            _ => None,
        }
    }
}

/// Splits a line on its first colon into the trimmed key and value.
///
/// # Errors
///
/// Returns [`ParseErrorKind::MalformedLine`] if the line has no colon.
pub fn split_key_value<'a>(line: &Line<'a>) -> Result<(&'a str, &'a str)> {
    let (key, value) = line.text.split_once(':').ok_or_else(|| {
        ParseErrorKind::MalformedLine(format!("expected `Key: Value`, but found `{}`", line.text))
            .at_line(line)
    })?;
    Ok((key.trim(), value.trim()))
}

/// Coerces `Key: Value` lines into typed values per the schema.
///
/// Keys absent from the schema are ignored. When a key repeats, the latter wins.
///
/// # Errors
///
/// - [`ParseErrorKind::MalformedLine`] if a line has no colon.
/// - [`ParseErrorKind::InvalidNumber`] if an integer or decimal field is not a valid numeral.
pub fn parse_key_values(
    lines: &[Line<'_>],
    schema: &Schema,
    booleans: BooleanCoercion,
) -> Result<KeyValues> {
    let mut parsed = KeyValues::default();
    for line in entries(lines) {
        let (key, value) = split_key_value(line)?;
        let Some(&(name, kind)) = schema.iter().find(|(name, _)| *name == key) else {
            continue;
        };
        let value = match kind {
            ValueKind::String => Value::String(value.to_string()),
            ValueKind::Integer => Value::Integer(parse_integer(value).map_err(|e| e.at_line(line))?),
            ValueKind::Decimal => Value::Decimal(parse_decimal(value).map_err(|e| e.at_line(line))?),
            ValueKind::Boolean => Value::Boolean(booleans.coerce(value)),
        };
        parsed.entries.insert(name, value);
    }
    Ok(parsed)
}
