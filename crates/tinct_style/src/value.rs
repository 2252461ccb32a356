//! Style property values
//!
//! Mapping documents carry two kinds of values: literals (numbers, strings,
//! booleans) and theme-token references. Token references are written as
//! strings with a `$` prefix (`"$color-primary"`); everything else is a
//! literal.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A literal style property value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Str(String),
    Bool(bool),
}

impl StyleValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// A mapping or token entry: either a literal value or a `$name` reference
/// into the active [`TokenStore`](crate::TokenStore)
#[derive(Clone, Debug, PartialEq)]
pub enum FragmentValue {
    Literal(StyleValue),
    Token(String),
}

impl FragmentValue {
    /// Interpret a string the way documents do: `$name` is a token
    /// reference, anything else a literal.
    pub fn from_document_str(value: &str) -> Self {
        match value.strip_prefix('$') {
            Some(token) => Self::Token(token.to_owned()),
            None => Self::Literal(StyleValue::Str(value.to_owned())),
        }
    }
}

impl From<f64> for FragmentValue {
    fn from(value: f64) -> Self {
        Self::Literal(StyleValue::Number(value))
    }
}

impl From<bool> for FragmentValue {
    fn from(value: bool) -> Self {
        Self::Literal(StyleValue::Bool(value))
    }
}

impl From<&str> for FragmentValue {
    fn from(value: &str) -> Self {
        Self::from_document_str(value)
    }
}

impl From<StyleValue> for FragmentValue {
    fn from(value: StyleValue) -> Self {
        match value {
            StyleValue::Str(s) if s.starts_with('$') => Self::Token(s[1..].to_owned()),
            other => Self::Literal(other),
        }
    }
}

impl Serialize for FragmentValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Literal(value) => value.serialize(serializer),
            Self::Token(name) => serializer.serialize_str(&format!("${name}")),
        }
    }
}

impl<'de> Deserialize<'de> for FragmentValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = StyleValue::deserialize(deserializer)?;
        Ok(Self::from(value))
    }
}
