#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Value
///
/// Raw scalar as it arrives in a write payload.
/// Variant order matters for untagged deserialization.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
    #[default]
    Null,
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Bool(_) => ValueType::Bool,
            Self::Int(_) | Self::Uint(_) => ValueType::Int,
            Self::Float(_) => ValueType::Float,
            Self::Text(_) => ValueType::String,
            Self::Null => ValueType::Null,
        }
    }

    /// Textual form used for stripping, length checks and storage.
    ///
    /// `true` renders as `"1"` and `false` as `""`; null has no form.
    #[must_use]
    pub fn string_form(&self) -> Option<String> {
        match self {
            Self::Bool(true) => Some("1".to_string()),
            Self::Bool(false) => Some(String::new()),
            Self::Int(v) => Some(v.to_string()),
            Self::Uint(v) => Some(v.to_string()),
            Self::Float(v) => Some(v.to_string()),
            Self::Text(s) => Some(s.clone()),
            Self::Null => None,
        }
    }

    /// Null, `""` and `false` are blank. Zero is not.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null | Self::Bool(false) => true,
            Self::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

///
/// ValueType
/// Type names checked by the `Type` constraint.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    Bool,
    Float,
    Int,
    Null,
    String,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Bool => "bool",
            Self::Float => "float",
            Self::Int => "int",
            Self::Null => "null",
            Self::String => "string",
        };
        write!(f, "{label}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "\"{s}\""),
            Self::Null => write!(f, "null"),
        }
    }
}
