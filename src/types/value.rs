//! Typed value carried by a [`Factor`](crate::model::Factor).
//!
//! A factor's `value` can be a boolean flag (e.g. a red-flag symptom
//! present), a small integer (e.g. days since onset), or free text
//! (e.g. a duration phrase extracted verbatim). Modeling this as a
//! closed tagged union rather than `serde_json::Value` keeps factor
//! values introspectable without pulling arbitrary JSON into the
//! domain model (§9 design note).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A factor's extracted value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// A boolean flag.
    Bool(bool),
    /// A signed integer quantity.
    Int(i64),
    /// A short piece of extracted or normalized text.
    Str(String),
}

impl Value {
    /// Returns the inner `bool`, if this is a `Value::Bool`.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the inner `i64`, if this is a `Value::Int`.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the inner string slice, if this is a `Value::Str`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}
