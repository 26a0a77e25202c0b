//! Dynamically resolved configuration values

use std::collections::HashMap;

use bot_git::SubmoduleEntry;
use serde::Serialize;

/// A value produced by dynamic resolution ([`crate::Resolver::get`]).
///
/// Serializes untagged, so a snapshot of resolved configuration reads as
/// plain JSON scalars and objects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Integer value (typed defaults, identity ids, coerced fallbacks)
    Int(i64),
    /// String value; empty when a fail-soft git property degraded
    Str(String),
    /// Remote refname → revision map
    Refs(HashMap<String, String>),
    /// Submodule path → entry map
    Submodules(HashMap<String, SubmoduleEntry>),
}

impl Value {
    /// The integer content, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The string content, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}
