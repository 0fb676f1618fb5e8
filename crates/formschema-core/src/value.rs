//! # Generic Tree Helpers
//!
//! Small utilities over [`serde_json::Value`] shared by the parser and the
//! differ: naming the kind of a node for diagnostics and testing numbers
//! for integer-ness without going through a host float.

use std::fmt;

use serde_json::{Number, Value};

/// The six shapes a generic tree node can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Mapping,
}

impl ValueKind {
    /// Lowercase name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Mapping => "mapping",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a generic tree node.
pub fn kind_of(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Boolean,
        Value::Number(_) => ValueKind::Number,
        Value::String(_) => ValueKind::String,
        Value::Array(_) => ValueKind::Array,
        Value::Object(_) => ValueKind::Mapping,
    }
}

/// Returns true if the number literal denotes an integer.
///
/// With `arbitrary_precision` the literal text is kept, so `2.0` is not an
/// integer while `2` and `-7` are. Integers beyond the 64-bit range are
/// reported as non-integers; schema counters never need them.
pub fn is_integer(n: &Number) -> bool {
    n.as_u64().is_some() || n.as_i64().is_some()
}
