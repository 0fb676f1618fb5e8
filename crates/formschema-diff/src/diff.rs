//! Structural diff over the generic tree.

use std::collections::BTreeSet;
use std::fmt;

use formschema_core::{FormSchemaError, Value};
use serde::Serialize;

/// Path segments under which any difference is ignored.
const IGNORED_SEGMENTS: &[&str] = &["ui:rules"];

/// Path segments under which an added `null` is ignored.
const OPTIONAL_SEGMENTS: &[&str] = &["ui:component", "props", "ui:reactions"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAction {
    /// Present only in the new document.
    Add,
    /// Present only in the old document.
    Remove,
    /// Present in both with different values.
    Change,
}

impl DiffAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Change => "change",
        }
    }
}

impl fmt::Display for DiffAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One leaf-level difference.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    pub action: DiffAction,
    /// Dotted path, e.g. `.properties.a.enum.0`. The document root is `""`.
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<Value>,
}

impl DiffResult {
    fn add(path: String, value: &Value) -> Self {
        Self {
            action: DiffAction::Add,
            path,
            old_value: None,
            new_value: Some(value.clone()),
        }
    }

    fn remove(path: String, value: &Value) -> Self {
        Self {
            action: DiffAction::Remove,
            path,
            old_value: Some(value.clone()),
            new_value: None,
        }
    }

    fn change(path: String, old: &Value, new: &Value) -> Self {
        Self {
            action: DiffAction::Change,
            path,
            old_value: Some(old.clone()),
            new_value: Some(new.clone()),
        }
    }

    fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('.').filter(|s| !s.is_empty())
    }

    /// True for differences a round trip is expected to produce.
    pub fn is_benign(&self) -> bool {
        if self.segments().any(|s| IGNORED_SEGMENTS.contains(&s)) {
            return true;
        }
        self.action == DiffAction::Add
            && self.new_value.as_ref().is_some_and(Value::is_null)
            && self.segments().any(|s| OPTIONAL_SEGMENTS.contains(&s))
    }
}

impl fmt::Display for DiffResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "(root)" } else { self.path.as_str() };
        write!(f, "{} {path}", self.action)?;
        match (&self.old_value, &self.new_value) {
            (Some(old), Some(new)) => write!(f, ": {old} -> {new}"),
            (Some(old), None) => write!(f, ": {old}"),
            (None, Some(new)) => write!(f, ": {new}"),
            (None, None) => Ok(()),
        }
    }
}

/// Every difference between `old` and `new`.
///
/// Mappings are compared key by key in sorted key order and sequences
/// index by index. Any other mismatch, including a change of kind, is a
/// single `Change` at that path.
pub fn diff_raw(old: &Value, new: &Value) -> Vec<DiffResult> {
    let mut out = Vec::new();
    walk(String::new(), old, new, &mut out);
    out
}

fn walk(path: String, old: &Value, new: &Value, out: &mut Vec<DiffResult>) {
    match (old, new) {
        (Value::Object(a), Value::Object(b)) => {
            let keys: BTreeSet<&String> = a.keys().chain(b.keys()).collect();
            for key in keys {
                let child = format!("{path}.{key}");
                match (a.get(key.as_str()), b.get(key.as_str())) {
                    (Some(x), Some(y)) => walk(child, x, y, out),
                    (Some(x), None) => out.push(DiffResult::remove(child, x)),
                    (None, Some(y)) => out.push(DiffResult::add(child, y)),
                    (None, None) => {}
                }
            }
        }
        (Value::Array(a), Value::Array(b)) => {
            for i in 0..a.len().max(b.len()) {
                let child = format!("{path}.{i}");
                match (a.get(i), b.get(i)) {
                    (Some(x), Some(y)) => walk(child, x, y, out),
                    (Some(x), None) => out.push(DiffResult::remove(child, x)),
                    (None, Some(y)) => out.push(DiffResult::add(child, y)),
                    (None, None) => {}
                }
            }
        }
        _ if old != new => out.push(DiffResult::change(path, old, new)),
        _ => {}
    }
}

/// Drop the differences a round trip is expected to produce.
pub fn filter_benign(results: Vec<DiffResult>) -> Vec<DiffResult> {
    results.into_iter().filter(|r| !r.is_benign()).collect()
}

/// Differences between `old` and `new` that indicate lost information.
pub fn diff(old: &Value, new: &Value) -> Vec<DiffResult> {
    let raw = diff_raw(old, new);
    let total = raw.len();
    let kept = filter_benign(raw);
    tracing::debug!(raw = total, kept = kept.len(), "document diff");
    kept
}

/// Parse `doc`, serialize the tree back, and diff the two.
///
/// An empty result means the parser and serializer preserve everything
/// they understand about `doc`. Keys the parser ignores show up as
/// removals.
pub fn check_round_trip(doc: &Value) -> Result<Vec<DiffResult>, FormSchemaError> {
    let tree = formschema_schema::parse(doc)?;
    let round_tripped = tree.to_value()?;
    Ok(diff(doc, &round_tripped))
}
