//! # Document Loader
//!
//! Normalizes a document source into the number-preserving generic tree.
//!
//! ## Sources
//!
//! - **In-memory value**: any `Serialize` value is marshalled to JSON bytes
//!   and decoded back, so its numbers go through the same literal-keeping
//!   decoder as file content.
//! - **File path**: the extension selects the decoder (`.yaml`/`.yml` or
//!   `.json`). YAML is decoded with `yaml_rust2`, which keeps the literal
//!   text of real scalars, and converted node by node into the JSON
//!   representation, so both formats converge on one intermediate tree
//!   with the same number text before parsing.
//! - **Text**: content already in memory with an explicit format.
//!
//! Every failure is a distinct [`LoadError`]; nothing is retried.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Number, Value};
use yaml_rust2::{Yaml, YamlLoader};

use crate::error::LoadError;

/// Origin label used for content that did not come from a file.
const MEMORY_ORIGIN: &str = "<memory>";

/// Textual document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// YAML 1.2 (`.yaml`, `.yml`).
    Yaml,
    /// JSON (`.json`).
    Json,
}

impl Format {
    /// Map a file extension (without the dot, any case) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Determine the format of a file from its extension.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::UnsupportedFormat` for any other extension,
    /// including a missing one.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| LoadError::UnsupportedFormat {
                path: path.display().to_string(),
            })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => f.write_str("yaml"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Where a document comes from.
#[derive(Debug, Clone)]
pub enum Source {
    /// An already-decoded generic value.
    Value(Value),
    /// A YAML or JSON file on disk.
    Path(PathBuf),
    /// Document text held in memory.
    Text {
        /// Raw document text.
        content: String,
        /// Decoder to apply.
        format: Format,
    },
}

impl From<Value> for Source {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

/// Load any document source into the generic tree.
pub fn load(source: Source) -> Result<Value, LoadError> {
    match source {
        Source::Value(value) => load_value(&value),
        Source::Path(path) => load_file(path),
        Source::Text { content, format } => load_str(&content, format),
    }
}

/// Marshal an in-memory value to JSON and decode it back.
///
/// # Errors
///
/// Returns `LoadError::Serialization` if the value cannot be represented
/// as JSON (e.g. a map with non-string keys).
pub fn load_value<T: Serialize + ?Sized>(value: &T) -> Result<Value, LoadError> {
    let bytes = serde_json::to_vec(value)?;
    decode_json(&bytes, MEMORY_ORIGIN)
}

/// Read and decode a YAML or JSON file.
///
/// # Errors
///
/// - `LoadError::NotFound` if the path does not exist.
/// - `LoadError::UnsupportedFormat` if the extension is not recognised.
/// - `LoadError::Read` if the bytes cannot be read.
/// - `LoadError::InvalidYaml` / `LoadError::InvalidJson` for malformed content.
pub fn load_file(path: impl AsRef<Path>) -> Result<Value, LoadError> {
    let path = path.as_ref();
    let origin = path.display().to_string();

    if !path.exists() {
        return Err(LoadError::NotFound { path: origin });
    }
    let format = Format::from_path(path)?;
    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        path: origin.clone(),
        source,
    })?;

    let value = match format {
        Format::Yaml => decode_yaml(&bytes, &origin)?,
        Format::Json => decode_json(&bytes, &origin)?,
    };
    tracing::debug!(path = %origin, %format, "loaded schema document");
    Ok(value)
}

/// Decode document text held in memory.
pub fn load_str(content: &str, format: Format) -> Result<Value, LoadError> {
    match format {
        Format::Yaml => decode_yaml(content.as_bytes(), MEMORY_ORIGIN),
        Format::Json => decode_json(content.as_bytes(), MEMORY_ORIGIN),
    }
}

fn decode_json(bytes: &[u8], origin: &str) -> Result<Value, LoadError> {
    serde_json::from_slice(bytes).map_err(|e| LoadError::InvalidJson {
        origin: origin.to_string(),
        reason: e.to_string(),
    })
}

fn decode_yaml(bytes: &[u8], origin: &str) -> Result<Value, LoadError> {
    let invalid = |reason: String| LoadError::InvalidYaml {
        origin: origin.to_string(),
        reason,
    };
    let text = std::str::from_utf8(bytes).map_err(|e| invalid(e.to_string()))?;
    let mut docs = YamlLoader::load_from_str(text).map_err(|e| invalid(e.to_string()))?;
    match docs.len() {
        0 => Ok(Value::Null),
        1 => yaml_to_json_value(docs.remove(0)).map_err(invalid),
        n => Err(invalid(format!("expected one document, found {n}"))),
    }
}

/// Convert a YAML node to the number-preserving JSON tree.
///
/// Reals keep their literal text. Mapping keys must be strings, numbers,
/// or booleans; numbers and booleans are stringified.
fn yaml_to_json_value(yaml: Yaml) -> Result<Value, String> {
    match yaml {
        Yaml::Null => Ok(Value::Null),
        Yaml::Boolean(b) => Ok(Value::Bool(b)),
        Yaml::Integer(i) => Ok(Value::Number(Number::from(i))),
        Yaml::Real(text) => yaml_real(text),
        Yaml::String(s) => Ok(Value::String(s)),
        Yaml::Array(seq) => seq
            .into_iter()
            .map(yaml_to_json_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Yaml::Hash(map) => {
            let mut json_map = Map::new();
            for (k, v) in map {
                let key = match k {
                    Yaml::String(s) | Yaml::Real(s) => s,
                    Yaml::Integer(i) => i.to_string(),
                    Yaml::Boolean(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML map key: {other:?}")),
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        Yaml::Alias(id) => Err(format!("unresolved YAML alias {id}")),
        Yaml::BadValue => Err("invalid YAML node".to_string()),
    }
}

/// A plain scalar the YAML resolver classified as a real.
///
/// JSON-compatible literals are kept verbatim, including integers wider
/// than 64 bits. Other YAML spellings (`+1.5`, `.5`, `1.`) go through
/// `f64`. `nan` and `inf` without the leading dot are strings in YAML 1.2.
fn yaml_real(text: String) -> Result<Value, String> {
    if let Ok(n) = serde_json::from_str::<Number>(&text) {
        return Ok(Value::Number(n));
    }
    let magnitude = text
        .trim_start_matches(|c: char| c == '+' || c == '-')
        .to_ascii_lowercase();
    if magnitude == ".inf" || magnitude == ".nan" {
        return Err(format!("non-finite number {text} has no JSON representation"));
    }
    match text.parse::<f64>().ok().and_then(Number::from_f64) {
        Some(n) => Ok(Value::Number(n)),
        None => {
            tracing::warn!(scalar = %text, "keeping non-numeric YAML real as a string");
            Ok(Value::String(text))
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Integers keep their exact text through the YAML path.
        #[test]
        fn yaml_integers_preserved(n in any::<i64>()) {
            let value = load_str(&format!("n: {n}\n"), Format::Yaml).unwrap();
            prop_assert_eq!(value["n"].to_string(), n.to_string());
        }

        /// Decimal literals keep their exact text, trailing zeros included.
        #[test]
        fn yaml_decimals_preserved(int in 0u64..1_000_000, frac in "[0-9]{1,6}") {
            let literal = format!("{int}.{frac}");
            let value = load_str(&format!("n: {literal}\n"), Format::Yaml).unwrap();
            prop_assert_eq!(value["n"].to_string(), literal);
        }

        /// In-memory loading is the identity on JSON values.
        #[test]
        fn load_value_is_identity(s in "[a-z]{0,12}", n in any::<u32>(), b in any::<bool>()) {
            let original = serde_json::json!({"s": s, "n": n, "b": b, "list": [n, s]});
            let loaded = load_value(&original).unwrap();
            prop_assert_eq!(loaded, original);
        }
    }
}
