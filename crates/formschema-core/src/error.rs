//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types shared across formschema. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Loader errors name the document origin and the reason.
//! - Parse errors carry the node path of the failing field, reconstructed
//!   root-to-leaf (e.g. `.properties.spec.properties.replicas.minItems`).
//!   The root node's own path is the empty string.
//! - Every error aborts the operation it occurred in. Nothing is retried
//!   or silently corrected.

use thiserror::Error;

use crate::value::ValueKind;

/// Top-level error type for the load-then-parse pipeline.
#[derive(Error, Debug)]
pub enum FormSchemaError {
    /// The document could not be loaded into a generic tree.
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// The generic tree is not a valid schema document.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Error while normalizing a document source into a generic tree.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The document path does not exist.
    #[error("document not found: {path}")]
    NotFound {
        /// Path that was requested.
        path: String,
    },

    /// The document exists but its bytes could not be read.
    #[error("cannot read document '{path}': {source}")]
    Read {
        /// Path that failed to read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file extension is not one of `.yaml`, `.yml`, `.json`.
    #[error("unsupported document format for '{path}': expected .yaml, .yml or .json")]
    UnsupportedFormat {
        /// Path with the unsupported extension.
        path: String,
    },

    /// YAML content is malformed or uses constructs JSON cannot express.
    #[error("invalid YAML in '{origin}': {reason}")]
    InvalidYaml {
        /// File path, or `<memory>` for in-memory text.
        origin: String,
        /// Decoder message.
        reason: String,
    },

    /// JSON content is malformed.
    #[error("invalid JSON in '{origin}': {reason}")]
    InvalidJson {
        /// File path, or `<memory>` for in-memory text.
        origin: String,
        /// Decoder message.
        reason: String,
    },

    /// An in-memory value could not be serialized to JSON.
    #[error("cannot serialize in-memory document: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Structural or type error found while parsing a schema document.
///
/// Each variant carries the node path of the failing field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The root document is not a mapping.
    #[error("schema is invalid: expected a mapping, found {found}")]
    SchemaInvalid {
        /// Always the root path.
        path: String,
        /// Kind of the value found instead.
        found: ValueKind,
    },

    /// A required field is missing (or empty where emptiness is forbidden).
    #[error("{path} is required")]
    Required {
        /// Path of the missing field.
        path: String,
    },

    /// The `type` keyword is present but is not a string.
    #[error("{path} has an invalid type: expected a string, found {found}")]
    InvalidType {
        /// Path of the `type` field.
        path: String,
        /// Kind of the value found instead.
        found: ValueKind,
    },

    /// The `type` keyword names a type outside the supported set.
    #[error("{path}: '{value}' is not a valid type")]
    NotAValidType {
        /// Path of the `type` field.
        path: String,
        /// The rejected type name.
        value: String,
    },

    /// A component or group name outside the supported widget set.
    #[error("{path}: '{value}' is not a valid component")]
    NotAValidComponent {
        /// Path of the `name` field.
        path: String,
        /// The rejected widget name.
        value: String,
    },

    /// A counter is negative.
    #[error("{path} must be greater than or equal to 0")]
    MustBeGTEZero {
        /// Path of the counter field.
        path: String,
    },

    /// A counter is below one.
    #[error("{path} must be greater than or equal to 1")]
    MustBeGTEOne {
        /// Path of the counter field.
        path: String,
    },

    /// A field has the wrong shape; the expected kind takes "a".
    #[error("{path} must be of a {expected}")]
    MustBeOfA {
        /// Path of the field.
        path: String,
        /// Expected kind, e.g. `string`.
        expected: &'static str,
    },

    /// A field has the wrong shape; the expected kind takes "an".
    #[error("{path} must be of an {expected}")]
    MustBeOfAn {
        /// Path of the field.
        path: String,
        /// Expected kind, e.g. `integer`.
        expected: &'static str,
    },

    /// A `ui:*` object field is an empty mapping.
    #[error("{path} must not be an empty mapping")]
    EmptyMap {
        /// Path of the empty mapping.
        path: String,
    },
}

impl ParseError {
    /// Build a shape error, choosing `MustBeOfA` or `MustBeOfAn` from the
    /// first letter of the expected kind.
    pub fn must_be(path: impl Into<String>, expected: &'static str) -> Self {
        let path = path.into();
        match expected.chars().next() {
            Some('a' | 'e' | 'i' | 'o' | 'u') => Self::MustBeOfAn { path, expected },
            _ => Self::MustBeOfA { path, expected },
        }
    }

    /// Node path of the failing field.
    pub fn path(&self) -> &str {
        match self {
            Self::SchemaInvalid { path, .. }
            | Self::Required { path }
            | Self::InvalidType { path, .. }
            | Self::NotAValidType { path, .. }
            | Self::NotAValidComponent { path, .. }
            | Self::MustBeGTEZero { path }
            | Self::MustBeGTEOne { path }
            | Self::MustBeOfA { path, .. }
            | Self::MustBeOfAn { path, .. }
            | Self::EmptyMap { path } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_must_be_picks_article() {
        assert_eq!(
            ParseError::must_be(".minItems", "integer"),
            ParseError::MustBeOfAn {
                path: ".minItems".into(),
                expected: "integer"
            }
        );
        assert_eq!(
            ParseError::must_be(".title", "string"),
            ParseError::MustBeOfA {
                path: ".title".into(),
                expected: "string"
            }
        );
        assert!(matches!(
            ParseError::must_be(".required", "array"),
            ParseError::MustBeOfAn { .. }
        ));
    }

    #[test]
    fn test_display_includes_path() {
        let err = ParseError::Required {
            path: ".properties.name.type".into(),
        };
        assert_eq!(err.to_string(), ".properties.name.type is required");

        let err = ParseError::must_be(".properties.a.minItems", "integer");
        assert_eq!(err.to_string(), ".properties.a.minItems must be of an integer");
    }

    #[test]
    fn test_path_accessor() {
        let err = ParseError::EmptyMap {
            path: ".ui:group".into(),
        };
        assert_eq!(err.path(), ".ui:group");

        let err = ParseError::SchemaInvalid {
            path: String::new(),
            found: ValueKind::Array,
        };
        assert_eq!(err.path(), "");
        assert!(err.to_string().contains("found array"));
    }

    #[test]
    fn test_form_schema_error_wraps_parse_error() {
        let err: FormSchemaError = ParseError::MustBeGTEOne {
            path: ".maxItems".into(),
        }
        .into();
        assert!(matches!(err, FormSchemaError::Parse(_)));
        assert!(err.to_string().starts_with("parse error: .maxItems"));
    }
}
