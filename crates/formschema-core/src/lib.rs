//! # formschema-core — Generic Document Tree, Loader, and Errors
//!
//! This crate is the leaf of the formschema workspace. It defines the
//! untyped document representation that every other crate consumes and
//! the loader that produces it.
//!
//! ## Key Design Principles
//!
//! 1. **One intermediate format.** Documents arrive as in-memory values,
//!    YAML files, or JSON files. All of them converge on
//!    [`serde_json::Value`] before the parser sees them.
//!
//! 2. **Number text is preserved.** The workspace compiles `serde_json`
//!    with `arbitrary_precision`, so a literal such as `3.10` or
//!    `18446744073709551616` keeps its exact text. Integer-ness is tested
//!    explicitly by consumers, never assumed from a host numeric type.
//!
//! 3. **Closed union.** The generic tree is Null | Bool | Number(text) |
//!    String | Array | Object, so every consumer matches exhaustively.
//!
//! 4. **Stable iteration.** Objects are backed by a sorted map; the same
//!    document always walks in the same order.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `formschema-*` crates.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod loader;
pub mod value;

pub use error::{FormSchemaError, LoadError, ParseError};
pub use loader::{load, load_file, load_str, load_value, Format, Source};
pub use serde_json::{Map, Number, Value};
pub use value::{is_integer, kind_of, ValueKind};
