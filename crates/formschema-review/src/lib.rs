//! # formschema-review — Lint Rules & Reviewer
//!
//! Runs independent, stateless [`Rule`]s over every node of a parsed
//! [`SchemaTree`](formschema_schema::SchemaTree) and collects leveled
//! [`Suggestion`]s.
//!
//! ## Suites
//!
//! Rules are grouped by concern into six [`Suite`]s, each backed by one
//! [`Reviewer`]: native schema correctness, UI component correctness,
//! reactions, validation rules, groups, and field order. Running all of
//! them over one tree is the normal review ([`review_tree`]).
//!
//! ## Determinism
//!
//! Rules run in registration order; a reviewer visits a node, then its
//! `items`, then its `properties` in key order. The same tree always
//! yields the same suggestion list.
//!
//! ## Configuration
//!
//! [`ReviewConfig`] selects suites, disables individual rules, and sets a
//! minimum level. It loads from YAML or JSON.

pub mod config;
pub mod reviewer;
pub mod rules;
pub mod suggestion;

pub use config::{ConfigError, ReviewConfig};
pub use reviewer::{review_tree, Reviewer, Rule};
pub use rules::Suite;
pub use suggestion::{Level, Suggestion, Suggestions};
