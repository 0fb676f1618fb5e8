//! # formschema-diff — Round-Trip Differ
//!
//! Compares two generic documents leaf by leaf and reports every
//! addition, removal, and change by dotted path. The main use is checking
//! that parsing a document and serializing the tree back loses nothing.
//!
//! ## Benign differences
//!
//! [`filter_benign`] drops differences that a round trip is expected to
//! introduce:
//!
//! - anything under `ui:rules`, since global rule references resolve
//!   differently on each side;
//! - an added `null` under `ui:component`, `props` or `ui:reactions`,
//!   where the round-tripped tree spells out an omitted optional field.
//!
//! Whatever survives the filter is a real round-trip defect.

pub mod diff;

pub use diff::{check_round_trip, diff, diff_raw, filter_benign, DiffAction, DiffResult};
