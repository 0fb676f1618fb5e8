//! # formschema-schema — Node Model & Parser
//!
//! Converts the generic document tree produced by `formschema-core` into a
//! strongly-typed [`SchemaTree`], validating every keyword on the way in.
//!
//! ## Node Model (`node`, `ui`, `types`)
//!
//! All nodes of one parsed document live in a single arena owned by
//! [`SchemaTree`]. Children are referenced by [`NodeId`]; each node keeps a
//! non-owning `parent` index used only to rebuild its diagnostic path.
//! [`Node`] is the borrowed view handed to consumers.
//!
//! ## Parser (`parser`)
//!
//! [`parse`] is a recursive descent over the generic tree. Each node is
//! parsed in three passes (basic fields, array fields, properties and
//! `ui:*` fields) and the first error aborts the whole parse. There is no
//! partial tree.
//!
//! ## Serialization
//!
//! [`SchemaTree::to_value`] writes the tree back to a generic tree with the
//! original keyword spelling, which is what the round-trip differ compares.

pub mod keyword;
pub mod node;
pub mod parser;
pub mod types;
pub mod ui;

mod serialize;

pub use node::{Node, NodeId, NodeSource, SchemaTree, SubSchema, ROOT_PROPERTY};
pub use parser::{parse, parse_source};
pub use types::{ComponentName, SchemaType};
pub use ui::{
    DataSourceItem, RemoteConfig, UICompProps, UIComponent, UIEffect, UIGroup, UIGroupProps,
    UIGroupStyle, UIProps, UIReaction, UIRule, UIState,
};

pub use formschema_core::{FormSchemaError, ParseError};
