//! Keyword spellings shared by the parser, the serializer, and the lint
//! and diff crates.

pub const TYPE: &str = "type";
pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const DEFAULT: &str = "default";
pub const REQUIRED: &str = "required";
pub const ENUM: &str = "enum";
pub const MIN_ITEMS: &str = "minItems";
pub const MAX_ITEMS: &str = "maxItems";
pub const UNIQUE_ITEMS: &str = "uniqueItems";
pub const ITEMS: &str = "items";
pub const PROPERTIES: &str = "properties";

/// Prefix shared by every UI extension keyword.
pub const UI_PREFIX: &str = "ui:";

pub const UI_COMPONENT: &str = "ui:component";
pub const UI_PROPS: &str = "ui:props";
pub const UI_REACTIONS: &str = "ui:reactions";
pub const UI_RULES: &str = "ui:rules";
pub const UI_GROUP: &str = "ui:group";
pub const UI_ORDER: &str = "ui:order";
