//! Rules over native schema keywords.

use formschema_schema::keyword::UI_PREFIX;
use formschema_schema::{Node, NodeSource, SchemaType};

use crate::reviewer::Rule;
use crate::suggestion::{Level, Suggestion};

/// `type` must be set. The parser already guarantees a valid type; this
/// catches hand-assembled trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeMustBeSet;

impl Rule for TypeMustBeSet {
    fn name(&self) -> &'static str {
        "typeMustBeSet"
    }

    fn validate(&self, node: Node<'_>) -> Vec<Suggestion> {
        if node.schema_type.is_some() {
            return Vec::new();
        }
        vec![self.suggest(
            Level::Major,
            node.field_path("type"),
            format!(
                "type must be one of: {}",
                SchemaType::ALL.map(|t| t.as_str()).join(", ")
            ),
        )]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TitleNotSet;

impl Rule for TitleNotSet {
    fn name(&self) -> &'static str {
        "titleNotSet"
    }

    fn validate(&self, node: Node<'_>) -> Vec<Suggestion> {
        if node.title.is_some() {
            return Vec::new();
        }
        // List items usually share the title of their array.
        let level = if node.source == NodeSource::Items {
            Level::Minor
        } else {
            Level::General
        };
        vec![self.suggest(level, node.field_path("title"), "title is not set".into())]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptionNotSet;

impl Rule for DescriptionNotSet {
    fn name(&self) -> &'static str {
        "descriptionNotSet"
    }

    fn validate(&self, node: Node<'_>) -> Vec<Suggestion> {
        if node.description.is_some() {
            return Vec::new();
        }
        vec![self.suggest(
            Level::Minor,
            node.field_path("description"),
            "description is not set".into(),
        )]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNotSet;

impl Rule for DefaultNotSet {
    fn name(&self) -> &'static str {
        "defaultNotSet"
    }

    fn validate(&self, node: Node<'_>) -> Vec<Suggestion> {
        if node.default.is_some() {
            return Vec::new();
        }
        vec![self.suggest(
            Level::Minor,
            node.field_path("default"),
            "default is not set".into(),
        )]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MinItemsNotSet;

impl Rule for MinItemsNotSet {
    fn name(&self) -> &'static str {
        "minItemsNotSet"
    }

    fn validate(&self, node: Node<'_>) -> Vec<Suggestion> {
        if node.items.is_none() || node.min_items.is_some_and(|n| n > 0) {
            return Vec::new();
        }
        vec![self.suggest(
            Level::General,
            node.field_path("minItems"),
            "minItems is not set or is 0, empty lists will be accepted".into(),
        )]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaxItemsNotSet;

impl Rule for MaxItemsNotSet {
    fn name(&self) -> &'static str {
        "maxItemsNotSet"
    }

    fn validate(&self, node: Node<'_>) -> Vec<Suggestion> {
        if node.items.is_none() || node.max_items.is_some() {
            return Vec::new();
        }
        vec![self.suggest(
            Level::General,
            node.field_path("maxItems"),
            "maxItems is not set, lists may grow without bound".into(),
        )]
    }
}

/// `items` on anything but an array is ignored by renderers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemsOnlyForArray;

impl Rule for ItemsOnlyForArray {
    fn name(&self) -> &'static str {
        "itemsOnlyForArray"
    }

    fn validate(&self, node: Node<'_>) -> Vec<Suggestion> {
        match node.schema_type {
            Some(t) if node.items.is_some() && t != SchemaType::Array => vec![self.suggest(
                Level::Major,
                node.field_path("items"),
                format!("items is only meaningful for type array, not {t}"),
            )],
            _ => Vec::new(),
        }
    }
}

/// A `ui:` keyword placed under `properties` becomes a field instead of a
/// UI extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyKeyHasUIPrefix;

impl Rule for PropertyKeyHasUIPrefix {
    fn name(&self) -> &'static str {
        "propertyKeyHasUIPrefix"
    }

    fn validate(&self, node: Node<'_>) -> Vec<Suggestion> {
        node.properties()
            .filter(|(key, _)| key.starts_with(UI_PREFIX))
            .map(|(key, child)| {
                self.suggest(
                    Level::Major,
                    child.path(),
                    format!("property `{key}` looks like a misplaced UI keyword"),
                )
            })
            .collect()
    }
}
