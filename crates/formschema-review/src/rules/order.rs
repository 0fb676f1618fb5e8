//! Rules over `ui:order`.

use formschema_schema::Node;

use crate::reviewer::Rule;
use crate::suggestion::{Level, Suggestion};

#[derive(Debug, Clone, Copy, Default)]
pub struct OrderItemsMustExists;

impl Rule for OrderItemsMustExists {
    fn name(&self) -> &'static str {
        "orderItemsMustExists"
    }

    fn validate(&self, node: Node<'_>) -> Vec<Suggestion> {
        let Some(order) = node.schema().ui_order.as_ref() else {
            return Vec::new();
        };
        order
            .iter()
            .enumerate()
            .filter(|(_, key)| !node.has_property(key))
            .map(|(i, key)| {
                self.suggest(
                    Level::Major,
                    node.field_path(&format!("ui:order.{i}")),
                    format!("`{key}` is not a property of this node"),
                )
            })
            .collect()
    }
}
