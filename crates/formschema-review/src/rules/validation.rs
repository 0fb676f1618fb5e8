//! Rules over `ui:rules`.

use formschema_schema::ui::UIRule;
use formschema_schema::Node;

use crate::reviewer::Rule;
use crate::suggestion::{Level, Suggestion};

/// A reference must name something and an inline rule must carry both a
/// validator and a message.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleMustBeValid;

impl Rule for RuleMustBeValid {
    fn name(&self) -> &'static str {
        "ruleMustBeValid"
    }

    fn validate(&self, node: Node<'_>) -> Vec<Suggestion> {
        let Some(rules) = node.schema().ui_rules.as_ref() else {
            return Vec::new();
        };
        rules
            .iter()
            .enumerate()
            .filter_map(|(i, rule)| {
                let detail = match rule {
                    UIRule::Ref(name) if name.trim().is_empty() => "rule reference is empty",
                    UIRule::Inline { validator, .. } if validator.trim().is_empty() => {
                        "inline rule has an empty validator"
                    }
                    UIRule::Inline { message, .. } if message.trim().is_empty() => {
                        "inline rule has an empty message"
                    }
                    _ => return None,
                };
                Some(self.suggest(
                    Level::Major,
                    node.field_path(&format!("ui:rules.{i}")),
                    detail.into(),
                ))
            })
            .collect()
    }
}
