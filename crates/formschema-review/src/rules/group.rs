//! Rules over `ui:group`.

use formschema_schema::{ComponentName, Node};

use crate::reviewer::Rule;
use crate::suggestion::{Level, Suggestion};

/// The group container must be a known widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupNameMustBeValid;

impl Rule for GroupNameMustBeValid {
    fn name(&self) -> &'static str {
        "groupNameMustBeValid"
    }

    fn validate(&self, node: Node<'_>) -> Vec<Suggestion> {
        let Some(group) = node.schema().ui_group.as_ref() else {
            return Vec::new();
        };
        let detail = match group.name.as_deref() {
            None => "group name is not set".to_string(),
            Some(name) if ComponentName::from_name(name).is_none() => {
                format!("`{name}` is not a valid group component")
            }
            Some(_) => return Vec::new(),
        };
        vec![self.suggest(Level::Major, node.field_path("ui:group.name"), detail)]
    }
}

/// Each panel opened by default must be a property of the grouped node.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupDefaultActiveNameMustExists;

impl Rule for GroupDefaultActiveNameMustExists {
    fn name(&self) -> &'static str {
        "groupDefaultActiveNameMustExists"
    }

    fn validate(&self, node: Node<'_>) -> Vec<Suggestion> {
        let Some(names) = node
            .schema()
            .ui_group
            .as_ref()
            .and_then(|g| g.props.as_ref())
            .and_then(|p| p.default_active_name.as_ref())
        else {
            return Vec::new();
        };
        names
            .iter()
            .enumerate()
            .filter(|(_, name)| !node.has_property(name))
            .map(|(i, name)| {
                self.suggest(
                    Level::Major,
                    node.field_path(&format!("ui:group.props.defaultActiveName.{i}")),
                    format!("`{name}` is not a property of this node"),
                )
            })
            .collect()
    }
}
