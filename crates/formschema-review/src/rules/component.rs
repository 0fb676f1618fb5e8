//! Rules over `ui:component`.

use formschema_schema::ui::{DataSourceItem, RemoteConfig, UICompProps};
use formschema_schema::{ComponentName, Node, SchemaType};
use url::Url;

use crate::reviewer::Rule;
use crate::suggestion::{Level, Suggestion};

const SELECT: &str = "select";
const RADIO: &str = "radio";

fn props<'a>(node: &Node<'a>) -> Option<&'a UICompProps> {
    node.schema().ui_component.as_ref()?.props.as_ref()
}

fn datasource<'a>(node: &Node<'a>) -> Option<&'a [DataSourceItem]> {
    props(node)?
        .datasource
        .as_deref()
        .filter(|items| !items.is_empty())
}

fn remote_config<'a>(node: &Node<'a>) -> Option<&'a RemoteConfig> {
    props(node)?.remote_config.as_ref()
}

/// A field without a widget name falls back to the renderer's default
/// widget for its type. Object nodes are exempt: they render as a section
/// around their properties (or as the container named by `ui:group`),
/// never as a single widget, so a component name has nothing to select.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentNameNotSet;

impl Rule for ComponentNameNotSet {
    fn name(&self) -> &'static str {
        "componentNameNotSet"
    }

    fn validate(&self, node: Node<'_>) -> Vec<Suggestion> {
        if node.schema_type == Some(SchemaType::Object) || node.component_name().is_some() {
            return Vec::new();
        }
        vec![self.suggest(
            Level::Minor,
            node.field_path("ui:component.name"),
            "component name is not set, the renderer will pick a default widget".into(),
        )]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentNameMustBeValid;

impl Rule for ComponentNameMustBeValid {
    fn name(&self) -> &'static str {
        "componentNameMustBeValid"
    }

    fn validate(&self, node: Node<'_>) -> Vec<Suggestion> {
        match node.component_name() {
            Some(name) if ComponentName::from_name(name).is_none() => vec![self.suggest(
                Level::Major,
                node.field_path("ui:component.name"),
                format!("`{name}` is not a valid component name"),
            )],
            _ => Vec::new(),
        }
    }
}

/// `clearable`, `searchable` and `multiple` only affect the select widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectPropsOnlyForSelect;

impl Rule for SelectPropsOnlyForSelect {
    fn name(&self) -> &'static str {
        "selectPropsOnlyForSelect"
    }

    fn validate(&self, node: Node<'_>) -> Vec<Suggestion> {
        let Some(props) = props(&node) else {
            return Vec::new();
        };
        if node.component_name() == Some(SELECT) {
            return Vec::new();
        }
        [
            ("clearable", props.clearable),
            ("searchable", props.searchable),
            ("multiple", props.multiple),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_some())
        .map(|(key, _)| {
            self.suggest(
                Level::General,
                node.field_path(&format!("ui:component.props.{key}")),
                format!("{key} only applies to the select component"),
            )
        })
        .collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DataSourceRequiredForRadio;

impl Rule for DataSourceRequiredForRadio {
    fn name(&self) -> &'static str {
        "dataSourceRequiredForRadio"
    }

    fn validate(&self, node: Node<'_>) -> Vec<Suggestion> {
        if node.component_name() != Some(RADIO) || datasource(&node).is_some() {
            return Vec::new();
        }
        vec![self.suggest(
            Level::Major,
            node.field_path("ui:component.props.datasource"),
            "radio component requires a non-empty datasource".into(),
        )]
    }
}

/// A select needs options from exactly one place. A multi-select over
/// `items.enum` takes its options from the enum.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataSourceOrRemoteConfigRequired;

impl Rule for DataSourceOrRemoteConfigRequired {
    fn name(&self) -> &'static str {
        "dataSourceOrRemoteConfigRequired"
    }

    fn validate(&self, node: Node<'_>) -> Vec<Suggestion> {
        if node.component_name() != Some(SELECT) {
            return Vec::new();
        }
        let enum_items = node
            .items()
            .and_then(|items| items.schema().enum_values.as_ref())
            .is_some_and(|values| !values.is_empty());
        if enum_items {
            return Vec::new();
        }
        let detail = match (datasource(&node).is_some(), remote_config(&node).is_some()) {
            (true, false) | (false, true) => return Vec::new(),
            (false, false) => "select component requires a datasource or a remoteConfig",
            (true, true) => "select component takes a datasource or a remoteConfig, not both",
        };
        vec![self.suggest(
            Level::Major,
            node.field_path("ui:component.props"),
            detail.into(),
        )]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DataSourceItemMustBeValid;

impl Rule for DataSourceItemMustBeValid {
    fn name(&self) -> &'static str {
        "dataSourceItemMustBeValid"
    }

    fn validate(&self, node: Node<'_>) -> Vec<Suggestion> {
        let Some(items) = props(&node).and_then(|p| p.datasource.as_ref()) else {
            return Vec::new();
        };
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.label.trim().is_empty() || item.value.trim().is_empty())
            .map(|(i, _)| {
                self.suggest(
                    Level::Major,
                    node.field_path(&format!("ui:component.props.datasource.{i}")),
                    "datasource item requires a non-empty label and value".into(),
                )
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RemoteConfigOnlyForSelect;

impl Rule for RemoteConfigOnlyForSelect {
    fn name(&self) -> &'static str {
        "remoteConfigOnlyForSelect"
    }

    fn validate(&self, node: Node<'_>) -> Vec<Suggestion> {
        if remote_config(&node).is_none() || node.component_name() == Some(SELECT) {
            return Vec::new();
        }
        vec![self.suggest(
            Level::Major,
            node.field_path("ui:component.props.remoteConfig"),
            "remoteConfig only applies to the select component".into(),
        )]
    }
}

/// The url is either a `{{ }}` template resolved at render time or an
/// absolute http(s) URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoteConfigUrlMustBeValid;

impl RemoteConfigUrlMustBeValid {
    fn is_valid(raw: &str) -> bool {
        let raw = raw.trim();
        if raw.starts_with("{{") && raw.contains("}}") {
            return true;
        }
        Url::parse(raw)
            .map(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
            .unwrap_or(false)
    }
}

impl Rule for RemoteConfigUrlMustBeValid {
    fn name(&self) -> &'static str {
        "remoteConfigUrlMustBeValid"
    }

    fn validate(&self, node: Node<'_>) -> Vec<Suggestion> {
        match remote_config(&node) {
            Some(rc) if !Self::is_valid(&rc.url) => vec![self.suggest(
                Level::Major,
                node.field_path("ui:component.props.remoteConfig.url"),
                format!("`{}` is neither a {{{{ }}}} template nor an http(s) URL", rc.url),
            )],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::check;
    use formschema_schema::ui::UIComponent;
    use formschema_schema::{NodeId, SchemaTree, SubSchema};
    use serde_json::json;

    fn select(props: serde_json::Value) -> serde_json::Value {
        json!({
            "type": "string",
            "ui:component": {"name": "select", "props": props}
        })
    }

    #[test]
    fn test_component_name_not_set_skips_objects() {
        let found = check(
            &ComponentNameNotSet,
            json!({
                "type": "object",
                "properties": {
                    "a": {"type": "string"},
                    "b": {"type": "string", "ui:component": {"name": "input"}}
                }
            }),
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].node_path(), ".properties.a.ui:component.name");
        assert_eq!(found[0].level(), Level::Minor);
    }

    #[test]
    fn test_component_name_not_set_covers_arrays_not_grouped_objects() {
        let found = check(
            &ComponentNameNotSet,
            json!({
                "type": "object",
                "properties": {
                    "panel": {
                        "type": "object",
                        "properties": {"x": {"type": "string", "ui:component": {"name": "input"}}},
                        "ui:group": {"name": "card"}
                    },
                    "tags": {
                        "type": "array",
                        "items": {"type": "string", "ui:component": {"name": "input"}}
                    }
                }
            }),
        );
        let paths: Vec<_> = found.iter().map(Suggestion::node_path).collect();
        assert_eq!(paths, [".properties.tags.ui:component.name"]);
    }

    #[test]
    fn test_component_name_must_be_valid() {
        let mut tree = SchemaTree::new(SubSchema::of_type(SchemaType::Object));
        tree.add_property(
            NodeId::ROOT,
            "a",
            SubSchema {
                ui_component: Some(UIComponent {
                    name: Some("dropdown".into()),
                    props: None,
                }),
                ..SubSchema::of_type(SchemaType::String)
            },
        );
        let found: Vec<_> = tree
            .iter()
            .flat_map(|n| ComponentNameMustBeValid.validate(n))
            .collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].level(), Level::Major);
        assert!(found[0].detail().contains("dropdown"));
    }

    #[test]
    fn test_select_props_on_other_widget() {
        let found = check(
            &SelectPropsOnlyForSelect,
            json!({
                "type": "string",
                "ui:component": {"name": "input", "props": {"clearable": true, "multiple": false}}
            }),
        );
        let paths: Vec<_> = found.iter().map(Suggestion::node_path).collect();
        assert_eq!(
            paths,
            [".ui:component.props.clearable", ".ui:component.props.multiple"]
        );
        assert!(check(
            &SelectPropsOnlyForSelect,
            select(json!({"clearable": true, "remoteConfig": {"url": "{{api}}"}}))
        )
        .is_empty());
    }

    #[test]
    fn test_radio_requires_datasource() {
        let found = check(
            &DataSourceRequiredForRadio,
            json!({"type": "string", "ui:component": {"name": "radio"}}),
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].level(), Level::Major);

        let ok = json!({
            "type": "string",
            "ui:component": {
                "name": "radio",
                "props": {"datasource": [{"label": "A", "value": "a"}]}
            }
        });
        assert!(check(&DataSourceRequiredForRadio, ok).is_empty());
    }

    #[test]
    fn test_select_with_empty_datasource_is_major() {
        let found = check(&DataSourceOrRemoteConfigRequired, select(json!({"datasource": []})));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].rule_name(), "dataSourceOrRemoteConfigRequired");
        assert_eq!(found[0].level(), Level::Major);
        assert_eq!(found[0].node_path(), ".ui:component.props");
    }

    #[test]
    fn test_select_with_both_sources() {
        let found = check(
            &DataSourceOrRemoteConfigRequired,
            select(json!({
                "datasource": [{"label": "A", "value": "a"}],
                "remoteConfig": {"url": "https://example.com/options"}
            })),
        );
        assert_eq!(found.len(), 1);
        assert!(found[0].detail().contains("not both"));
    }

    #[test]
    fn test_select_over_enum_items_exempt() {
        let doc = json!({
            "type": "array",
            "items": {"type": "string", "enum": ["a", "b"]},
            "ui:component": {"name": "select", "props": {"multiple": true}}
        });
        assert!(check(&DataSourceOrRemoteConfigRequired, doc).is_empty());
    }

    #[test]
    fn test_datasource_item_blank() {
        let found = check(
            &DataSourceItemMustBeValid,
            select(json!({
                "datasource": [{"label": "A", "value": "a"}, {"label": "  ", "value": "b"}]
            })),
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].node_path(), ".ui:component.props.datasource.1");
    }

    #[test]
    fn test_remote_config_only_for_select() {
        let found = check(
            &RemoteConfigOnlyForSelect,
            json!({
                "type": "string",
                "ui:component": {"name": "input", "props": {"remoteConfig": {"url": "{{api}}"}}}
            }),
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].node_path(), ".ui:component.props.remoteConfig");
    }

    #[test]
    fn test_remote_config_url_shapes() {
        assert!(RemoteConfigUrlMustBeValid::is_valid("{{ .api.options }}"));
        assert!(RemoteConfigUrlMustBeValid::is_valid("https://example.com/api?x=1"));
        assert!(RemoteConfigUrlMustBeValid::is_valid("http://10.0.0.1:8080/opts"));
        assert!(!RemoteConfigUrlMustBeValid::is_valid("ftp://example.com/opts"));
        assert!(!RemoteConfigUrlMustBeValid::is_valid("/api/options"));
        assert!(!RemoteConfigUrlMustBeValid::is_valid("{{ unterminated"));
        assert!(!RemoteConfigUrlMustBeValid::is_valid(""));

        let found = check(
            &RemoteConfigUrlMustBeValid,
            select(json!({"remoteConfig": {"url": "options.json"}})),
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].node_path(), ".ui:component.props.remoteConfig.url");
    }
}
