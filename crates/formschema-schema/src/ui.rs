//! # UI Extension Types
//!
//! Typed forms of the `ui:*` keywords layered on top of the schema
//! keywords. They are populated by the parser and serialized back with the
//! document spelling; unset optionals are omitted on output.

use serde::Serialize;
use serde_json::{Map, Number, Value};

/// `ui:component`: which widget renders the field and how.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UIComponent {
    /// Widget name. The parser only accepts names from
    /// [`ComponentName`](crate::types::ComponentName).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<UICompProps>,
}

/// `ui:component.props`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UICompProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clearable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub searchable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,
    /// Static options for choice widgets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasource: Option<Vec<DataSourceItem>>,
    /// Options fetched at render time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_config: Option<RemoteConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rows: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// One static option of a choice widget.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataSourceItem {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
}

/// Remote option source for a select widget.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RemoteConfig {
    /// A `{{ }}` template expression or an http(s) URL.
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Map<String, Value>>,
}

/// `ui:props`: layout and presentation hints for the form item.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UIProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readonly: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

/// One entry of `ui:reactions`.
///
/// `target` and `if` are free-form expressions evaluated by the renderer.
/// A reaction is keyed by its `source`: one reaction per source field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UIReaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    pub then: UIEffect,
    #[serde(rename = "else", skip_serializing_if = "Option::is_none")]
    pub otherwise: Option<UIEffect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifetime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// The outcome branch of a reaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UIEffect {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<UIState>,
}

impl UIEffect {
    /// True when the effect neither runs actions nor changes state.
    pub fn is_empty(&self) -> bool {
        self.actions.as_ref().map_or(true, Vec::is_empty) && self.state.is_none()
    }
}

/// State assigned to the target by a reaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UIState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

/// One entry of `ui:rules`.
///
/// A bare string names a globally defined rule; a mapping defines the rule
/// inline. Both shapes may appear in the same list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UIRule {
    Ref(String),
    Inline { validator: String, message: String },
}

/// `ui:group`: renders the node's properties inside a container widget.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UIGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<UIGroupProps>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<UIGroupStyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UIGroupProps {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_title: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<bool>,
    /// Panels expanded on first render; each names a property of the node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_active_name: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verifiable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_empty_row: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UIGroupStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}
