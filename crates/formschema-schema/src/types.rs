//! # Closed Name Sets
//!
//! The schema `type` enum and the set of widget names the form renderer
//! understands. Both are exhaustive: adding a variant forces every `match`
//! in the workspace to handle it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Value of the `type` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Array,
    Boolean,
    Integer,
    Number,
    Null,
    Object,
    String,
}

impl SchemaType {
    /// Every supported type, in keyword order.
    pub const ALL: [SchemaType; 7] = [
        Self::Array,
        Self::Boolean,
        Self::Integer,
        Self::Number,
        Self::Null,
        Self::Object,
        Self::String,
    ];

    /// The keyword spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Null => "null",
            Self::Object => "object",
            Self::String => "string",
        }
    }

    /// Look up a type by its keyword spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Widget names accepted by `ui:component.name` and `ui:group.name`.
///
/// The last three are container widgets used by groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentName {
    Input,
    Textarea,
    Password,
    Number,
    Select,
    Radio,
    Checkbox,
    Switch,
    Slider,
    Date,
    Datetime,
    Time,
    Color,
    Upload,
    Cascader,
    Kv,
    Yaml,
    Tabs,
    Collapse,
    Card,
}

impl ComponentName {
    /// Every supported widget.
    pub const ALL: [ComponentName; 20] = [
        Self::Input,
        Self::Textarea,
        Self::Password,
        Self::Number,
        Self::Select,
        Self::Radio,
        Self::Checkbox,
        Self::Switch,
        Self::Slider,
        Self::Date,
        Self::Datetime,
        Self::Time,
        Self::Color,
        Self::Upload,
        Self::Cascader,
        Self::Kv,
        Self::Yaml,
        Self::Tabs,
        Self::Collapse,
        Self::Card,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Textarea => "textarea",
            Self::Password => "password",
            Self::Number => "number",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Switch => "switch",
            Self::Slider => "slider",
            Self::Date => "date",
            Self::Datetime => "datetime",
            Self::Time => "time",
            Self::Color => "color",
            Self::Upload => "upload",
            Self::Cascader => "cascader",
            Self::Kv => "kv",
            Self::Yaml => "yaml",
            Self::Tabs => "tabs",
            Self::Collapse => "collapse",
            Self::Card => "card",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_type_names_round_trip() {
        for t in SchemaType::ALL {
            assert_eq!(SchemaType::from_name(t.as_str()), Some(t));
        }
        assert_eq!(SchemaType::from_name("foo"), None);
        assert_eq!(SchemaType::from_name("Object"), None);
    }

    #[test]
    fn test_component_names_round_trip() {
        for c in ComponentName::ALL {
            assert_eq!(ComponentName::from_name(c.as_str()), Some(c));
        }
        assert_eq!(ComponentName::from_name("dropdown"), None);
    }

    #[test]
    fn test_serde_spelling_matches_as_str() {
        assert_eq!(
            serde_json::to_string(&SchemaType::Integer).unwrap(),
            "\"integer\""
        );
        assert_eq!(
            serde_json::to_string(&ComponentName::Datetime).unwrap(),
            "\"datetime\""
        );
    }
}
