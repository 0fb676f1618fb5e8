//! Writes a subtree back out with the document's keyword spelling.
//!
//! Keys are emitted in a fixed order; absent keywords are skipped so the
//! output mirrors what the parser accepted.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::keyword;
use crate::node::Node;

struct Properties<'a>(Node<'a>);

impl Serialize for Properties<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.properties())
    }
}

impl Serialize for Node<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;

        if let Some(t) = &self.schema_type {
            map.serialize_entry(keyword::TYPE, t)?;
        }
        if let Some(v) = &self.title {
            map.serialize_entry(keyword::TITLE, v)?;
        }
        if let Some(v) = &self.description {
            map.serialize_entry(keyword::DESCRIPTION, v)?;
        }
        if let Some(v) = &self.default {
            map.serialize_entry(keyword::DEFAULT, v)?;
        }
        if let Some(v) = &self.required {
            map.serialize_entry(keyword::REQUIRED, v)?;
        }
        if let Some(v) = &self.enum_values {
            map.serialize_entry(keyword::ENUM, v)?;
        }
        if let Some(v) = &self.min_items {
            map.serialize_entry(keyword::MIN_ITEMS, v)?;
        }
        if let Some(v) = &self.max_items {
            map.serialize_entry(keyword::MAX_ITEMS, v)?;
        }
        if let Some(v) = &self.unique_items {
            map.serialize_entry(keyword::UNIQUE_ITEMS, v)?;
        }
        if let Some(items) = self.items() {
            map.serialize_entry(keyword::ITEMS, &items)?;
        }
        if self.properties.is_some() {
            map.serialize_entry(keyword::PROPERTIES, &Properties(*self))?;
        }
        if let Some(v) = &self.ui_component {
            map.serialize_entry(keyword::UI_COMPONENT, v)?;
        }
        if let Some(v) = &self.ui_props {
            map.serialize_entry(keyword::UI_PROPS, v)?;
        }
        if let Some(v) = &self.ui_reactions {
            map.serialize_entry(keyword::UI_REACTIONS, v)?;
        }
        if let Some(v) = &self.ui_rules {
            map.serialize_entry(keyword::UI_RULES, v)?;
        }
        if let Some(v) = &self.ui_group {
            map.serialize_entry(keyword::UI_GROUP, v)?;
        }
        if let Some(v) = &self.ui_order {
            map.serialize_entry(keyword::UI_ORDER, v)?;
        }

        map.end()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::node::{NodeId, SchemaTree, SubSchema};
    use crate::types::SchemaType;
    use crate::ui::{UIComponent, UIRule};

    #[test]
    fn test_hand_built_tree_serializes() {
        let mut root = SubSchema::of_type(SchemaType::Object);
        root.title = Some("App".into());
        root.ui_order = Some(vec!["name".into()]);
        let mut tree = SchemaTree::new(root);

        let mut name = SubSchema::of_type(SchemaType::String);
        name.ui_component = Some(UIComponent {
            name: Some("input".into()),
            props: None,
        });
        name.ui_rules = Some(vec![UIRule::Ref("dnsName".into())]);
        tree.add_property(NodeId::ROOT, "name", name);

        let tags = tree.add_property(NodeId::ROOT, "tags", SubSchema::of_type(SchemaType::Array));
        let mut item = SubSchema::of_type(SchemaType::String);
        item.enum_values = Some(vec!["a".into(), "b".into()]);
        tree.set_items(tags, item);

        assert_eq!(
            tree.to_value().unwrap(),
            json!({
                "type": "object",
                "title": "App",
                "properties": {
                    "name": {
                        "type": "string",
                        "ui:component": {"name": "input"},
                        "ui:rules": ["dnsName"]
                    },
                    "tags": {
                        "type": "array",
                        "items": {"type": "string", "enum": ["a", "b"]}
                    }
                },
                "ui:order": ["name"]
            })
        );
    }

    #[test]
    fn test_position_fields_not_serialized() {
        let tree = SchemaTree::new(SubSchema::of_type(SchemaType::Null));
        assert_eq!(tree.to_value().unwrap(), json!({"type": "null"}));
    }

    #[test]
    fn test_empty_properties_kept() {
        let mut root = SubSchema::of_type(SchemaType::Object);
        root.properties = Some(Default::default());
        let tree = SchemaTree::new(root);
        assert_eq!(
            tree.to_value().unwrap(),
            json!({"type": "object", "properties": {}})
        );
    }
}
