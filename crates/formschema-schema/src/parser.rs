//! # Parser
//!
//! Recursive descent from the generic tree into a [`SchemaTree`].
//!
//! Every node is parsed in three fixed passes so a structurally wrong
//! early field fails before later fields are examined:
//!
//! 1. basic fields: `type`, `title`, `description`, `default`, `required`
//! 2. array fields: `minItems`, `maxItems`, `uniqueItems`, `enum`, `items`
//! 3. `properties` and the `ui:*` extension keywords
//!
//! The first error aborts the parse. Errors carry the node path of the
//! failing field.

use std::collections::BTreeMap;

use serde_json::{Map, Number, Value};

use formschema_core::{is_integer, kind_of, FormSchemaError, ParseError, Source};

use crate::keyword;
use crate::node::{NodeId, NodeSource, SchemaTree, SubSchema};
use crate::types::{ComponentName, SchemaType};
use crate::ui::{
    DataSourceItem, RemoteConfig, UICompProps, UIComponent, UIEffect, UIGroup, UIGroupProps,
    UIGroupStyle, UIProps, UIReaction, UIRule, UIState,
};

/// Parse a generic document into a schema tree.
///
/// # Errors
///
/// Returns `ParseError::SchemaInvalid` if the document is not a mapping,
/// and the first structural or type error found anywhere below it
/// otherwise.
pub fn parse(document: &Value) -> Result<SchemaTree, ParseError> {
    let map = document.as_object().ok_or_else(|| ParseError::SchemaInvalid {
        path: String::new(),
        found: kind_of(document),
    })?;

    let mut tree = SchemaTree::new(SubSchema::default());
    parse_schema(&mut tree, map, NodeId::ROOT)?;
    tracing::debug!(nodes = tree.len(), "parsed schema document");
    Ok(tree)
}

/// Load a document from any source and parse it.
pub fn parse_source(source: impl Into<Source>) -> Result<SchemaTree, FormSchemaError> {
    let document = formschema_core::load(source.into())?;
    Ok(parse(&document)?)
}

fn parse_schema(
    tree: &mut SchemaTree,
    map: &Map<String, Value>,
    id: NodeId,
) -> Result<(), ParseError> {
    let fields = Fields {
        map,
        path: tree.path_of(id),
    };
    parse_basic_fields(tree, &fields, id)?;
    parse_array_fields(tree, &fields, id)?;
    parse_properties_and_ui(tree, &fields, id)
}

fn parse_basic_fields(
    tree: &mut SchemaTree,
    fields: &Fields<'_>,
    id: NodeId,
) -> Result<(), ParseError> {
    let schema_type = match fields.get(keyword::TYPE) {
        None => {
            return Err(ParseError::Required {
                path: fields.path_to(keyword::TYPE),
            })
        }
        Some(Value::String(name)) => {
            SchemaType::from_name(name).ok_or_else(|| ParseError::NotAValidType {
                path: fields.path_to(keyword::TYPE),
                value: name.clone(),
            })?
        }
        Some(other) => {
            return Err(ParseError::InvalidType {
                path: fields.path_to(keyword::TYPE),
                found: kind_of(other),
            })
        }
    };

    let title = fields.string(keyword::TITLE)?;
    let description = fields.string(keyword::DESCRIPTION)?;
    let required = fields.strings(keyword::REQUIRED)?;

    let node = tree.get_mut(id);
    node.schema_type = Some(schema_type);
    node.title = title;
    node.description = description;
    node.default = fields.get(keyword::DEFAULT).cloned();
    node.required = required;
    Ok(())
}

fn parse_array_fields(
    tree: &mut SchemaTree,
    fields: &Fields<'_>,
    id: NodeId,
) -> Result<(), ParseError> {
    let min_items = fields.count(keyword::MIN_ITEMS)?;
    let max_items = fields.count(keyword::MAX_ITEMS)?;
    if max_items == Some(0) {
        return Err(ParseError::MustBeGTEOne {
            path: fields.path_to(keyword::MAX_ITEMS),
        });
    }
    let unique_items = fields.bool(keyword::UNIQUE_ITEMS)?;
    let enum_values = fields.strings(keyword::ENUM)?;

    {
        let node = tree.get_mut(id);
        node.min_items = min_items;
        node.max_items = max_items;
        node.unique_items = unique_items;
        node.enum_values = enum_values;
    }

    if let Some(items) = fields.get(keyword::ITEMS) {
        let items = items
            .as_object()
            .ok_or_else(|| ParseError::must_be(fields.path_to(keyword::ITEMS), "mapping"))?;
        let child = SubSchema {
            property: tree.get(id).property.clone(),
            source: NodeSource::Items,
            parent: Some(id),
            ..Default::default()
        };
        let child = tree.push(child);
        tree.get_mut(id).items = Some(child);
        parse_schema(tree, items, child)?;
    }
    Ok(())
}

fn parse_properties_and_ui(
    tree: &mut SchemaTree,
    fields: &Fields<'_>,
    id: NodeId,
) -> Result<(), ParseError> {
    if let Some(props) = fields.mapping(keyword::PROPERTIES)? {
        let mut children = BTreeMap::new();
        for (key, value) in props.map {
            let path = props.path_to(key);
            let map = value
                .as_object()
                .ok_or_else(|| ParseError::must_be(path, "mapping"))?;
            let child = tree.push(SubSchema {
                property: key.clone(),
                source: NodeSource::Properties,
                parent: Some(id),
                ..Default::default()
            });
            children.insert(key.clone(), child);
            parse_schema(tree, map, child)?;
        }
        tree.get_mut(id).properties = Some(children);
    }

    let ui_component = fields
        .non_empty_mapping(keyword::UI_COMPONENT)?
        .map(|f| parse_component(&f))
        .transpose()?;
    let ui_props = fields
        .non_empty_mapping(keyword::UI_PROPS)?
        .map(|f| parse_props(&f))
        .transpose()?;
    let ui_reactions = fields
        .mappings(keyword::UI_REACTIONS)?
        .map(|list| list.iter().map(parse_reaction).collect::<Result<Vec<_>, _>>())
        .transpose()?;
    let ui_rules = parse_rules(fields)?;
    let ui_group = fields
        .non_empty_mapping(keyword::UI_GROUP)?
        .map(|f| parse_group(&f))
        .transpose()?;
    let ui_order = fields.strings(keyword::UI_ORDER)?;

    let node = tree.get_mut(id);
    node.ui_component = ui_component;
    node.ui_props = ui_props;
    node.ui_reactions = ui_reactions;
    node.ui_rules = ui_rules;
    node.ui_group = ui_group;
    node.ui_order = ui_order;
    Ok(())
}

fn parse_component(fields: &Fields<'_>) -> Result<UIComponent, ParseError> {
    Ok(UIComponent {
        name: fields.widget_name("name")?,
        props: fields
            .non_empty_mapping("props")?
            .map(|f| parse_component_props(&f))
            .transpose()?,
    })
}

fn parse_component_props(fields: &Fields<'_>) -> Result<UICompProps, ParseError> {
    let datasource = fields
        .mappings("datasource")?
        .map(|list| {
            list.iter()
                .map(|item| {
                    Ok::<_, ParseError>(DataSourceItem {
                        label: item.required_non_empty_string("label")?,
                        value: item.required_non_empty_string("value")?,
                        disabled: item.bool("disabled")?,
                        tips: item.string("tips")?,
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?;

    let remote_config = fields
        .mapping("remoteConfig")?
        .map(|rc| {
            Ok::<_, ParseError>(RemoteConfig {
                url: rc.required_string("url")?,
                params: rc.mapping("params")?.map(|p| p.map.clone()),
            })
        })
        .transpose()?;

    Ok(UICompProps {
        clearable: fields.bool("clearable")?,
        searchable: fields.bool("searchable")?,
        multiple: fields.bool("multiple")?,
        datasource,
        remote_config,
        min: fields.number("min")?,
        max: fields.number("max")?,
        unit: fields.string("unit")?,
        visible: fields.bool("visible")?,
        disabled: fields.bool("disabled")?,
        kind: fields.string("type")?,
        rows: fields.count("rows")?,
        max_rows: fields.count("maxRows")?,
        placeholder: fields.string("placeholder")?,
    })
}

fn parse_props(fields: &Fields<'_>) -> Result<UIProps, ParseError> {
    Ok(UIProps {
        label: fields.string("label")?,
        placeholder: fields.string("placeholder")?,
        help: fields.string("help")?,
        span: fields.count("span")?,
        hidden: fields.bool("hidden")?,
        readonly: fields.bool("readonly")?,
        disabled: fields.bool("disabled")?,
    })
}

fn parse_reaction(fields: &Fields<'_>) -> Result<UIReaction, ParseError> {
    let then = fields
        .mapping("then")?
        .ok_or_else(|| ParseError::Required {
            path: fields.path_to("then"),
        })?;
    Ok(UIReaction {
        target: fields.string("target")?,
        condition: fields.string("if")?,
        then: parse_effect(&then)?,
        otherwise: fields.mapping("else")?.map(|f| parse_effect(&f)).transpose()?,
        lifetime: fields.string("lifetime")?,
        source: fields.string("source")?,
    })
}

fn parse_effect(fields: &Fields<'_>) -> Result<UIEffect, ParseError> {
    let state = fields
        .mapping("state")?
        .map(|s| {
            Ok::<_, ParseError>(UIState {
                value: s.get("value").cloned(),
                visible: s.bool("visible")?,
                disabled: s.bool("disabled")?,
            })
        })
        .transpose()?;
    Ok(UIEffect {
        actions: fields.strings("actions")?,
        state,
    })
}

/// `ui:rules` mixes string references and inline mappings in one list.
fn parse_rules(fields: &Fields<'_>) -> Result<Option<Vec<UIRule>>, ParseError> {
    let Some(list) = fields.array(keyword::UI_RULES)? else {
        return Ok(None);
    };
    let base = fields.path_to(keyword::UI_RULES);
    list.iter()
        .enumerate()
        .map(|(i, element)| -> Result<UIRule, ParseError> {
            let path = format!("{base}.{i}");
            match element {
                Value::String(name) => Ok(UIRule::Ref(name.clone())),
                Value::Object(map) => {
                    let inline = Fields { map, path };
                    Ok(UIRule::Inline {
                        validator: inline.required_string("validator")?,
                        message: inline.required_string("message")?,
                    })
                }
                _ => Err(ParseError::must_be(path, "string or mapping")),
            }
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn parse_group(fields: &Fields<'_>) -> Result<UIGroup, ParseError> {
    let props = fields
        .non_empty_mapping("props")?
        .map(|p| {
            Ok::<_, ParseError>(UIGroupProps {
                kind: p.string("type")?,
                show_title: p.bool("showTitle")?,
                border: p.bool("border")?,
                default_active_name: p.strings("defaultActiveName")?,
                verifiable: p.bool("verifiable")?,
                hide_empty_row: p.bool("hideEmptyRow")?,
            })
        })
        .transpose()?;
    let style = fields
        .non_empty_mapping("style")?
        .map(|s| {
            Ok::<_, ParseError>(UIGroupStyle {
                background: s.string("background")?,
            })
        })
        .transpose()?;
    Ok(UIGroup {
        name: fields.widget_name("name")?,
        props,
        style,
    })
}

/// A mapping being parsed, together with its node path.
struct Fields<'a> {
    map: &'a Map<String, Value>,
    path: String,
}

impl<'a> Fields<'a> {
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    fn path_to(&self, key: &str) -> String {
        format!("{}.{key}", self.path)
    }

    fn string(&self, key: &str) -> Result<Option<String>, ParseError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(ParseError::must_be(self.path_to(key), "string")),
        }
    }

    fn required_string(&self, key: &str) -> Result<String, ParseError> {
        self.string(key)?.ok_or_else(|| ParseError::Required {
            path: self.path_to(key),
        })
    }

    fn required_non_empty_string(&self, key: &str) -> Result<String, ParseError> {
        let s = self.required_string(key)?;
        if s.is_empty() {
            return Err(ParseError::Required {
                path: self.path_to(key),
            });
        }
        Ok(s)
    }

    fn bool(&self, key: &str) -> Result<Option<bool>, ParseError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(ParseError::must_be(self.path_to(key), "boolean")),
        }
    }

    fn number(&self, key: &str) -> Result<Option<Number>, ParseError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Number(n)) => Ok(Some(n.clone())),
            Some(_) => Err(ParseError::must_be(self.path_to(key), "number")),
        }
    }

    /// A non-negative integer. The literal text decides integer-ness, so
    /// `2.0` is rejected.
    fn count(&self, key: &str) -> Result<Option<u64>, ParseError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let n = match value {
            Value::Number(n) if is_integer(n) => n,
            _ => return Err(ParseError::must_be(self.path_to(key), "integer")),
        };
        n.as_u64().map(Some).ok_or_else(|| ParseError::MustBeGTEZero {
            path: self.path_to(key),
        })
    }

    fn array(&self, key: &str) -> Result<Option<&'a Vec<Value>>, ParseError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Array(list)) => Ok(Some(list)),
            Some(_) => Err(ParseError::must_be(self.path_to(key), "array")),
        }
    }

    fn strings(&self, key: &str) -> Result<Option<Vec<String>>, ParseError> {
        let Some(list) = self.array(key)? else {
            return Ok(None);
        };
        list.iter()
            .enumerate()
            .map(|(i, v)| match v {
                Value::String(s) => Ok(s.clone()),
                _ => Err(ParseError::must_be(format!("{}.{i}", self.path_to(key)), "string")),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    fn mapping(&self, key: &str) -> Result<Option<Fields<'a>>, ParseError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(Fields {
                map,
                path: self.path_to(key),
            })),
            Some(_) => Err(ParseError::must_be(self.path_to(key), "mapping")),
        }
    }

    fn non_empty_mapping(&self, key: &str) -> Result<Option<Fields<'a>>, ParseError> {
        match self.mapping(key)? {
            Some(fields) if fields.map.is_empty() => {
                Err(ParseError::EmptyMap { path: fields.path })
            }
            other => Ok(other),
        }
    }

    /// An array whose every element is a mapping.
    fn mappings(&self, key: &str) -> Result<Option<Vec<Fields<'a>>>, ParseError> {
        let Some(list) = self.array(key)? else {
            return Ok(None);
        };
        list.iter()
            .enumerate()
            .map(|(i, v)| {
                let path = format!("{}.{i}", self.path_to(key));
                match v {
                    Value::Object(map) => Ok(Fields { map, path }),
                    _ => Err(ParseError::must_be(path, "mapping")),
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    fn widget_name(&self, key: &str) -> Result<Option<String>, ParseError> {
        let name = self.string(key)?;
        if let Some(name) = &name {
            if ComponentName::from_name(name).is_none() {
                return Err(ParseError::NotAValidComponent {
                    path: self.path_to(key),
                    value: name.clone(),
                });
            }
        }
        Ok(name)
    }
}
