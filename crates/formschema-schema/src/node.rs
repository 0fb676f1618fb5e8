//! # Schema Tree
//!
//! The arena that owns every [`SubSchema`] of one parsed document.
//!
//! ## Ownership
//!
//! The tree exclusively owns all nodes. A node refers to its `items` and
//! `properties` children by [`NodeId`] and to its owner through a
//! non-owning `parent` index. The parent link is used only to rebuild the
//! node path for diagnostics, never for traversal ownership, so there is
//! no reference cycle to manage.
//!
//! ## Node Paths
//!
//! A node path is rebuilt by walking parent links to the root and emitting
//! `.items` for each `items` hop and `.properties.<key>` for each
//! `properties` hop, concatenated root-to-leaf. The root's path is empty.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;

use serde_json::Value;

use formschema_core::LoadError;

use crate::types::SchemaType;
use crate::ui::{UIComponent, UIGroup, UIProps, UIReaction, UIRule};

/// Property marker of the root node.
pub const ROOT_PROPERTY: &str = "#";

/// Index of a node inside its [`SchemaTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root of every tree.
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(&self) -> usize {
        self.0
    }
}

/// How a node was reached from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeSource {
    #[default]
    Root,
    Properties,
    Items,
}

impl fmt::Display for NodeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("root"),
            Self::Properties => f.write_str("properties"),
            Self::Items => f.write_str("items"),
        }
    }
}

/// One typed node of the schema tree.
///
/// `property`, `source`, and `parent` describe where the node sits; they
/// are not serialized. An `Option` that is `None` means the keyword was
/// absent from the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubSchema {
    /// Key the node is mounted under. Items nodes inherit their owner's key.
    pub property: String,
    pub source: NodeSource,
    pub parent: Option<NodeId>,

    /// Always set by the parser; `None` only on hand-assembled trees.
    pub schema_type: Option<SchemaType>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Stored verbatim; `Some(Value::Null)` is an explicit `default: null`.
    pub default: Option<Value>,
    pub required: Option<Vec<String>>,
    pub enum_values: Option<Vec<String>>,
    pub min_items: Option<u64>,
    pub max_items: Option<u64>,
    pub unique_items: Option<bool>,
    pub items: Option<NodeId>,
    pub properties: Option<BTreeMap<String, NodeId>>,

    pub ui_component: Option<UIComponent>,
    pub ui_props: Option<UIProps>,
    pub ui_reactions: Option<Vec<UIReaction>>,
    pub ui_rules: Option<Vec<UIRule>>,
    pub ui_group: Option<UIGroup>,
    pub ui_order: Option<Vec<String>>,
}

impl SubSchema {
    /// A node with only its type set.
    pub fn of_type(schema_type: SchemaType) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Default::default()
        }
    }

    /// The component name, if a component with a name is configured.
    pub fn component_name(&self) -> Option<&str> {
        self.ui_component.as_ref()?.name.as_deref()
    }
}

/// Arena of all nodes of one document. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaTree {
    nodes: Vec<SubSchema>,
}

impl SchemaTree {
    /// Start a tree from its root node. Position fields are overwritten.
    pub fn new(mut root: SubSchema) -> Self {
        root.property = ROOT_PROPERTY.to_string();
        root.source = NodeSource::Root;
        root.parent = None;
        Self { nodes: vec![root] }
    }

    pub fn root(&self) -> Node<'_> {
        Node {
            tree: self,
            id: NodeId::ROOT,
        }
    }

    /// Look up a node by id. Returns `None` for ids from another tree.
    pub fn node(&self, id: NodeId) -> Option<Node<'_>> {
        (id.0 < self.nodes.len()).then_some(Node { tree: self, id })
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Mount `node` under `parent.properties[key]`, replacing any previous
    /// entry with that key.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this tree.
    pub fn add_property(
        &mut self,
        parent: NodeId,
        key: impl Into<String>,
        mut node: SubSchema,
    ) -> NodeId {
        let key = key.into();
        node.property = key.clone();
        node.source = NodeSource::Properties;
        node.parent = Some(parent);
        let id = self.push(node);
        self.nodes[parent.0]
            .properties
            .get_or_insert_with(BTreeMap::new)
            .insert(key, id);
        id
    }

    /// Mount `node` as `parent.items`, replacing any previous items node.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this tree.
    pub fn set_items(&mut self, parent: NodeId, mut node: SubSchema) -> NodeId {
        node.property = self.nodes[parent.0].property.clone();
        node.source = NodeSource::Items;
        node.parent = Some(parent);
        let id = self.push(node);
        self.nodes[parent.0].items = Some(id);
        id
    }

    /// Depth-first pre-order walk: a node, then its items, then its
    /// properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = Node<'_>> {
        let mut stack = vec![NodeId::ROOT];
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            let node = &self.nodes[id.0];
            if let Some(props) = &node.properties {
                stack.extend(props.values().rev().copied());
            }
            if let Some(items) = node.items {
                stack.push(items);
            }
            Some(Node { tree: self, id })
        })
    }

    /// Diagnostic path of a node, e.g. `.properties.spec.items`.
    pub fn path_of(&self, id: NodeId) -> String {
        let mut segments = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = &self.nodes[current.0];
            match node.source {
                NodeSource::Root => {}
                NodeSource::Items => segments.push(".items".to_string()),
                NodeSource::Properties => segments.push(format!(".properties.{}", node.property)),
            }
            cursor = node.parent;
        }
        segments.reverse();
        segments.concat()
    }

    /// Serialize the tree back to a generic document.
    ///
    /// Goes through the same JSON marshalling as the loader so numbers keep
    /// their literal text.
    pub fn to_value(&self) -> Result<Value, LoadError> {
        formschema_core::load_value(&self.root())
    }

    pub(crate) fn push(&mut self, node: SubSchema) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub(crate) fn get(&self, id: NodeId) -> &SubSchema {
        &self.nodes[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut SubSchema {
        &mut self.nodes[id.0]
    }
}

/// Borrowed view of one node together with its tree.
#[derive(Clone, Copy)]
pub struct Node<'a> {
    tree: &'a SchemaTree,
    id: NodeId,
}

impl<'a> Node<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tree(&self) -> &'a SchemaTree {
        self.tree
    }

    /// The node's fields with the tree's lifetime.
    pub fn schema(&self) -> &'a SubSchema {
        &self.tree.nodes[self.id.0]
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        self.schema().parent.map(|id| Node { tree: self.tree, id })
    }

    pub fn items(&self) -> Option<Node<'a>> {
        self.schema().items.map(|id| Node { tree: self.tree, id })
    }

    /// Property children in key order.
    pub fn properties(&self) -> impl Iterator<Item = (&'a str, Node<'a>)> + 'a {
        let tree = self.tree;
        self.schema()
            .properties
            .iter()
            .flatten()
            .map(move |(key, &id)| (key.as_str(), Node { tree, id }))
    }

    /// A single property child by key.
    pub fn property(&self, key: &str) -> Option<Node<'a>> {
        let id = *self.schema().properties.as_ref()?.get(key)?;
        Some(Node { tree: self.tree, id })
    }

    pub fn has_property(&self, key: &str) -> bool {
        self.schema()
            .properties
            .as_ref()
            .is_some_and(|props| props.contains_key(key))
    }

    pub fn path(&self) -> String {
        self.tree.path_of(self.id)
    }

    /// Path of a field of this node, e.g. `.properties.a.ui:order`.
    pub fn field_path(&self, field: &str) -> String {
        format!("{}.{field}", self.path())
    }

    /// Serialize this subtree back to a generic document.
    pub fn to_value(&self) -> Result<Value, LoadError> {
        formschema_core::load_value(self)
    }
}

impl Deref for Node<'_> {
    type Target = SubSchema;

    fn deref(&self) -> &SubSchema {
        self.schema()
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("path", &self.path())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> SchemaTree {
        let mut tree = SchemaTree::new(SubSchema::of_type(SchemaType::Object));
        let spec = tree.add_property(NodeId::ROOT, "spec", SubSchema::of_type(SchemaType::Object));
        tree.add_property(spec, "replicas", SubSchema::of_type(SchemaType::Integer));
        let ports = tree.add_property(spec, "ports", SubSchema::of_type(SchemaType::Array));
        tree.set_items(ports, SubSchema::of_type(SchemaType::Integer));
        tree.add_property(NodeId::ROOT, "apiVersion", SubSchema::of_type(SchemaType::String));
        tree
    }

    #[test]
    fn test_root_position() {
        let tree = SchemaTree::new(SubSchema::default());
        let root = tree.root();
        assert_eq!(root.property, ROOT_PROPERTY);
        assert_eq!(root.source, NodeSource::Root);
        assert!(root.parent().is_none());
        assert_eq!(root.path(), "");
    }

    #[test]
    fn test_paths_follow_parent_links() {
        let tree = sample_tree();
        let spec = tree.root().property("spec").unwrap();
        let replicas = spec.property("replicas").unwrap();
        let items = spec.property("ports").unwrap().items().unwrap();

        assert_eq!(replicas.path(), ".properties.spec.properties.replicas");
        assert_eq!(
            replicas.field_path("minItems"),
            ".properties.spec.properties.replicas.minItems"
        );
        assert_eq!(items.path(), ".properties.spec.properties.ports.items");
        assert_eq!(items.property, "ports");
        assert_eq!(items.source, NodeSource::Items);
    }

    #[test]
    fn test_iter_is_preorder_items_then_sorted_properties() {
        let tree = sample_tree();
        let paths: Vec<String> = tree.iter().map(|n| n.path()).collect();
        assert_eq!(
            paths,
            vec![
                "",
                ".properties.apiVersion",
                ".properties.spec",
                ".properties.spec.properties.ports",
                ".properties.spec.properties.ports.items",
                ".properties.spec.properties.replicas",
            ]
        );
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn test_node_lookup_out_of_range() {
        let tree = sample_tree();
        assert!(tree.node(NodeId(99)).is_none());
        assert!(tree.node(NodeId::ROOT).is_some());
    }

    #[test]
    fn test_has_property() {
        let tree = sample_tree();
        assert!(tree.root().has_property("spec"));
        assert!(!tree.root().has_property("status"));
        let leaf = tree.root().property("apiVersion").unwrap();
        assert!(!leaf.has_property("anything"));
    }
}
