//! # Rule Trait & Reviewer
//!
//! A [`Rule`] inspects one node and returns zero or more suggestions. A
//! [`Reviewer`] is an ordered list of rules applied to every node of a
//! tree.

use std::fmt;

use formschema_schema::{Node, SchemaTree};

use crate::rules::Suite;
use crate::suggestion::{Level, Suggestion, Suggestions};

/// A single lint check over one schema node.
///
/// Implementations are stateless; one instance may be shared across
/// threads and trees.
pub trait Rule: Send + Sync + fmt::Debug {
    /// Stable rule name, reported in every suggestion it emits.
    fn name(&self) -> &'static str;

    /// Inspect `node` (not its children) and report findings.
    fn validate(&self, node: Node<'_>) -> Vec<Suggestion>;

    /// Build a suggestion attributed to this rule.
    fn suggest(&self, level: Level, path: String, detail: String) -> Suggestion {
        Suggestion::new(level, self.name(), path, detail)
    }
}

/// An ordered set of rules run over a whole tree.
#[derive(Debug)]
pub struct Reviewer {
    name: &'static str,
    rules: Vec<Box<dyn Rule>>,
}

impl Reviewer {
    pub fn new(name: &'static str, rules: Vec<Box<dyn Rule>>) -> Self {
        Self { name, rules }
    }

    /// Append a rule; it runs after the ones already registered.
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// One reviewer per suite, in suite order.
    pub fn all() -> Vec<Reviewer> {
        Suite::ALL.iter().map(Suite::reviewer).collect()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Rule names in registration order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Drop every rule for which `keep` returns false.
    pub fn retain(mut self, keep: impl Fn(&dyn Rule) -> bool) -> Self {
        self.rules.retain(|r| keep(r.as_ref()));
        self
    }

    /// Run every rule against `node`, then recurse into its `items` and
    /// its `properties` in key order.
    pub fn review(&self, node: Node<'_>) -> Suggestions {
        let mut out = Suggestions::new();
        self.review_into(node, &mut out);
        out
    }

    /// Review a whole tree from its root.
    pub fn review_tree(&self, tree: &SchemaTree) -> Suggestions {
        let out = self.review(tree.root());
        tracing::debug!(
            reviewer = self.name,
            nodes = tree.len(),
            suggestions = out.len(),
            "review complete"
        );
        out
    }

    fn review_into(&self, node: Node<'_>, out: &mut Suggestions) {
        for rule in &self.rules {
            out.extend(rule.validate(node));
        }
        if let Some(items) = node.items() {
            self.review_into(items, out);
        }
        for (_, child) in node.properties() {
            self.review_into(child, out);
        }
    }
}

/// Run all six suites over `tree` and concatenate their output in suite
/// order.
pub fn review_tree(tree: &SchemaTree) -> Suggestions {
    Reviewer::all()
        .iter()
        .flat_map(|reviewer| reviewer.review_tree(tree))
        .collect()
}
