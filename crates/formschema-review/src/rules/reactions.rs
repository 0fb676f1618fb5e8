//! Rules over `ui:reactions`.

use std::collections::HashSet;

use formschema_schema::Node;

use crate::reviewer::Rule;
use crate::suggestion::{Level, Suggestion};

/// One reaction per source field; every later reaction sharing a source
/// with an earlier one is reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactionSameSourceExists;

impl Rule for ReactionSameSourceExists {
    fn name(&self) -> &'static str {
        "reactionSameSourceExists"
    }

    fn validate(&self, node: Node<'_>) -> Vec<Suggestion> {
        let Some(reactions) = node.schema().ui_reactions.as_ref() else {
            return Vec::new();
        };
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for (i, reaction) in reactions.iter().enumerate() {
            let Some(source) = reaction.source.as_deref() else {
                continue;
            };
            if !seen.insert(source) {
                out.push(self.suggest(
                    Level::Major,
                    node.field_path(&format!("ui:reactions.{i}")),
                    format!("another reaction already uses source `{source}`, merge them"),
                ));
            }
        }
        out
    }
}

/// A `then` or `else` branch with neither actions nor state does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactionEffectEmpty;

impl Rule for ReactionEffectEmpty {
    fn name(&self) -> &'static str {
        "reactionEffectEmpty"
    }

    fn validate(&self, node: Node<'_>) -> Vec<Suggestion> {
        let Some(reactions) = node.schema().ui_reactions.as_ref() else {
            return Vec::new();
        };
        let mut out = Vec::new();
        for (i, reaction) in reactions.iter().enumerate() {
            let branches = [("then", Some(&reaction.then)), ("else", reaction.otherwise.as_ref())];
            for (branch, effect) in branches {
                if effect.is_some_and(|e| e.is_empty()) {
                    out.push(self.suggest(
                        Level::Minor,
                        node.field_path(&format!("ui:reactions.{i}.{branch}")),
                        format!("{branch} has neither actions nor state"),
                    ));
                }
            }
        }
        out
    }
}
