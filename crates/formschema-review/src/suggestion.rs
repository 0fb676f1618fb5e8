//! # Suggestions
//!
//! Advisory output of the reviewer. A [`Suggestion`] is produced by exactly
//! one rule and never modified afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a suggestion, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Style nit; safe to ignore.
    Minor,
    /// Likely to degrade the rendered form.
    General,
    /// The form will render or behave incorrectly.
    Major,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minor => "minor",
            Self::General => "general",
            Self::Major => "major",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One piece of lint feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    level: Level,
    rule_name: &'static str,
    node_path: String,
    detail: String,
}

impl Suggestion {
    pub fn new(
        level: Level,
        rule_name: &'static str,
        node_path: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            level,
            rule_name,
            node_path: node_path.into(),
            detail: detail.into(),
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn rule_name(&self) -> &'static str {
        self.rule_name
    }

    /// Path of the node or field the suggestion is about.
    pub fn node_path(&self) -> &str {
        &self.node_path
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.node_path.is_empty() {
            "(root)"
        } else {
            &self.node_path
        };
        write!(f, "[{}] {} {}: {}", self.level, self.rule_name, path, self.detail)
    }
}

/// Ordered list of suggestions with level filters.
///
/// Every filter keeps the relative order of the suggestions it returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Suggestions {
    suggestions: Vec<Suggestion>,
}

impl Suggestions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, suggestion: Suggestion) {
        self.suggestions.push(suggestion);
    }

    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Suggestion> {
        self.suggestions.iter()
    }

    pub fn as_slice(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn into_inner(self) -> Vec<Suggestion> {
        self.suggestions
    }

    /// Suggestions of exactly `level`.
    pub fn with_level(&self, level: Level) -> Suggestions {
        self.filtered(|s| s.level == level)
    }

    pub fn minor(&self) -> Suggestions {
        self.with_level(Level::Minor)
    }

    pub fn general(&self) -> Suggestions {
        self.with_level(Level::General)
    }

    pub fn major(&self) -> Suggestions {
        self.with_level(Level::Major)
    }

    /// Suggestions at `level` or more severe.
    pub fn at_least(&self, level: Level) -> Suggestions {
        self.filtered(|s| s.level >= level)
    }

    /// Suggestions produced by the named rule.
    pub fn by_rule(&self, rule_name: &str) -> Suggestions {
        self.filtered(|s| s.rule_name == rule_name)
    }

    fn filtered(&self, keep: impl Fn(&Suggestion) -> bool) -> Suggestions {
        self.suggestions.iter().filter(|s| keep(s)).cloned().collect()
    }
}

impl FromIterator<Suggestion> for Suggestions {
    fn from_iter<I: IntoIterator<Item = Suggestion>>(iter: I) -> Self {
        Self {
            suggestions: iter.into_iter().collect(),
        }
    }
}

impl Extend<Suggestion> for Suggestions {
    fn extend<I: IntoIterator<Item = Suggestion>>(&mut self, iter: I) {
        self.suggestions.extend(iter);
    }
}

impl IntoIterator for Suggestions {
    type Item = Suggestion;
    type IntoIter = std::vec::IntoIter<Suggestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.suggestions.into_iter()
    }
}

impl<'a> IntoIterator for &'a Suggestions {
    type Item = &'a Suggestion;
    type IntoIter = std::slice::Iter<'a, Suggestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.suggestions.iter()
    }
}

impl From<Vec<Suggestion>> for Suggestions {
    fn from(suggestions: Vec<Suggestion>) -> Self {
        Self { suggestions }
    }
}

impl fmt::Display for Suggestions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, s) in self.suggestions.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{s}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed() -> Suggestions {
        vec![
            Suggestion::new(Level::Major, "a", ".x", "1"),
            Suggestion::new(Level::Minor, "b", ".y", "2"),
            Suggestion::new(Level::General, "c", ".z", "3"),
            Suggestion::new(Level::Minor, "d", "", "4"),
            Suggestion::new(Level::Major, "e", ".w", "5"),
        ]
        .into()
    }

    fn details(s: &Suggestions) -> Vec<&str> {
        s.iter().map(Suggestion::detail).collect()
    }

    #[test]
    fn test_level_filters_keep_order() {
        let all = mixed();
        assert_eq!(details(&all.minor()), vec!["2", "4"]);
        assert_eq!(details(&all.general()), vec!["3"]);
        assert_eq!(details(&all.major()), vec!["1", "5"]);
        assert!(all.minor().iter().all(|s| s.level() == Level::Minor));
    }

    #[test]
    fn test_at_least() {
        let all = mixed();
        assert_eq!(details(&all.at_least(Level::General)), vec!["1", "3", "5"]);
        assert_eq!(all.at_least(Level::Minor).len(), 5);
    }

    #[test]
    fn test_by_rule() {
        assert_eq!(details(&mixed().by_rule("c")), vec!["3"]);
        assert!(mixed().by_rule("missing").is_empty());
    }

    #[test]
    fn test_level_ordering_and_serde() {
        assert!(Level::Minor < Level::General && Level::General < Level::Major);
        assert_eq!(serde_json::to_string(&Level::General).unwrap(), "\"general\"");
        let parsed: Level = serde_json::from_str("\"major\"").unwrap();
        assert_eq!(parsed, Level::Major);
    }

    #[test]
    fn test_display() {
        let s = Suggestion::new(Level::Major, "orderItemsMustExists", ".ui:order.0", "missing");
        assert_eq!(s.to_string(), "[major] orderItemsMustExists .ui:order.0: missing");
        let root = Suggestion::new(Level::Minor, "titleNotSet", "", "title is not set");
        assert!(root.to_string().contains("(root)"));
    }

    #[test]
    fn test_serialize_camel_case() {
        let s = Suggestion::new(Level::Minor, "titleNotSet", ".title", "title is not set");
        assert_eq!(
            serde_json::to_value(&s).unwrap(),
            serde_json::json!({
                "level": "minor",
                "ruleName": "titleNotSet",
                "nodePath": ".title",
                "detail": "title is not set"
            })
        );
    }
}
