//! # Review Configuration
//!
//! Selects which suites run, which rules are switched off, and the lowest
//! level reported. Loadable from YAML or JSON:
//!
//! ```yaml
//! suites: [schema, component, order]
//! disabledRules: [descriptionNotSet, defaultNotSet]
//! minLevel: general
//! ```

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use formschema_core::{load_file, load_str, Format, LoadError, Value};
use formschema_schema::SchemaTree;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reviewer::Reviewer;
use crate::rules::{all_rule_names, Suite};
use crate::suggestion::{Level, Suggestions};

/// Errors from loading a [`ReviewConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The document loaded but does not describe a review configuration.
    #[error("invalid review configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ReviewConfig {
    /// Suites to run, in order.
    pub suites: Vec<Suite>,
    /// Rule names whose suggestions are never produced.
    pub disabled_rules: BTreeSet<String>,
    /// Suggestions below this level are dropped.
    pub min_level: Level,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            suites: Suite::ALL.to_vec(),
            disabled_rules: BTreeSet::new(),
            min_level: Level::Minor,
        }
    }
}

impl ReviewConfig {
    /// Parse a configuration from YAML (JSON is valid YAML).
    ///
    /// An empty document yields the default configuration.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Self::from_value(load_str(content, Format::Yaml)?)
    }

    /// Load a configuration file; the format follows the extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_value(load_file(path.as_ref())?)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            suites = config.suites.len(),
            disabled = config.disabled_rules.len(),
            "review config loaded"
        );
        Ok(config)
    }

    fn from_value(value: Value) -> Result<Self, ConfigError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Check the configuration. Returns a list of problems (empty = valid).
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.suites.is_empty() {
            errors.push("suites must not be empty".to_string());
        }
        let mut seen = HashSet::new();
        for suite in &self.suites {
            if !seen.insert(suite) {
                errors.push(format!("suite `{suite}` is listed more than once"));
            }
        }
        let known = all_rule_names();
        for name in &self.disabled_rules {
            if !known.contains(&name.as_str()) {
                errors.push(format!("disabledRules: unknown rule `{name}`"));
            }
        }
        errors
    }

    /// One reviewer per configured suite, without the disabled rules.
    pub fn reviewers(&self) -> Vec<Reviewer> {
        self.suites
            .iter()
            .map(|suite| {
                suite
                    .reviewer()
                    .retain(|rule| !self.disabled_rules.contains(rule.name()))
            })
            .collect()
    }

    /// Run the configured reviewers over `tree`.
    pub fn review(&self, tree: &SchemaTree) -> Suggestions {
        let all: Suggestions = self
            .reviewers()
            .iter()
            .flat_map(|reviewer| reviewer.review_tree(tree))
            .collect();
        all.at_least(self.min_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formschema_schema::parse;
    use serde_json::json;
    use std::io::Write;

    fn sample_tree() -> SchemaTree {
        parse(&json!({
            "type": "object",
            "title": "App",
            "properties": {
                "name": {"type": "string"},
                "tier": {
                    "type": "string",
                    "ui:component": {"name": "select", "props": {"datasource": []}}
                }
            },
            "ui:order": ["name", "tier", "ghost"]
        }))
        .unwrap()
    }

    #[test]
    fn test_default_runs_everything() {
        let config = ReviewConfig::default();
        assert!(config.validate().is_empty());
        assert_eq!(config.reviewers().len(), 6);
        let tree = sample_tree();
        assert_eq!(config.review(&tree), crate::review_tree(&tree));
    }

    #[test]
    fn test_from_yaml() {
        let config = ReviewConfig::from_yaml_str(
            "suites: [component, order]\ndisabledRules: [componentNameNotSet]\nminLevel: major\n",
        )
        .unwrap();
        assert_eq!(config.suites, vec![Suite::Component, Suite::Order]);
        assert!(config.disabled_rules.contains("componentNameNotSet"));
        assert_eq!(config.min_level, Level::Major);
        assert!(config.validate().is_empty());

        let out = config.review(&sample_tree());
        let rules: Vec<_> = out.iter().map(|s| s.rule_name()).collect();
        assert_eq!(rules, vec!["dataSourceOrRemoteConfigRequired", "orderItemsMustExists"]);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(ReviewConfig::from_yaml_str("").unwrap(), ReviewConfig::default());
        assert_eq!(ReviewConfig::from_yaml_str("{}").unwrap(), ReviewConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = ReviewConfig::from_yaml_str("minLevel: minor\nsuits: [schema]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_unknown_suite_rejected() {
        let err = ReviewConfig::from_yaml_str("suites: [layout]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_validate_reports_problems() {
        let config = ReviewConfig {
            suites: vec![Suite::Order, Suite::Order],
            disabled_rules: ["noSuchRule".to_string(), "titleNotSet".to_string()].into(),
            min_level: Level::Minor,
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 2, "{errors:?}");
        assert!(errors.iter().any(|e| e.contains("noSuchRule")));

        let empty = ReviewConfig {
            suites: Vec::new(),
            ..ReviewConfig::default()
        };
        assert_eq!(empty.validate(), vec!["suites must not be empty".to_string()]);
    }

    #[test]
    fn test_disabled_rules_removed_from_reviewers() {
        let config = ReviewConfig {
            suites: vec![Suite::Schema],
            disabled_rules: ["titleNotSet".to_string()].into(),
            ..ReviewConfig::default()
        };
        let names = config.reviewers()[0].rule_names();
        assert!(!names.contains(&"titleNotSet"));
        assert!(names.contains(&"typeMustBeSet"));
        assert!(config.review(&sample_tree()).by_rule("titleNotSet").is_empty());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"minLevel": "general"}}"#).unwrap();
        let config = ReviewConfig::from_file(file.path()).unwrap();
        assert_eq!(config.min_level, Level::General);
        assert_eq!(config.suites.len(), 6);
    }

    #[test]
    fn test_from_missing_file() {
        let err = ReviewConfig::from_file("/nonexistent/review.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Load(LoadError::NotFound { .. })));
    }
}
