//! # Rule Catalog
//!
//! Every rule is an independent unit struct implementing
//! [`Rule`](crate::Rule). Rules are grouped by concern into [`Suite`]s.
//!
//! | Suite | Concern |
//! |---|---|
//! | `schema` | native keywords, array bounds, misplaced `ui:` keys |
//! | `component` | `ui:component` widget names, props, datasource, remoteConfig |
//! | `reactions` | `ui:reactions` source uniqueness and empty effects |
//! | `rules` | `ui:rules` references and inline validators |
//! | `group` | `ui:group` widget name and default panels |
//! | `order` | `ui:order` references |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::reviewer::Reviewer;

pub mod component;
pub mod group;
pub mod order;
pub mod reactions;
pub mod schema;
pub mod validation;

/// A group of rules reviewing one concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suite {
    Schema,
    Component,
    Reactions,
    Rules,
    Group,
    Order,
}

impl Suite {
    /// All suites in review order.
    pub const ALL: [Suite; 6] = [
        Self::Schema,
        Self::Component,
        Self::Reactions,
        Self::Rules,
        Self::Group,
        Self::Order,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Schema => "schema",
            Self::Component => "component",
            Self::Reactions => "reactions",
            Self::Rules => "rules",
            Self::Group => "group",
            Self::Order => "order",
        }
    }

    /// A fresh reviewer holding this suite's rules in catalog order.
    pub fn reviewer(&self) -> Reviewer {
        match self {
            Self::Schema => Reviewer::new(self.as_str(), Vec::new())
                .with_rule(schema::TypeMustBeSet)
                .with_rule(schema::TitleNotSet)
                .with_rule(schema::DescriptionNotSet)
                .with_rule(schema::DefaultNotSet)
                .with_rule(schema::MinItemsNotSet)
                .with_rule(schema::MaxItemsNotSet)
                .with_rule(schema::ItemsOnlyForArray)
                .with_rule(schema::PropertyKeyHasUIPrefix),
            Self::Component => Reviewer::new(self.as_str(), Vec::new())
                .with_rule(component::ComponentNameNotSet)
                .with_rule(component::ComponentNameMustBeValid)
                .with_rule(component::SelectPropsOnlyForSelect)
                .with_rule(component::DataSourceRequiredForRadio)
                .with_rule(component::DataSourceOrRemoteConfigRequired)
                .with_rule(component::DataSourceItemMustBeValid)
                .with_rule(component::RemoteConfigOnlyForSelect)
                .with_rule(component::RemoteConfigUrlMustBeValid),
            Self::Reactions => Reviewer::new(self.as_str(), Vec::new())
                .with_rule(reactions::ReactionSameSourceExists)
                .with_rule(reactions::ReactionEffectEmpty),
            Self::Rules => {
                Reviewer::new(self.as_str(), Vec::new()).with_rule(validation::RuleMustBeValid)
            }
            Self::Group => Reviewer::new(self.as_str(), Vec::new())
                .with_rule(group::GroupNameMustBeValid)
                .with_rule(group::GroupDefaultActiveNameMustExists),
            Self::Order => {
                Reviewer::new(self.as_str(), Vec::new()).with_rule(order::OrderItemsMustExists)
            }
        }
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names of every rule in the catalog.
pub fn all_rule_names() -> Vec<&'static str> {
    Suite::ALL
        .iter()
        .flat_map(|suite| suite.reviewer().rule_names())
        .collect()
}

/// Run one rule over every node of a parsed document.
#[cfg(test)]
pub(crate) fn check(rule: &dyn crate::Rule, doc: serde_json::Value) -> Vec<crate::Suggestion> {
    let tree = formschema_schema::parse(&doc).unwrap();
    tree.iter().flat_map(|node| rule.validate(node)).collect()
}
