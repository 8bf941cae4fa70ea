//! Naming validation configuration.

use serde::{Deserialize, Serialize};

/// Suppresses rules for a set of paths.
///
/// With both `rules` and `paths` set, the listed rules are skipped for objects
/// under the listed prefixes. An empty `rules` list means every rule; an empty
/// `paths` list means every path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RuleExclusion {
    /// Why the exclusion exists.
    pub description: String,
    /// Rule ids to skip.
    pub rules: Vec<String>,
    /// Object path prefixes the exclusion applies to.
    pub paths: Vec<String>,
}

impl RuleExclusion {
    /// Whether this exclusion suppresses `rule_id` for an object at `path`.
    pub fn excludes(&self, rule_id: &str, path: &str) -> bool {
        if self.rules.is_empty() && self.paths.is_empty() {
            return false;
        }
        let rule_listed = self.rules.is_empty() || self.rules.iter().any(|r| r == rule_id);
        let path_listed =
            self.paths.is_empty() || self.paths.iter().any(|p| path.starts_with(p.as_str()));
        rule_listed && path_listed
    }
}

/// Configuration for the naming validator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ValidationConfig {
    /// Path to the JSON rule definitions. Default: `conventions.json`.
    pub rules_path: Option<String>,
    /// Warn when no rule covers an object's type. Default: true.
    pub warn_on_missing_types: Option<bool>,
    /// Rule exclusions.
    #[serde(default)]
    pub exclusions: Vec<RuleExclusion>,
}

impl ValidationConfig {
    /// Returns the effective rules path, defaulting to `conventions.json`.
    pub fn effective_rules_path(&self) -> &str {
        self.rules_path.as_deref().unwrap_or("conventions.json")
    }

    /// Returns whether missing types are warned about, defaulting to true.
    pub fn effective_warn_on_missing_types(&self) -> bool {
        self.warn_on_missing_types.unwrap_or(true)
    }
}
