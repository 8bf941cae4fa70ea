//! JSON rule definitions and their compilation into [`Rule`]s.
//!
//! ```json
//! [
//!   { "asset_type": "Texture2D", "prefix": "T_", "priority": 100 },
//!   { "asset_type": "Texture2D", "enum_name": "CompressionSettings",
//!     "enum_value": "TC_Normalmap", "prefix": "T_", "suffix": "_N", "priority": 50 }
//! ]
//! ```

use std::path::Path;

use keeper_core::errors::RuleError;
use keeper_core::events::types::RuleDroppedEvent;
use keeper_core::events::EventDispatcher;
use keeper_core::types::collections::FxHashMap;
use serde::{Deserialize, Serialize};

use super::action::{Action, Severity};
use super::matcher::Matcher;
use super::registry::{Rule, RuleRegistry, DEFAULT_PRIORITY};
use super::type_tag::TypeTag;

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

fn default_case_sensitive() -> bool {
    true
}

fn is_true(value: &bool) -> bool {
    *value
}

/// One entry of a rule definition file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDefinition {
    pub asset_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub base_path: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub enum_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub enum_value: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prefix: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub suffix: String,
    #[serde(default = "default_priority")]
    pub priority: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default = "default_case_sensitive", skip_serializing_if = "is_true")]
    pub case_sensitive: bool,
    #[serde(default)]
    pub severity: Severity,
}

impl RuleDefinition {
    pub fn new(asset_type: impl Into<String>) -> Self {
        Self {
            asset_type: asset_type.into(),
            base_path: String::new(),
            enum_name: String::new(),
            enum_value: String::new(),
            prefix: String::new(),
            suffix: String::new(),
            priority: DEFAULT_PRIORITY,
            notes: String::new(),
            id: None,
            case_sensitive: true,
            severity: Severity::Error,
        }
    }

    fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        if !self.prefix.is_empty() {
            actions.push(Action::NamePrefix {
                prefix: self.prefix.clone(),
                case_sensitive: self.case_sensitive,
                severity: self.severity,
            });
        }
        if !self.suffix.is_empty() {
            actions.push(Action::NameSuffix {
                suffix: self.suffix.clone(),
                case_sensitive: self.case_sensitive,
                severity: self.severity,
            });
        }
        actions
    }

    fn matcher(&self) -> Matcher {
        let mut matchers = Vec::new();
        if !self.enum_name.is_empty() {
            matchers.push(Matcher::property(&self.enum_name, &self.enum_value));
        }
        if !self.base_path.is_empty() {
            matchers.push(Matcher::path_prefix(&self.base_path));
        }
        Matcher::all_of(matchers)
    }
}

/// A definition that compiled to no rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedRule {
    pub index: usize,
    pub id: String,
    pub reason: String,
}

/// Result of loading a definition file.
#[derive(Debug, Default)]
pub struct LoadedRules {
    pub registry: RuleRegistry,
    pub definitions: Vec<RuleDefinition>,
    pub dropped: Vec<DroppedRule>,
}

/// Loads rule definitions into a fresh [`RuleRegistry`].
#[derive(Default)]
pub struct RuleLoader<'e> {
    events: Option<&'e EventDispatcher>,
}

impl<'e> RuleLoader<'e> {
    pub fn new() -> Self {
        Self { events: None }
    }

    pub fn with_events(events: &'e EventDispatcher) -> Self {
        Self { events: Some(events) }
    }

    pub fn load_from_file(&self, path: &Path) -> Result<LoadedRules, RuleError> {
        let content = std::fs::read_to_string(path).map_err(|_| RuleError::FileNotFound {
            path: path.display().to_string(),
        })?;
        self.load_from_str(&content, &path.display().to_string())
    }

    /// Parse and compile `json`. `source` names the input in error messages.
    pub fn load_from_str(&self, json: &str, source: &str) -> Result<LoadedRules, RuleError> {
        let definitions: Vec<RuleDefinition> =
            serde_json::from_str(json).map_err(|e| RuleError::Malformed {
                path: source.to_string(),
                message: e.to_string(),
            })?;
        self.compile(definitions)
    }

    /// Compile parsed definitions. Unknown types and duplicate ids are fatal;
    /// definitions without any action are dropped.
    pub fn compile(&self, definitions: Vec<RuleDefinition>) -> Result<LoadedRules, RuleError> {
        let mut registry = RuleRegistry::new();
        let mut dropped = Vec::new();
        let mut ordinals: FxHashMap<TypeTag, usize> = FxHashMap::default();

        for (index, definition) in definitions.iter().enumerate() {
            let asset_type = TypeTag::parse_str(&definition.asset_type).ok_or_else(|| {
                RuleError::UnknownAssetType {
                    asset_type: definition.asset_type.clone(),
                    index,
                }
            })?;
            let ordinal = ordinals.entry(asset_type).or_default();
            let id = definition
                .id
                .clone()
                .unwrap_or_else(|| format!("{asset_type}#{ordinal}"));
            *ordinal += 1;

            let mut actions = definition.actions();
            if actions.is_empty() {
                let reason = "rule defines neither prefix nor suffix".to_string();
                tracing::warn!(index, rule = %id, "{reason}, dropping");
                if let Some(events) = self.events {
                    events.emit_rule_dropped(&RuleDroppedEvent {
                        index,
                        asset_type: asset_type.name().to_string(),
                        reason: reason.clone(),
                    });
                }
                dropped.push(DroppedRule { index, id, reason });
                continue;
            }

            let action = match actions.len() {
                1 => actions.remove(0),
                _ => Action::All(actions),
            };
            let rule = Rule::new(id, asset_type, action)
                .with_matcher(definition.matcher())
                .with_priority(definition.priority)
                .with_notes(definition.notes.clone());
            tracing::debug!(rule = %rule.id, priority = rule.priority, "registered rule");
            registry.add(rule)?;
        }

        Ok(LoadedRules {
            registry,
            definitions,
            dropped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_generated_ids() {
        let loaded = RuleLoader::new()
            .load_from_str(
                r#"[{"asset_type":"Texture2D","prefix":"T_"},
                    {"asset_type":"Texture2D","suffix":"_N","priority":50,"id":"normals"},
                    {"asset_type":"Texture2D","prefix":"T_"}]"#,
                "inline",
            )
            .unwrap();
        let ids: Vec<&str> = loaded
            .registry
            .rules_for(TypeTag::Texture2D)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["Texture2D#0", "normals", "Texture2D#2"]);
        assert_eq!(loaded.registry.rules_for(TypeTag::Texture2D)[0].priority, 100);
    }

    #[test]
    fn test_unknown_field_is_malformed() {
        let err = RuleLoader::new()
            .load_from_str(r#"[{"asset_type":"Texture2D","prefx":"T_"}]"#, "inline")
            .unwrap_err();
        assert!(matches!(err, RuleError::Malformed { .. }));
    }

    #[test]
    fn test_compiled_matcher_shape() {
        let mut definition = RuleDefinition::new("Texture2D");
        definition.prefix = "T_".into();
        definition.enum_name = "CompressionSettings".into();
        definition.enum_value = "TC_Normalmap".into();
        definition.base_path = "/Game/Env/".into();
        let loaded = RuleLoader::new().compile(vec![definition]).unwrap();
        let rule = &loaded.registry.rules_for(TypeTag::Texture2D)[0];
        assert_eq!(
            rule.matcher,
            Matcher::All(vec![
                Matcher::property("CompressionSettings", "TC_Normalmap"),
                Matcher::path_prefix("/Game/Env/"),
            ])
        );
        assert_eq!(rule.action, Action::name_prefix("T_"));
    }
}
