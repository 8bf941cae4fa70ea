//! Naming validation: resolve a rule, run its action, summarize.

use std::fmt;
use std::time::Instant;

use keeper_core::config::{RuleExclusion, ValidationConfig};
use keeper_core::events::types::AssetValidatedEvent;
use keeper_core::events::EventDispatcher;
use keeper_core::traits::{ObjectView, TypeReflection};
use serde::{Deserialize, Serialize};

use super::action::{Severity, ValidationMessage};
use super::registry::{Rule, RuleRegistry};

/// Outcome of validating one object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    Valid,
    Invalid,
    /// No rule applies to the object.
    NotValidated,
}

impl ValidationStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::NotValidated => "not_validated",
        }
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub path: String,
    pub name: String,
    pub type_name: String,
    pub status: ValidationStatus,
    pub rule_id: Option<String>,
    pub messages: Vec<ValidationMessage>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.severity == Severity::Error)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub not_validated: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl ValidationSummary {
    fn record(&mut self, report: &ValidationReport) {
        self.total += 1;
        match report.status {
            ValidationStatus::Valid => self.valid += 1,
            ValidationStatus::Invalid => self.invalid += 1,
            ValidationStatus::NotValidated => self.not_validated += 1,
        }
        for message in &report.messages {
            match message.severity {
                Severity::Error => self.errors += 1,
                Severity::Warning => self.warnings += 1,
            }
        }
    }

    pub fn passed(&self) -> bool {
        self.invalid == 0
    }
}

/// Reports in input order plus their summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationRun {
    pub reports: Vec<ValidationReport>,
    pub summary: ValidationSummary,
}

/// Validates object names against a [`RuleRegistry`].
pub struct NamingValidator<'r> {
    registry: RuleRegistry,
    reflection: &'r dyn TypeReflection,
    exclusions: Vec<RuleExclusion>,
    warn_on_missing_types: bool,
    events: EventDispatcher,
}

impl<'r> NamingValidator<'r> {
    pub fn new(registry: RuleRegistry, reflection: &'r dyn TypeReflection) -> Self {
        Self {
            registry,
            reflection,
            exclusions: Vec::new(),
            warn_on_missing_types: true,
            events: EventDispatcher::new(),
        }
    }

    /// Apply the `[validation]` settings.
    pub fn configured(mut self, config: &ValidationConfig) -> Self {
        self.exclusions = config.exclusions.clone();
        self.warn_on_missing_types = config.effective_warn_on_missing_types();
        self
    }

    pub fn with_exclusions(mut self, exclusions: Vec<RuleExclusion>) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn with_warn_on_missing_types(mut self, warn: bool) -> Self {
        self.warn_on_missing_types = warn;
        self
    }

    pub fn with_events(mut self, events: EventDispatcher) -> Self {
        self.events = events;
        self
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    fn is_excluded(&self, rule: &Rule, path: &str) -> bool {
        self.exclusions.iter().any(|e| e.excludes(&rule.id, path))
    }

    /// The rule that would validate `object`, after exclusions.
    pub fn rule_for(&self, object: &dyn ObjectView) -> Option<&Rule> {
        let chain = self.reflection.type_chain(object);
        let indirect = self.reflection.indirect_chain(object);
        let path = object.path();
        self.registry
            .candidates(object, &chain, indirect.as_deref(), &|rule| !self.is_excluded(rule, path))
            .first()
            .copied()
    }

    /// Whether validating `object` would produce anything.
    pub fn can_validate(&self, object: &dyn ObjectView) -> bool {
        self.warn_on_missing_types || self.rule_for(object).is_some()
    }

    pub fn validate(&self, object: &dyn ObjectView) -> ValidationReport {
        let mut messages = Vec::new();
        let (status, rule_id) = match self.rule_for(object) {
            Some(rule) => {
                rule.action.apply(object, &mut messages);
                let status = if messages.iter().any(|m| m.severity == Severity::Error) {
                    ValidationStatus::Invalid
                } else {
                    ValidationStatus::Valid
                };
                tracing::debug!(path = object.path(), rule = %rule.id, %status, "validated");
                (status, Some(rule.id.clone()))
            }
            None => {
                if self.warn_on_missing_types {
                    messages.push(ValidationMessage::warning(format!(
                        "Asset validator missing rules for the asset type: {}",
                        object.type_name()
                    )));
                }
                (ValidationStatus::NotValidated, None)
            }
        };

        self.events.emit_asset_validated(&AssetValidatedEvent {
            path: object.path().to_string(),
            status: status.name().to_string(),
            rule_id: rule_id.clone(),
        });

        ValidationReport {
            path: object.path().to_string(),
            name: object.name().to_string(),
            type_name: object.type_name().to_string(),
            status,
            rule_id,
            messages,
        }
    }

    pub fn validate_all<'o, T, I>(&self, objects: I) -> ValidationRun
    where
        T: ObjectView + 'o,
        I: IntoIterator<Item = &'o T>,
    {
        let start = Instant::now();
        let mut run = ValidationRun::default();
        for object in objects {
            let report = self.validate(object);
            run.summary.record(&report);
            run.reports.push(report);
        }
        tracing::info!(
            total = run.summary.total,
            invalid = run.summary.invalid,
            not_validated = run.summary.not_validated,
            duration_ms = start.elapsed().as_millis() as u64,
            "naming validation complete"
        );
        run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Action, AssetObject, TypeHierarchy, TypeTag};

    #[test]
    fn test_warning_only_is_valid() {
        let registry = RuleRegistry::from_rules([Rule::new(
            "soft",
            TypeTag::SoundWave,
            Action::NamePrefix {
                prefix: "S_".into(),
                case_sensitive: true,
                severity: Severity::Warning,
            },
        )])
        .unwrap();
        let hierarchy = TypeHierarchy::engine_defaults();
        let validator = NamingValidator::new(registry, &hierarchy);
        let report = validator.validate(&AssetObject::new("Boom", "/Game/Boom.Boom", "SoundWave"));
        assert_eq!(report.status, ValidationStatus::Valid);
        assert_eq!(report.messages.len(), 1);
        assert!(!report.has_errors());
    }

    #[test]
    fn test_missing_type_warning_can_be_disabled() {
        let hierarchy = TypeHierarchy::engine_defaults();
        let object = AssetObject::new("Boom", "/Game/Boom.Boom", "SoundWave");

        let validator = NamingValidator::new(RuleRegistry::new(), &hierarchy);
        assert!(validator.can_validate(&object));
        assert_eq!(validator.validate(&object).messages.len(), 1);

        let quiet = NamingValidator::new(RuleRegistry::new(), &hierarchy)
            .with_warn_on_missing_types(false);
        assert!(!quiet.can_validate(&object));
        let report = quiet.validate(&object);
        assert_eq!(report.status, ValidationStatus::NotValidated);
        assert!(report.messages.is_empty());
    }
}
