//! Validation actions run once a rule has been selected.

use std::fmt;

use keeper_core::traits::ObjectView;
use serde::{Deserialize, Serialize};

use super::matcher::{ends_with, starts_with};

/// How serious a validation message is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    #[default]
    Error,
}

impl Severity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One finding produced while validating an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationMessage {
    pub severity: Severity,
    pub message: String,
}

impl ValidationMessage {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// A check applied to an object the rule matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    NamePrefix {
        prefix: String,
        case_sensitive: bool,
        severity: Severity,
    },
    NameSuffix {
        suffix: String,
        case_sensitive: bool,
        severity: Severity,
    },
    All(Vec<Action>),
}

impl Action {
    pub fn name_prefix(prefix: impl Into<String>) -> Self {
        Action::NamePrefix {
            prefix: prefix.into(),
            case_sensitive: true,
            severity: Severity::Error,
        }
    }

    pub fn name_suffix(suffix: impl Into<String>) -> Self {
        Action::NameSuffix {
            suffix: suffix.into(),
            case_sensitive: true,
            severity: Severity::Error,
        }
    }

    /// Run the action, appending any findings to `messages`.
    pub fn apply(&self, object: &dyn ObjectView, messages: &mut Vec<ValidationMessage>) {
        match self {
            Action::NamePrefix { prefix, case_sensitive, severity } => {
                if !starts_with(object.name(), prefix, *case_sensitive) {
                    messages.push(ValidationMessage {
                        severity: *severity,
                        message: format!(
                            "Asset name '{}' expected to start with the prefix '{}'{}",
                            object.name(),
                            prefix,
                            comparison_note(*case_sensitive)
                        ),
                    });
                }
            }
            Action::NameSuffix { suffix, case_sensitive, severity } => {
                if !ends_with(object.name(), suffix, *case_sensitive) {
                    messages.push(ValidationMessage {
                        severity: *severity,
                        message: format!(
                            "Asset name '{}' expected to end with the suffix '{}'{}",
                            object.name(),
                            suffix,
                            comparison_note(*case_sensitive)
                        ),
                    });
                }
            }
            Action::All(actions) => {
                for action in actions {
                    action.apply(object, messages);
                }
            }
        }
    }
}

fn comparison_note(case_sensitive: bool) -> &'static str {
    if case_sensitive {
        ""
    } else {
        " (case insensitive comparison)"
    }
}
