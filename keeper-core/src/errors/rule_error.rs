//! Naming rule definition errors.

use super::error_code::{self, KeeperErrorCode};

/// Errors that can occur while loading rule definitions.
///
/// Only load-time problems live here. A rule that fails to match an object is
/// ordinary control flow and never produces an error.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Rule definition file not found: {path}")]
    FileNotFound { path: String },

    #[error("Malformed rule definitions in {path}: {message}")]
    Malformed { path: String, message: String },

    #[error("Unknown asset type '{asset_type}' in rule {index}")]
    UnknownAssetType { asset_type: String, index: usize },

    #[error("Duplicate rule id '{id}'")]
    DuplicateId { id: String },
}

impl KeeperErrorCode for RuleError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownAssetType { .. } => error_code::UNKNOWN_ASSET_TYPE,
            _ => error_code::RULE_ERROR,
        }
    }
}
