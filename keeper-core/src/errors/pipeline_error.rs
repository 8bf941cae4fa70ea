//! Pipeline errors and non-fatal error collection.

use super::error_code::KeeperErrorCode;
use super::{CacheError, ConfigError, GraphError, ReportError, RuleError};

/// Errors that can occur during a Keeper run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

impl KeeperErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Rule(e) => e.error_code(),
            Self::Graph(e) => e.error_code(),
            Self::Cache(e) => e.error_code(),
            Self::Report(e) => e.error_code(),
        }
    }
}

/// Result of a pipeline run that accumulates non-fatal errors.
/// Allows partial results to be returned even when some assets fail to load.
#[derive(Debug, Default)]
pub struct PipelineResult<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Non-fatal errors collected during the run.
    pub errors: Vec<PipelineError>,
}

impl<T: Default> PipelineResult<T> {
    /// Create a new pipeline result with no errors.
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    /// Add a non-fatal error to the result.
    pub fn add_error(&mut self, error: impl Into<PipelineError>) {
        self.errors.push(error.into());
    }

    /// Returns true if there are no non-fatal errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of non-fatal errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
