//! JSON reporter.

use keeper_core::errors::ReportError;

use super::Reporter;
use crate::rules::ValidationRun;

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, run: &ValidationRun) -> Result<String, ReportError> {
        serde_json::to_string_pretty(run).map_err(|e| ReportError::Serialization(e.to_string()))
    }
}
