//! Report generation errors.

use super::error_code::{self, KeeperErrorCode};

/// Errors that can occur while rendering or writing reports.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Unknown report format: {0}")]
    UnknownFormat(String),

    #[error("Failed to serialize report: {0}")]
    Serialization(String),

    #[error("Failed to write report {path}: {message}")]
    WriteFailed { path: String, message: String },
}

impl KeeperErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_ERROR
    }
}
