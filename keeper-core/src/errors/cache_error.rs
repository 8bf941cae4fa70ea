//! Graph cache persistence errors.

use super::error_code::{self, KeeperErrorCode};

/// Errors that can occur while reading or writing graph cache files.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache file not found: {path}")]
    NotFound { path: String },

    #[error("Malformed cache file {path}: {message}")]
    Malformed { path: String, message: String },

    #[error("Failed to write cache file {path}: {message}")]
    WriteFailed { path: String, message: String },
}

impl KeeperErrorCode for CacheError {
    fn error_code(&self) -> &'static str {
        error_code::CACHE_ERROR
    }
}
