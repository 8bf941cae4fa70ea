//! Asset graph collection errors.

use super::error_code::{self, KeeperErrorCode};

/// Errors reported by an asset graph provider.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GraphError {
    #[error("Failed to list assets under {base_path}: {message}")]
    ListFailed { base_path: String, message: String },

    #[error("Failed to load asset {asset}: {message}")]
    LoadFailed { asset: String, message: String },

    #[error("Unknown asset {0}")]
    UnknownAsset(String),
}

impl KeeperErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        error_code::GRAPH_ERROR
    }
}
