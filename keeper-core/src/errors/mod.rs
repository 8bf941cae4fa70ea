//! Error handling for Keeper.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod cache_error;
pub mod config_error;
pub mod error_code;
pub mod graph_error;
pub mod pipeline_error;
pub mod report_error;
pub mod rule_error;

pub use cache_error::CacheError;
pub use config_error::ConfigError;
pub use error_code::KeeperErrorCode;
pub use graph_error::GraphError;
pub use pipeline_error::{PipelineError, PipelineResult};
pub use report_error::ReportError;
pub use rule_error::RuleError;
