//! Keeper core: the ambient layer shared by the analysis engines and the CLI.
//!
//! - `errors`: one `thiserror` enum per subsystem plus the aggregate `PipelineError`
//! - `config`: layered TOML configuration
//! - `traits`: cancellation and the host collaborator capabilities
//! - `events`: synchronous progress events
//! - `logging`: `tracing-subscriber` setup

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod traits;
pub mod types;
