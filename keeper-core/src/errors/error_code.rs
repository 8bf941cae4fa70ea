//! Stable, machine-readable error codes.

pub const CONFIG_ERROR: &str = "KEEPER_CONFIG";
pub const RULE_ERROR: &str = "KEEPER_RULE";
pub const UNKNOWN_ASSET_TYPE: &str = "KEEPER_UNKNOWN_ASSET_TYPE";
pub const GRAPH_ERROR: &str = "KEEPER_GRAPH";
pub const CACHE_ERROR: &str = "KEEPER_CACHE";
pub const REPORT_ERROR: &str = "KEEPER_REPORT";

/// Every Keeper error exposes a stable code for scripting and exit reporting.
pub trait KeeperErrorCode {
    fn error_code(&self) -> &'static str;
}
