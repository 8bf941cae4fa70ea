//! Configuration system for Keeper.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod keeper_config;
pub mod reachability_config;
pub mod validation_config;

pub use keeper_config::{CliOverrides, KeeperConfig};
pub use reachability_config::{ForcedPolicy, ReachabilityConfig, ReachabilityStrategy};
pub use validation_config::{RuleExclusion, ValidationConfig};
