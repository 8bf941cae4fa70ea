//! Unreferenced-asset detection configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Precedence between the curated `forced_unreferenced` list and reachability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForcedPolicy {
    /// Forced assets stay unreferenced even if an entry point reaches them,
    /// and never mark their dependencies as used.
    #[default]
    ForcedWins,
    /// Forced assets that reachability proves used are dropped from the
    /// unreferenced set.
    ReachabilityWins,
}

impl ForcedPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ForcedWins => "forced_wins",
            Self::ReachabilityWins => "reachability_wins",
        }
    }
}

impl fmt::Display for ForcedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ForcedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "forced_wins" | "forced" => Ok(Self::ForcedWins),
            "reachability_wins" | "reachability" => Ok(Self::ReachabilityWins),
            other => Err(format!("unknown forced policy '{other}'")),
        }
    }
}

/// Which reachability implementation to run. Both produce identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReachabilityStrategy {
    /// Repeated full passes until nothing changes. O(V·E).
    #[default]
    FixedPoint,
    /// Propagation from newly used assets through a dependents index. O(V+E).
    Worklist,
}

impl ReachabilityStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FixedPoint => "fixed_point",
            Self::Worklist => "worklist",
        }
    }
}

impl fmt::Display for ReachabilityStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReachabilityStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "fixed_point" | "fixedpoint" => Ok(Self::FixedPoint),
            "worklist" | "work_list" => Ok(Self::Worklist),
            other => Err(format!("unknown reachability strategy '{other}'")),
        }
    }
}

/// Configuration for unreferenced-asset detection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReachabilityConfig {
    /// Only assets under this path are reported. Default: `/Game/`.
    pub base_path: Option<String>,
    /// Literal entry points (exact asset paths).
    #[serde(default)]
    pub entry_points: Vec<String>,
    /// Regex entry points, matched anywhere in the asset path.
    #[serde(default)]
    pub entry_patterns: Vec<String>,
    /// Assets that are always reported as unreferenced.
    #[serde(default)]
    pub forced_unreferenced: Vec<String>,
    /// Precedence of `forced_unreferenced`. Default: `forced_wins`.
    pub policy: Option<ForcedPolicy>,
    /// Engine implementation. Default: `fixed_point`.
    pub strategy: Option<ReachabilityStrategy>,
    /// Emit entry point and edge sections ahead of the asset list. Default: false.
    pub emit_full_report: Option<bool>,
    /// Treat classes of actors placed in the current map as entry points. Default: true.
    pub include_level_actors: Option<bool>,
}

impl ReachabilityConfig {
    /// Returns the effective base path, defaulting to `/Game/`.
    pub fn effective_base_path(&self) -> &str {
        self.base_path.as_deref().unwrap_or("/Game/")
    }

    /// Returns the effective forced policy, defaulting to `ForcedWins`.
    pub fn effective_policy(&self) -> ForcedPolicy {
        self.policy.unwrap_or_default()
    }

    /// Returns the effective strategy, defaulting to `FixedPoint`.
    pub fn effective_strategy(&self) -> ReachabilityStrategy {
        self.strategy.unwrap_or_default()
    }

    /// Returns whether the full report is emitted, defaulting to false.
    pub fn effective_emit_full_report(&self) -> bool {
        self.emit_full_report.unwrap_or(false)
    }

    /// Returns whether level actor classes are entry points, defaulting to true.
    pub fn effective_include_level_actors(&self) -> bool {
        self.include_level_actors.unwrap_or(true)
    }
}
