//! Top-level Keeper configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ForcedPolicy, ReachabilityConfig, ReachabilityStrategy, ValidationConfig};
use crate::errors::ConfigError;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "keeper.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`KEEPER_*`)
/// 3. Project config (`keeper.toml` in project root)
/// 4. User config (`~/.keeper/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KeeperConfig {
    pub reachability: ReachabilityConfig,
    pub validation: ValidationConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub base_path: Option<String>,
    pub policy: Option<ForcedPolicy>,
    pub strategy: Option<ReachabilityStrategy>,
    pub emit_full_report: Option<bool>,
    /// Appended entry specifiers; those containing `*` become patterns.
    pub extra_entry_points: Vec<String>,
    pub rules_path: Option<String>,
    pub warn_on_missing_types: Option<bool>,
}

impl KeeperConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %err,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: KeeperConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &KeeperConfig) -> Result<(), ConfigError> {
        if let Some(base_path) = &config.reachability.base_path {
            if !base_path.starts_with('/') {
                return Err(ConfigError::ValidationFailed {
                    field: "reachability.base_path".to_string(),
                    message: "must be an absolute asset path starting with '/'".to_string(),
                });
            }
        }
        for pattern in &config.reachability.entry_patterns {
            if let Err(e) = regex::Regex::new(pattern) {
                return Err(ConfigError::InvalidPattern {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                });
            }
        }
        if let Some(rules_path) = &config.validation.rules_path {
            if rules_path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "validation.rules_path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.keeper/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut KeeperConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: KeeperConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it sets a value.
    fn merge(base: &mut KeeperConfig, other: &KeeperConfig) {
        // Reachability
        let (b, o) = (&mut base.reachability, &other.reachability);
        if o.base_path.is_some() {
            b.base_path = o.base_path.clone();
        }
        if !o.entry_points.is_empty() {
            b.entry_points = o.entry_points.clone();
        }
        if !o.entry_patterns.is_empty() {
            b.entry_patterns = o.entry_patterns.clone();
        }
        if !o.forced_unreferenced.is_empty() {
            b.forced_unreferenced = o.forced_unreferenced.clone();
        }
        if o.policy.is_some() {
            b.policy = o.policy;
        }
        if o.strategy.is_some() {
            b.strategy = o.strategy;
        }
        if o.emit_full_report.is_some() {
            b.emit_full_report = o.emit_full_report;
        }
        if o.include_level_actors.is_some() {
            b.include_level_actors = o.include_level_actors;
        }

        // Validation
        let (b, o) = (&mut base.validation, &other.validation);
        if o.rules_path.is_some() {
            b.rules_path = o.rules_path.clone();
        }
        if o.warn_on_missing_types.is_some() {
            b.warn_on_missing_types = o.warn_on_missing_types;
        }
        if !o.exclusions.is_empty() {
            b.exclusions = o.exclusions.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `KEEPER_REACHABILITY_BASE_PATH`, `KEEPER_VALIDATION_RULES_PATH`, etc.
    /// Unparseable values are ignored with a warning.
    fn apply_env_overrides(config: &mut KeeperConfig) {
        if let Ok(val) = std::env::var("KEEPER_REACHABILITY_BASE_PATH") {
            config.reachability.base_path = Some(val);
        }
        if let Ok(val) = std::env::var("KEEPER_REACHABILITY_POLICY") {
            match val.parse::<ForcedPolicy>() {
                Ok(v) => config.reachability.policy = Some(v),
                Err(e) => tracing::warn!(error = %e, "ignoring KEEPER_REACHABILITY_POLICY"),
            }
        }
        if let Ok(val) = std::env::var("KEEPER_REACHABILITY_STRATEGY") {
            match val.parse::<ReachabilityStrategy>() {
                Ok(v) => config.reachability.strategy = Some(v),
                Err(e) => tracing::warn!(error = %e, "ignoring KEEPER_REACHABILITY_STRATEGY"),
            }
        }
        if let Ok(val) = std::env::var("KEEPER_REACHABILITY_FULL_REPORT") {
            if let Ok(v) = val.parse::<bool>() {
                config.reachability.emit_full_report = Some(v);
            }
        }
        if let Ok(val) = std::env::var("KEEPER_VALIDATION_RULES_PATH") {
            config.validation.rules_path = Some(val);
        }
        if let Ok(val) = std::env::var("KEEPER_VALIDATION_WARN_ON_MISSING_TYPES") {
            if let Ok(v) = val.parse::<bool>() {
                config.validation.warn_on_missing_types = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(config: &mut KeeperConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.base_path {
            config.reachability.base_path = Some(v.clone());
        }
        if let Some(v) = cli.policy {
            config.reachability.policy = Some(v);
        }
        if let Some(v) = cli.strategy {
            config.reachability.strategy = Some(v);
        }
        if let Some(v) = cli.emit_full_report {
            config.reachability.emit_full_report = Some(v);
        }
        for entry in &cli.extra_entry_points {
            let list = if entry.contains('*') {
                &mut config.reachability.entry_patterns
            } else {
                &mut config.reachability.entry_points
            };
            if !list.contains(entry) {
                list.push(entry.clone());
            }
        }
        if let Some(ref v) = cli.rules_path {
            config.validation.rules_path = Some(v.clone());
        }
        if let Some(v) = cli.warn_on_missing_types {
            config.validation.warn_on_missing_types = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level keeper config directory: `~/.keeper/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".keeper"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
