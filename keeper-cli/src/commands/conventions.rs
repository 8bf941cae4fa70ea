use std::path::{Path, PathBuf};

use clap::Args;
use keeper_analysis::rules::conventions::conventions_to_csv;
use keeper_analysis::rules::RuleLoader;
use keeper_core::config::{CliOverrides, KeeperConfig};
use keeper_core::errors::PipelineError;

use super::{emit, resolve, Outcome};

#[derive(Args, Debug)]
pub struct ConventionsArgs {
    /// Rule definitions (overrides validation.rules_path)
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Write the CSV here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(root: &Path, args: &ConventionsArgs) -> Result<Outcome, PipelineError> {
    let overrides = CliOverrides {
        rules_path: args.rules.as_ref().map(|p| p.display().to_string()),
        ..Default::default()
    };
    let config = KeeperConfig::load(root, Some(&overrides))?;
    let rules_path = resolve(root, Path::new(config.validation.effective_rules_path()));
    let loaded = RuleLoader::new().load_from_file(&rules_path)?;
    emit(args.output.as_deref(), &conventions_to_csv(&loaded.definitions))?;
    Ok(Outcome::Clean)
}
