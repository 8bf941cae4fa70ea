use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use keeper_analysis::reporters::console::ConsoleReporter;
use keeper_analysis::reporters::{create_reporter, Reporter};
use keeper_analysis::rules::{AssetObject, NamingValidator, RuleLoader, TypeHierarchy};
use keeper_core::config::{CliOverrides, KeeperConfig};
use keeper_core::errors::{ConfigError, PipelineError};
use keeper_core::events::EventDispatcher;

use super::{emit, resolve, Outcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ValidateFormat {
    Console,
    Json,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// JSON manifest of objects to check
    #[arg(long)]
    pub objects: PathBuf,

    /// Rule definitions (overrides validation.rules_path)
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Extra type hierarchy, layered over the engine defaults
    #[arg(long)]
    pub hierarchy: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "console")]
    pub format: ValidateFormat,

    /// Disable ANSI colors in console output
    #[arg(long)]
    pub no_color: bool,

    /// List objects that passed as well
    #[arg(long)]
    pub show_valid: bool,

    /// Do not warn about objects whose type has no rules
    #[arg(long)]
    pub no_missing_type_warnings: bool,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(root: &Path, args: &ValidateArgs) -> Result<Outcome, PipelineError> {
    let overrides = CliOverrides {
        rules_path: args.rules.as_ref().map(|p| p.display().to_string()),
        warn_on_missing_types: args.no_missing_type_warnings.then_some(false),
        ..Default::default()
    };
    let config = KeeperConfig::load(root, Some(&overrides))?;

    let events = EventDispatcher::new();
    let rules_path = resolve(root, Path::new(config.validation.effective_rules_path()));
    let loaded = RuleLoader::with_events(&events).load_from_file(&rules_path)?;
    tracing::info!(
        rules = loaded.registry.len(),
        dropped = loaded.dropped.len(),
        path = %rules_path.display(),
        "loaded naming rules"
    );

    let hierarchy = match &args.hierarchy {
        Some(path) => TypeHierarchy::load(&resolve(root, path))?,
        None => TypeHierarchy::engine_defaults(),
    };
    let objects = read_manifest(&resolve(root, &args.objects))?;

    let validator =
        NamingValidator::new(loaded.registry, &hierarchy).configured(&config.validation);
    let run = validator.validate_all(&objects);

    let reporter: Box<dyn Reporter> = match args.format {
        ValidateFormat::Console => Box::new(ConsoleReporter {
            use_color: !args.no_color && args.output.is_none(),
            show_valid: args.show_valid,
        }),
        ValidateFormat::Json => create_reporter("json")?,
    };
    emit(args.output.as_deref(), &reporter.generate(&run)?)?;

    Ok(if run.summary.passed() {
        Outcome::Clean
    } else {
        Outcome::Findings
    })
}

fn read_manifest(path: &Path) -> Result<Vec<AssetObject>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.display().to_string(),
    })?;
    AssetObject::list_from_json(&content).map_err(|e| ConfigError::ParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
