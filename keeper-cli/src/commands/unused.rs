use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Args, ValueEnum};
use keeper_analysis::cache::GraphCache;
use keeper_analysis::reachability::{ReachabilityEngine, ReachabilityInput};
use keeper_analysis::reporters::UnusedReport;
use keeper_core::config::{CliOverrides, ForcedPolicy, KeeperConfig, ReachabilityStrategy};
use keeper_core::errors::PipelineError;
use keeper_core::events::EventDispatcher;
use keeper_core::traits::NeverCancel;

use super::{emit, resolve, Outcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum UnusedFormat {
    Text,
    Json,
}

#[derive(Args, Debug)]
pub struct UnusedArgs {
    /// Directory holding referencers.json, dependencies.json and actor_classes.json
    #[arg(long, default_value = ".keeper/cache")]
    pub cache: PathBuf,

    /// Only report assets under this path
    #[arg(long)]
    pub base_path: Option<String>,

    /// Extra entry point; specifiers containing `*` are regexes (repeatable)
    #[arg(short, long)]
    pub entry: Vec<String>,

    /// Precedence between forced-unreferenced assets and reachability
    #[arg(long)]
    pub policy: Option<ForcedPolicy>,

    /// Reachability implementation
    #[arg(long)]
    pub strategy: Option<ReachabilityStrategy>,

    /// Include entry points and the dependency/referencer maps
    #[arg(long)]
    pub full: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: UnusedFormat,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Stop after this many seconds and emit a partial result
    #[arg(long)]
    pub time_limit: Option<u64>,
}

pub fn run(root: &Path, args: &UnusedArgs) -> Result<Outcome, PipelineError> {
    let overrides = CliOverrides {
        base_path: args.base_path.clone(),
        policy: args.policy,
        strategy: args.strategy,
        emit_full_report: args.full.then_some(true),
        extra_entry_points: args.entry.clone(),
        ..Default::default()
    };
    let config = KeeperConfig::load(root, Some(&overrides))?;
    let reachability = &config.reachability;

    let cache = GraphCache::load(&resolve(root, &args.cache))?;
    let graph = cache.to_graph();

    let mut engine = ReachabilityEngine::from_config(reachability)?;
    if reachability.effective_include_level_actors() {
        engine.entry_points_mut().add_level_actor_classes(&cache.actor_classes);
    }

    let input = ReachabilityInput::from_graph(&graph);
    let events = EventDispatcher::new();
    let result = match args.time_limit {
        Some(secs) => {
            let deadline = Instant::now() + Duration::from_secs(secs);
            let cancel = move || Instant::now() >= deadline;
            engine.run(&input, &cancel, &events)
        }
        None => engine.run(&input, &NeverCancel, &events),
    };

    let base_path = reachability.effective_base_path();
    let mut report = UnusedReport::new(&result, base_path);
    if reachability.effective_emit_full_report() {
        report = report.with_details(&graph, engine.entry_points());
    }
    let rendered = match args.format {
        UnusedFormat::Text => report.render(),
        UnusedFormat::Json => report.to_json()?,
    };
    emit(args.output.as_deref(), &rendered)?;

    if result.is_complete() {
        Ok(Outcome::Clean)
    } else {
        tracing::warn!(
            undetermined = result.undetermined.len(),
            "time limit reached; report is partial"
        );
        Ok(Outcome::Partial)
    }
}
