//! Builds an `AssetGraph` from a host `AssetGraphProvider`.
//!
//! Collection is the expensive phase (the host loads every asset); the result
//! is usually written to the graph cache so reachability can be re-run cheaply.

use std::time::Instant;

use keeper_core::errors::{GraphError, KeeperErrorCode, PipelineResult};
use keeper_core::events::types::{
    CollectionCompleteEvent, CollectionProgressEvent, CollectionStartedEvent, ErrorEvent,
};
use keeper_core::events::EventDispatcher;
use keeper_core::traits::{AssetGraphProvider, Cancellable};

use super::types::{strip_object_name, AssetGraph};

/// What a collection run produced.
#[derive(Debug, Default)]
pub struct CollectionOutcome {
    pub graph: AssetGraph,
    /// Assets listed under the base path, object names stripped, in listing order.
    pub listed: Vec<String>,
    /// Class paths of actors in the current map, object names stripped.
    pub level_actor_classes: Vec<String>,
    /// Assets skipped because the provider failed to load them.
    pub skipped: Vec<String>,
    /// Set when collection stopped early; the graph is then incomplete.
    pub cancelled: bool,
}

impl CollectionOutcome {
    pub fn is_partial(&self) -> bool {
        self.cancelled
    }
}

/// Walks a provider and records edges in both directions.
pub struct GraphCollector<'a> {
    provider: &'a dyn AssetGraphProvider,
    events: &'a EventDispatcher,
}

impl<'a> GraphCollector<'a> {
    pub fn new(provider: &'a dyn AssetGraphProvider, events: &'a EventDispatcher) -> Self {
        Self { provider, events }
    }

    /// Collect the graph for every asset under `base_path`.
    ///
    /// Failing to list assets is fatal. Failing to load a single asset is not:
    /// the asset is skipped, logged, and recorded as a non-fatal error.
    pub fn collect(
        &self,
        base_path: &str,
        cancel: &dyn Cancellable,
    ) -> Result<PipelineResult<CollectionOutcome>, GraphError> {
        let start = Instant::now();
        let listed: Vec<String> = self
            .provider
            .list_assets(base_path)?
            .iter()
            .map(|p| strip_object_name(p).to_string())
            .collect();

        tracing::info!(base_path, assets = listed.len(), "collecting asset graph");
        self.events.emit_collection_started(&CollectionStartedEvent {
            base_path: base_path.to_string(),
            asset_count: listed.len(),
        });

        let mut result = PipelineResult::new(CollectionOutcome::default());
        let total = listed.len();

        for (processed, asset) in listed.iter().enumerate() {
            if cancel.is_cancelled() {
                tracing::warn!(processed, total, "graph collection cancelled");
                result.data.cancelled = true;
                break;
            }

            match self.collect_asset(asset) {
                Ok((referencers, dependencies)) => {
                    let graph = &mut result.data.graph;
                    graph.add_asset(asset);
                    for referencer in &referencers {
                        graph.add_reference(referencer, asset);
                    }
                    for dependency in &dependencies {
                        graph.add_reference(asset, dependency);
                    }
                }
                Err(err) => {
                    tracing::warn!(
                        asset = %asset,
                        error = %err,
                        "skipping asset that failed to load"
                    );
                    self.events.emit_error(&ErrorEvent {
                        message: err.to_string(),
                        error_code: err.error_code().to_string(),
                    });
                    result.data.skipped.push(asset.clone());
                    result.add_error(err);
                }
            }

            self.events.emit_collection_progress(&CollectionProgressEvent {
                asset: asset.clone(),
                processed: processed + 1,
                total,
            });
        }

        if !result.data.cancelled {
            match self.provider.level_actor_classes() {
                Ok(classes) => {
                    let mut stripped: Vec<String> = classes
                        .iter()
                        .map(|c| strip_object_name(c).to_string())
                        .collect();
                    stripped.sort();
                    stripped.dedup();
                    result.data.level_actor_classes = stripped;
                }
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        "failed to read level actors; continuing without them"
                    );
                    result.add_error(err);
                }
            }
        }

        result.data.listed = listed;

        let outcome = &result.data;
        tracing::info!(
            nodes = outcome.graph.node_count(),
            edges = outcome.graph.edge_count(),
            skipped = outcome.skipped.len(),
            cancelled = outcome.cancelled,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "asset graph collected"
        );
        self.events.emit_collection_complete(&CollectionCompleteEvent {
            node_count: outcome.graph.node_count(),
            edge_count: outcome.graph.edge_count(),
            skipped: outcome.skipped.len(),
            cancelled: outcome.cancelled,
        });

        Ok(result)
    }

    fn collect_asset(&self, asset: &str) -> Result<(Vec<String>, Vec<String>), GraphError> {
        let referencers = self.provider.referencers_of(asset)?;
        let dependencies = self.provider.dependencies_of(asset)?;
        Ok((referencers, dependencies))
    }
}
