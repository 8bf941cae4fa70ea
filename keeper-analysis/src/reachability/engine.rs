//! Reachability engine: input indexing, policy handling and result assembly.

use std::collections::BTreeSet;
use std::time::Instant;

use keeper_core::config::{ForcedPolicy, ReachabilityConfig, ReachabilityStrategy};
use keeper_core::errors::ConfigError;
use keeper_core::events::types::ReachabilityCompleteEvent;
use keeper_core::events::EventDispatcher;
use keeper_core::traits::{Cancellable, NeverCancel};
use keeper_core::types::collections::{fx_map_with_capacity, FxHashMap};

use crate::graph::{AssetGraph, ReferenceMap};

use super::entry_points::EntryPoints;
use super::types::{Classification, Completeness, ReachabilityResult};
use super::{fixed_point, worklist};

/// The asset universe and its referencer edges, indexed for the engines.
///
/// Nodes are sorted lexicographically so every pass visits them in a stable
/// order. Referencers outside the universe count towards an asset having
/// referencers but can never make it used.
#[derive(Debug)]
pub struct ReachabilityInput<'a> {
    pub(crate) nodes: Vec<&'a str>,
    pub(crate) referencer_count: Vec<usize>,
    pub(crate) referencers: Vec<Vec<usize>>,
    index: FxHashMap<&'a str, usize>,
}

impl<'a> ReachabilityInput<'a> {
    /// Index `nodes` using `referencers_of` to look up each node's referencers.
    pub fn from_lookup<I, F>(nodes: I, referencers_of: F) -> Self
    where
        I: IntoIterator<Item = &'a str>,
        F: Fn(&str) -> Vec<&'a str>,
    {
        let mut nodes: Vec<&'a str> = nodes.into_iter().collect();
        nodes.sort_unstable();
        nodes.dedup();

        let mut index = fx_map_with_capacity(nodes.len());
        for (i, id) in nodes.iter().enumerate() {
            index.insert(*id, i);
        }

        let mut referencer_count = Vec::with_capacity(nodes.len());
        let mut referencers = Vec::with_capacity(nodes.len());
        for id in &nodes {
            let mut refs = referencers_of(id);
            refs.sort_unstable();
            refs.dedup();
            referencer_count.push(refs.len());
            referencers.push(refs.iter().filter_map(|r| index.get(r).copied()).collect());
        }

        Self {
            nodes,
            referencer_count,
            referencers,
            index,
        }
    }

    /// Universe = `nodes`, referencers from `map` (missing entries mean none).
    pub fn from_map<I>(nodes: I, map: &'a ReferenceMap) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::from_lookup(nodes, |id| {
            map.get(id)
                .map(|refs| refs.iter().map(String::as_str).collect())
                .unwrap_or_default()
        })
    }

    /// Universe = every key of the referencer map.
    pub fn from_referencer_map(map: &'a ReferenceMap) -> Self {
        Self::from_map(map.keys().map(String::as_str), map)
    }

    /// Universe = every asset in the graph.
    pub fn from_graph(graph: &'a AssetGraph) -> Self {
        Self::from_lookup(graph.ids(), move |id| graph.referencers_of(id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// For each node, the in-universe nodes it references.
    pub(crate) fn dependents(&self) -> Vec<Vec<usize>> {
        let mut dependents = vec![Vec::new(); self.nodes.len()];
        for (node, refs) in self.referencers.iter().enumerate() {
            for &referencer in refs {
                dependents[referencer].push(node);
            }
        }
        dependents
    }
}

/// Per-node states produced by one of the implementations.
#[derive(Debug)]
pub(crate) struct Labelling {
    pub states: Vec<Classification>,
    pub iterations: usize,
    pub cancelled: bool,
}

/// Configured reachability computation.
#[derive(Debug, Clone, Default)]
pub struct ReachabilityEngine {
    entry_points: EntryPoints,
    forced_unreferenced: BTreeSet<String>,
    policy: ForcedPolicy,
    strategy: ReachabilityStrategy,
}

impl ReachabilityEngine {
    pub fn new(entry_points: EntryPoints) -> Self {
        Self {
            entry_points,
            ..Self::default()
        }
    }

    /// Build from the `[reachability]` config section.
    pub fn from_config(config: &ReachabilityConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(EntryPoints::from_config(config)?)
            .with_forced_unreferenced(config.forced_unreferenced.iter().cloned())
            .with_policy(config.effective_policy())
            .with_strategy(config.effective_strategy()))
    }

    pub fn with_forced_unreferenced<I: IntoIterator<Item = String>>(mut self, ids: I) -> Self {
        self.forced_unreferenced.extend(ids);
        self
    }

    pub fn with_policy(mut self, policy: ForcedPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_strategy(mut self, strategy: ReachabilityStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn entry_points(&self) -> &EntryPoints {
        &self.entry_points
    }

    pub fn entry_points_mut(&mut self) -> &mut EntryPoints {
        &mut self.entry_points
    }

    pub fn policy(&self) -> ForcedPolicy {
        self.policy
    }

    pub fn strategy(&self) -> ReachabilityStrategy {
        self.strategy
    }

    /// Classify every asset in `input`.
    ///
    /// `cancel` is polled once per iteration. A cancelled run returns the
    /// decisions made so far, the undecided assets in `undetermined`, and
    /// `Completeness::Cancelled`.
    pub fn run(
        &self,
        input: &ReachabilityInput<'_>,
        cancel: &dyn Cancellable,
        events: &EventDispatcher,
    ) -> ReachabilityResult {
        let start = Instant::now();
        let is_entry: Vec<bool> = input
            .nodes
            .iter()
            .map(|id| self.entry_points.is_entry(id))
            .collect();

        let mut initial = vec![Classification::Undetermined; input.len()];
        if self.policy == ForcedPolicy::ForcedWins {
            for id in &self.forced_unreferenced {
                if let Some(i) = input.index_of(id) {
                    initial[i] = Classification::Unreferenced;
                }
            }
        }

        let labelling = match self.strategy {
            ReachabilityStrategy::FixedPoint => {
                fixed_point::label(input, &is_entry, initial, cancel, events)
            }
            ReachabilityStrategy::Worklist => {
                worklist::label(input, &is_entry, initial, cancel, events)
            }
        };

        let result = self.assemble(input, labelling);
        tracing::info!(
            strategy = %self.strategy,
            policy = %self.policy,
            assets = input.len(),
            used = result.used.len(),
            unreferenced = result.unreferenced.len(),
            undetermined = result.undetermined.len(),
            iterations = result.iterations,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "reachability computed"
        );
        events.emit_reachability_complete(&ReachabilityCompleteEvent {
            iterations: result.iterations,
            used: result.used.len(),
            unreferenced: result.unreferenced.len(),
            cancelled: !result.is_complete(),
        });
        result
    }

    fn assemble(&self, input: &ReachabilityInput<'_>, labelling: Labelling) -> ReachabilityResult {
        let mut used = BTreeSet::new();
        let mut unreferenced = BTreeSet::new();
        let mut undetermined = BTreeSet::new();

        for (i, state) in labelling.states.iter().enumerate() {
            let id = input.nodes[i].to_string();
            match state {
                Classification::Used => used.insert(id),
                Classification::Unreferenced => unreferenced.insert(id),
                Classification::Undetermined => undetermined.insert(id),
            };
        }

        // Forced assets are seeded into the unreferenced set. Under
        // ReachabilityWins only those proven used leave it.
        for id in &self.forced_unreferenced {
            if !used.contains(id) {
                undetermined.remove(id);
                unreferenced.insert(id.clone());
            }
        }

        let completeness = if labelling.cancelled {
            tracing::warn!(
                iterations = labelling.iterations,
                undetermined = undetermined.len(),
                "reachability cancelled; result is partial"
            );
            Completeness::Cancelled {
                iterations: labelling.iterations,
            }
        } else {
            Completeness::Complete
        };

        ReachabilityResult {
            used,
            unreferenced,
            undetermined,
            iterations: labelling.iterations,
            completeness,
        }
    }
}

/// Unreferenced assets among `nodes`, plus every forced id, using the
/// default policy (`ForcedWins`) and no cancellation.
pub fn compute_unreferenced(
    nodes: &BTreeSet<String>,
    referencers_of: &ReferenceMap,
    entry_points: &EntryPoints,
    extra_forced_unreferenced: &BTreeSet<String>,
) -> BTreeSet<String> {
    unreferenced_with(
        ReachabilityStrategy::FixedPoint,
        nodes,
        referencers_of,
        entry_points,
        extra_forced_unreferenced,
    )
}

/// [`compute_unreferenced`] using work-list propagation. Same result, O(V+E).
pub fn compute_unreferenced_worklist(
    nodes: &BTreeSet<String>,
    referencers_of: &ReferenceMap,
    entry_points: &EntryPoints,
    extra_forced_unreferenced: &BTreeSet<String>,
) -> BTreeSet<String> {
    unreferenced_with(
        ReachabilityStrategy::Worklist,
        nodes,
        referencers_of,
        entry_points,
        extra_forced_unreferenced,
    )
}

fn unreferenced_with(
    strategy: ReachabilityStrategy,
    nodes: &BTreeSet<String>,
    referencers_of: &ReferenceMap,
    entry_points: &EntryPoints,
    extra_forced_unreferenced: &BTreeSet<String>,
) -> BTreeSet<String> {
    let input = ReachabilityInput::from_map(nodes.iter().map(String::as_str), referencers_of);
    ReachabilityEngine::new(entry_points.clone())
        .with_forced_unreferenced(extra_forced_unreferenced.iter().cloned())
        .with_strategy(strategy)
        .run(&input, &NeverCancel, &EventDispatcher::new())
        .unreferenced
}
