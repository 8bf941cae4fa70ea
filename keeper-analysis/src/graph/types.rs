//! Asset graph types.

use std::collections::{BTreeMap, BTreeSet};

use keeper_core::types::collections::FxHashMap;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Direction;

/// Asset path → set of asset paths, the shape of both cache maps.
pub type ReferenceMap = BTreeMap<String, BTreeSet<String>>;

/// A node in the asset graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetNode {
    /// Package path (`/Game/Props/SM_Crate`).
    pub id: String,
}

/// Directed asset graph. An edge `a → b` means `a` references (depends on) `b`.
#[derive(Debug, Default)]
pub struct AssetGraph {
    pub graph: StableGraph<AssetNode, ()>,
    index: FxHashMap<String, NodeIndex>,
}

impl AssetGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asset, returning its index. Adding an existing asset is a no-op.
    pub fn add_asset(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(AssetNode { id: id.to_string() });
        self.index.insert(id.to_string(), idx);
        idx
    }

    /// Record that `referencer` depends on `dependency`. Duplicate edges collapse.
    pub fn add_reference(&mut self, referencer: &str, dependency: &str) {
        let from = self.add_asset(referencer);
        let to = self.add_asset(dependency);
        if !self.graph.contains_edge(from, to) {
            self.graph.add_edge(from, to, ());
        }
    }

    pub fn get_node(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Every asset id, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    /// Every asset id, sorted.
    pub fn asset_ids(&self) -> BTreeSet<String> {
        self.index.keys().cloned().collect()
    }

    /// Assets that reference `id`, sorted. Empty for unknown assets.
    pub fn referencers_of(&self, id: &str) -> Vec<&str> {
        self.neighbors(id, Direction::Incoming)
    }

    /// Assets that `id` depends on, sorted. Empty for unknown assets.
    pub fn dependencies_of(&self, id: &str) -> Vec<&str> {
        self.neighbors(id, Direction::Outgoing)
    }

    fn neighbors(&self, id: &str, direction: Direction) -> Vec<&str> {
        let Some(idx) = self.get_node(id) else {
            return Vec::new();
        };
        let mut ids: Vec<&str> = self
            .graph
            .neighbors_directed(idx, direction)
            .map(|n| self.graph[n].id.as_str())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Asset → referencers for every node, including nodes with none.
    pub fn referencer_map(&self) -> ReferenceMap {
        self.reference_map(Direction::Incoming)
    }

    /// Asset → dependencies for every node, including nodes with none.
    pub fn dependency_map(&self) -> ReferenceMap {
        self.reference_map(Direction::Outgoing)
    }

    fn reference_map(&self, direction: Direction) -> ReferenceMap {
        self.index
            .keys()
            .map(|id| {
                let set = self
                    .neighbors(id, direction)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                (id.clone(), set)
            })
            .collect()
    }

    /// Rebuild a graph from cached maps. Both maps contribute nodes and edges;
    /// an edge present in only one of them is still recorded.
    pub fn from_maps(referencers: &ReferenceMap, dependencies: &ReferenceMap) -> Self {
        let mut graph = Self::new();
        for (asset, refs) in referencers {
            graph.add_asset(asset);
            for referencer in refs {
                graph.add_reference(referencer, asset);
            }
        }
        for (asset, deps) in dependencies {
            graph.add_asset(asset);
            for dependency in deps {
                graph.add_reference(asset, dependency);
            }
        }
        graph
    }
}

/// Strip a trailing `.ObjectName` from an object or class path:
/// `/Game/BP/Door.Door_C` → `/Game/BP/Door`. Paths without a `.` after the
/// last `/` are returned unchanged.
pub fn strip_object_name(path: &str) -> &str {
    let last_segment_start = path.rfind('/').map(|i| i + 1).unwrap_or(0);
    match path[last_segment_start..].rfind('.') {
        Some(dot) => &path[..last_segment_start + dot],
        None => path,
    }
}
