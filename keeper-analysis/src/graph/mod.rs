//! Asset dependency graph: petgraph StableGraph keyed by asset path.

pub mod collector;
pub mod types;

pub use collector::{CollectionOutcome, GraphCollector};
pub use types::{strip_object_name, AssetGraph, AssetNode, ReferenceMap};
