//! JSON persistence for the collected asset graph.
//!
//! Three independent documents decouple the expensive collection phase from
//! the cheap reachability phase:
//! - `referencers.json`: asset → assets that reference it
//! - `dependencies.json`: asset → assets it depends on
//! - `actor_classes.json`: class paths of actors placed in the current map

pub mod graph_cache;

pub use graph_cache::{GraphCache, ACTOR_CLASSES_FILE, DEPENDENCIES_FILE, REFERENCERS_FILE};
