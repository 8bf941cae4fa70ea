//! Unreferenced-asset detection.
//!
//! An asset is used if it is an entry point or any of its referencers is used;
//! everything else is unreferenced. Two implementations compute the same
//! classification: a repeated full-pass fixed point and a work-list
//! propagation from newly used assets.

pub mod engine;
pub mod entry_points;
pub mod fixed_point;
pub mod types;
pub mod worklist;

pub use engine::{
    compute_unreferenced, compute_unreferenced_worklist, ReachabilityEngine, ReachabilityInput,
};
pub use entry_points::{EntryOrigin, EntryPoints};
pub use types::{Classification, Completeness, ReachabilityResult};
