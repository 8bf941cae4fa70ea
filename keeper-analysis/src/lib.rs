//! Keeper analysis engines.
//!
//! - `graph`: asset dependency graph and its collection from a host provider
//! - `cache`: JSON persistence of the collected graph
//! - `reachability`: unreferenced-asset detection
//! - `rules`: naming rule definitions, registry, resolution and validation
//! - `reporters`: text, console and JSON output

pub mod cache;
pub mod graph;
pub mod reachability;
pub mod reporters;
pub mod rules;
