//! Reachability result types.

use std::collections::BTreeSet;

use serde::Serialize;

/// Final (or, after cancellation, current) state of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Used,
    Unreferenced,
    /// Only present in results of a cancelled run.
    Undetermined,
}

impl Classification {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Used => "used",
            Self::Unreferenced => "unreferenced",
            Self::Undetermined => "undetermined",
        }
    }
}

/// Whether the run reached its fixed point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum Completeness {
    Complete,
    /// Stopped by the cancellation predicate after `iterations` iterations.
    Cancelled { iterations: usize },
}

/// Outcome of a reachability run.
///
/// `used`, `unreferenced` and `undetermined` are disjoint. `undetermined` is
/// empty unless the run was cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReachabilityResult {
    pub used: BTreeSet<String>,
    pub unreferenced: BTreeSet<String>,
    pub undetermined: BTreeSet<String>,
    /// Full passes (fixed point) or dequeued assets (work-list).
    pub iterations: usize,
    pub completeness: Completeness,
}

impl ReachabilityResult {
    pub fn is_complete(&self) -> bool {
        self.completeness == Completeness::Complete
    }

    pub fn classification_of(&self, id: &str) -> Option<Classification> {
        if self.used.contains(id) {
            Some(Classification::Used)
        } else if self.unreferenced.contains(id) {
            Some(Classification::Unreferenced)
        } else if self.undetermined.contains(id) {
            Some(Classification::Undetermined)
        } else {
            None
        }
    }

    /// Unreferenced assets under `base_path`, sorted.
    pub fn unreferenced_under<'a>(&'a self, base_path: &'a str) -> impl Iterator<Item = &'a str> {
        self.unreferenced
            .iter()
            .filter(move |id| id.starts_with(base_path))
            .map(String::as_str)
    }
}
