//! Unreferenced-asset report.
//!
//! The short form lists unreferenced assets under the base path, one per
//! line, sorted. The full form prefixes that list with the entry points and
//! the dependency and referencer maps, so a surprising classification can be
//! traced by hand.

use std::fmt::Write as _;
use std::path::Path;

use keeper_core::errors::ReportError;

use super::write_report;
use crate::graph::AssetGraph;
use crate::reachability::{Completeness, EntryOrigin, EntryPoints, ReachabilityResult};

pub struct UnusedReport<'a> {
    result: &'a ReachabilityResult,
    base_path: &'a str,
    details: Option<(&'a AssetGraph, &'a EntryPoints)>,
}

impl<'a> UnusedReport<'a> {
    pub fn new(result: &'a ReachabilityResult, base_path: &'a str) -> Self {
        Self {
            result,
            base_path,
            details: None,
        }
    }

    /// Include the entry point, dependency and referencer sections.
    pub fn with_details(mut self, graph: &'a AssetGraph, entry_points: &'a EntryPoints) -> Self {
        self.details = Some((graph, entry_points));
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        if let Completeness::Cancelled { iterations } = self.result.completeness {
            let _ = writeln!(
                out,
                "# PARTIAL RESULT: cancelled after {iterations} iterations, \
                 {} assets undetermined\n",
                self.result.undetermined.len()
            );
        }

        if let Some((graph, entry_points)) = self.details {
            out.push_str("# Entrypoint\n");
            for (id, origin) in entry_points.literals() {
                let from_map = python_bool(origin == EntryOrigin::CurrentMap);
                let _ = writeln!(out, "{id} FromCurrentMap={from_map}");
            }
            out.push_str("\n\n\n# Asset -> Dependencies\n");
            for id in graph.asset_ids().iter().filter(|id| id.starts_with(self.base_path)) {
                let _ = writeln!(out, "{id}={}", set_literal(&graph.dependencies_of(id)));
            }
            out.push_str("\n\n\n# Asset -> Referencers\n");
            for id in graph.asset_ids().iter().filter(|id| id.starts_with(self.base_path)) {
                let _ = writeln!(out, "{id}={}", set_literal(&graph.referencers_of(id)));
            }
            out.push_str("\n\n\n# Unreferenced Assets\n");
        }

        for id in self.result.unreferenced_under(self.base_path) {
            out.push_str(id);
            out.push('\n');
        }
        out
    }

    pub fn write_to(&self, path: &Path) -> Result<(), ReportError> {
        write_report(path, &self.render())?;
        tracing::info!(path = %path.display(), "wrote unreferenced asset report");
        Ok(())
    }

    /// The full result as JSON, for tooling.
    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self.result)
            .map_err(|e| ReportError::Serialization(e.to_string()))
    }
}

fn python_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// `{'a', 'b'}`, or `set()` when empty. Existing report consumers parse this shape.
fn set_literal(ids: &[&str]) -> String {
    if ids.is_empty() {
        return "set()".to_string();
    }
    let quoted: Vec<String> = ids.iter().map(|id| format!("'{id}'")).collect();
    format!("{{{}}}", quoted.join(", "))
}
