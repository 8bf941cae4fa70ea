//! Reading and writing the three graph cache files.

use std::path::Path;

use keeper_core::errors::CacheError;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::graph::{AssetGraph, ReferenceMap};

pub const REFERENCERS_FILE: &str = "referencers.json";
pub const DEPENDENCIES_FILE: &str = "dependencies.json";
pub const ACTOR_CLASSES_FILE: &str = "actor_classes.json";

/// In-memory form of the graph cache.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphCache {
    pub referencers: ReferenceMap,
    pub dependencies: ReferenceMap,
    pub actor_classes: Vec<String>,
}

impl GraphCache {
    /// Snapshot a collected graph.
    pub fn from_graph(graph: &AssetGraph, actor_classes: &[String]) -> Self {
        let mut actor_classes = actor_classes.to_vec();
        actor_classes.sort();
        actor_classes.dedup();
        Self {
            referencers: graph.referencer_map(),
            dependencies: graph.dependency_map(),
            actor_classes,
        }
    }

    /// Rebuild the asset graph the cache describes.
    pub fn to_graph(&self) -> AssetGraph {
        AssetGraph::from_maps(&self.referencers, &self.dependencies)
    }

    /// Write all three files into `dir`, creating it if needed. Output is
    /// sorted so caches diff cleanly.
    pub fn save(&self, dir: &Path) -> Result<(), CacheError> {
        std::fs::create_dir_all(dir).map_err(|e| CacheError::WriteFailed {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
        write_json(&dir.join(REFERENCERS_FILE), &self.referencers)?;
        write_json(&dir.join(DEPENDENCIES_FILE), &self.dependencies)?;
        write_json(&dir.join(ACTOR_CLASSES_FILE), &self.actor_classes)?;
        tracing::debug!(dir = %dir.display(), assets = self.referencers.len(), "graph cache saved");
        Ok(())
    }

    /// Read the cache from `dir`. The actor class list is optional; both maps
    /// are required.
    pub fn load(dir: &Path) -> Result<Self, CacheError> {
        let referencers: ReferenceMap = read_json(&dir.join(REFERENCERS_FILE))?;
        let dependencies: ReferenceMap = read_json(&dir.join(DEPENDENCIES_FILE))?;
        let actors_path = dir.join(ACTOR_CLASSES_FILE);
        let actor_classes: Vec<String> = if actors_path.exists() {
            read_json(&actors_path)?
        } else {
            Vec::new()
        };
        tracing::debug!(dir = %dir.display(), assets = referencers.len(), "graph cache loaded");
        Ok(Self {
            referencers,
            dependencies,
            actor_classes,
        })
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), CacheError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| CacheError::WriteFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    std::fs::write(path, json).map_err(|e| CacheError::WriteFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CacheError> {
    let content = std::fs::read_to_string(path).map_err(|_| CacheError::NotFound {
        path: path.display().to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| CacheError::Malformed {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
