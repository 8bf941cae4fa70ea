//! Asset graph provider: the host's asset registry.

use crate::errors::GraphError;

/// Read access to the host's asset registry.
///
/// Identifiers are path-like strings (`/Game/Props/SM_Crate`). `list_assets` may
/// return object paths (`/Game/Props/SM_Crate.SM_Crate`); the collector strips
/// the trailing object name before querying edges.
pub trait AssetGraphProvider {
    /// All assets under `base_path`.
    fn list_assets(&self, base_path: &str) -> Result<Vec<String>, GraphError>;

    /// Assets that `asset` depends on.
    fn dependencies_of(&self, asset: &str) -> Result<Vec<String>, GraphError>;

    /// Assets that hold a dependency on `asset`.
    fn referencers_of(&self, asset: &str) -> Result<Vec<String>, GraphError>;

    /// Class paths of actors placed in the currently open map, if the host has one.
    fn level_actor_classes(&self) -> Result<Vec<String>, GraphError> {
        Ok(Vec::new())
    }
}
