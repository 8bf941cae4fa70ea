//! Serializable object snapshots.
//!
//! `AssetObject` is how objects reach the validator outside the editor: a
//! JSON manifest of name, path, type, editor properties and the runtime
//! parent chain.

use std::collections::BTreeMap;

use keeper_core::traits::ObjectView;
use serde::{Deserialize, Serialize};

/// A plain-data object implementing [`ObjectView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetObject {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<AssetObject>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blueprint_parent: Option<String>,
}

impl AssetObject {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            type_name: type_name.into(),
            properties: BTreeMap::new(),
            parent: None,
            blueprint_parent: None,
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn with_parent(mut self, parent: AssetObject) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    pub fn with_blueprint_parent(mut self, type_name: impl Into<String>) -> Self {
        self.blueprint_parent = Some(type_name.into());
        self
    }

    /// Parse a manifest: a JSON array of objects.
    pub fn list_from_json(json: &str) -> Result<Vec<AssetObject>, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl ObjectView for AssetObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    fn parent(&self) -> Option<&dyn ObjectView> {
        self.parent.as_deref().map(|p| p as &dyn ObjectView)
    }

    fn blueprint_parent(&self) -> Option<&str> {
        self.blueprint_parent.as_deref()
    }
}
