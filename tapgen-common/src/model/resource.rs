use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TapError};

/// How a resource is obtained from its repository.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    #[serde(rename = "release-artifact")]
    ReleaseArtifact,
}

/// One named resource inside a repository's releases.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResourceSpec {
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    /// Glob-style asset filename pattern; `*` matches zero or more characters.
    pub pattern: String,
}

/// Repository identifier -> resource name -> spec.
///
/// Loaded from a JSON file so new resource groups do not require a code
/// change.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceTable(pub BTreeMap<String, BTreeMap<String, ResourceSpec>>);

impl ResourceTable {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            TapError::Config(format!(
                "Failed to read resource table {}: {}",
                path.display(),
                e
            ))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            TapError::Config(format!(
                "Failed to parse resource table {}: {}",
                path.display(),
                e
            ))
        })
    }

    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&String, &BTreeMap<String, ResourceSpec>)> {
        self.0.iter()
    }
}
