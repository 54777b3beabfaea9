use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// URL plus digest for one fetched release asset.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IntegrityRecord {
    pub url: String,
    pub sha256: String,
}

/// The persisted metadata document.
///
/// Serialized shape keeps the repository mappings flattened next to
/// `version`, e.g.:
///
/// ```json
/// {
///   "version": "1.4.45",
///   "expresslang/eep-releases": {
///     "mac-x86-64": { "url": "...", "sha256": "..." }
///   }
/// }
/// ```
///
/// The document is loaded once per run, mutated in memory, and written back
/// wholesale. Repositories not touched by the current run are carried over
/// unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataDocument {
    #[serde(default)]
    pub version: String,
    #[serde(flatten)]
    pub resources: BTreeMap<String, BTreeMap<String, IntegrityRecord>>,
}

impl MetadataDocument {
    /// Records the integrity data for one (repository, resource) pair.
    pub fn record(&mut self, repo: &str, resource: &str, record: IntegrityRecord) {
        self.resources
            .entry(repo.to_string())
            .or_default()
            .insert(resource.to_string(), record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_flattened_repositories() {
        let mut doc = MetadataDocument {
            version: "1.4.45".to_string(),
            ..Default::default()
        };
        doc.record(
            "expresslang/eep-releases",
            "lnx-x86-64",
            IntegrityRecord {
                url: "https://example.com/eep-linux-x64".to_string(),
                sha256: "00".repeat(32),
            },
        );

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["version"], "1.4.45");
        assert_eq!(
            json["expresslang/eep-releases"]["lnx-x86-64"]["url"],
            "https://example.com/eep-linux-x64"
        );
    }

    #[test]
    fn round_trips_through_json() {
        let mut doc = MetadataDocument {
            version: "0.1.0".to_string(),
            ..Default::default()
        };
        doc.record(
            "expresslang/eep-releases",
            "mac-x86-64",
            IntegrityRecord {
                url: "https://example.com/eep-macos-10.11-x64".to_string(),
                sha256: "ab".repeat(32),
            },
        );

        let json = serde_json::to_string_pretty(&doc).unwrap();
        let parsed: MetadataDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn missing_version_defaults_to_empty() {
        let parsed: MetadataDocument = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.version, "");
        assert!(parsed.resources.is_empty());
    }
}
