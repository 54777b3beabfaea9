// tapgen-core/src/metadata.rs
use std::path::PathBuf;

use tapgen_common::error::{Result, TapError};
use tapgen_common::model::MetadataDocument;
use tracing::debug;

/// Loads and persists the metadata document at a fixed path.
pub struct MetadataStore {
    path: PathBuf,
}

impl MetadataStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the document, or returns an empty one if the file does not
    /// exist yet. A file that exists but does not parse is an error; a
    /// half-trusted metadata file must never be silently replaced.
    pub fn load(&self) -> Result<MetadataDocument> {
        if !self.path.exists() {
            debug!(
                "Metadata file {} not found, starting from an empty document",
                self.path.display()
            );
            return Ok(MetadataDocument::default());
        }
        tapgen_aio::json_io::read_json(&self.path).map_err(|e| {
            TapError::CorruptMetadata(self.path.display().to_string(), e.to_string())
        })
    }

    /// Persists the document atomically, or prints it in dry-run mode.
    pub fn save(&self, doc: &MetadataDocument, dry_run: bool) -> Result<()> {
        if dry_run {
            println!();
            println!("--- {} (DRY RUN) ---", self.path.display());
            println!("```json");
            println!("{}", serde_json::to_string_pretty(doc)?);
            println!("```");
            println!("--- END {} ---", self.path.display());
            return Ok(());
        }
        tapgen_aio::json_io::write_json(&self.path, doc)
    }
}

#[cfg(test)]
mod tests {
    use tapgen_common::model::IntegrityRecord;

    use super::*;

    fn sample_doc() -> MetadataDocument {
        let mut doc = MetadataDocument {
            version: "1.4.45".to_string(),
            ..Default::default()
        };
        doc.record(
            "expresslang/eep-releases",
            "lnx-x86-64",
            IntegrityRecord {
                url: "https://example.com/eep-linux-x64".to_string(),
                sha256: "0f".repeat(32),
            },
        );
        doc
    }

    #[test]
    fn load_of_missing_file_is_an_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = MetadataStore::new(dir.path().join("formula-metadata.json"));
        assert_eq!(store.load().unwrap(), MetadataDocument::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = MetadataStore::new(dir.path().join("formula-metadata.json"));
        let doc = sample_doc();

        store.save(&doc, false).unwrap();
        assert_eq!(store.load().unwrap(), doc);
    }

    #[test]
    fn load_of_invalid_json_is_corrupt_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("formula-metadata.json");
        std::fs::write(&path, "{ definitely not json").unwrap();

        let err = MetadataStore::new(&path).load().unwrap_err();
        assert!(matches!(err, TapError::CorruptMetadata(_, _)), "got {err}");
    }

    #[test]
    fn dry_run_save_never_touches_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("formula-metadata.json");
        let store = MetadataStore::new(&path);

        store.save(&sample_doc(), true).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn dry_run_save_preserves_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("formula-metadata.json");
        std::fs::write(&path, "{\"version\": \"0.0.1\"}").unwrap();
        let store = MetadataStore::new(&path);

        store.save(&sample_doc(), true).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "{\"version\": \"0.0.1\"}");
    }
}
