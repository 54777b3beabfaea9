// src/model/mod.rs
// Declares the modules within the model directory.
pub mod metadata;
pub mod release;
pub mod resource;
pub mod version;

// Re-export
pub use metadata::{IntegrityRecord, MetadataDocument};
pub use release::{Asset, Release};
pub use resource::{ResourceKind, ResourceSpec, ResourceTable};
pub use version::ReleaseTag;
