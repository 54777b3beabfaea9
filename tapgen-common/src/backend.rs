//! Seams between the generation pipeline and the outside world.
//!
//! The pipeline only ever talks to the hosting API and to asset URLs
//! through these two traits, so tests can drive it with in-memory stubs.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Release, ReleaseTag};

/// Resolves a tagged release to its asset list.
#[async_trait]
pub trait ReleaseSource {
    /// Returns the release for `tag` in `repo`, or `ReleaseNotFound`.
    async fn release_for_tag(&self, repo: &str, tag: &ReleaseTag) -> Result<Release>;
}

/// Retrieves the byte content of a URL.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
