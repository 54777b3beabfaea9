// tapgen-core/src/generate.rs
use tapgen_common::backend::{Fetcher, ReleaseSource};
use tapgen_common::error::Result;
use tapgen_common::model::{IntegrityRecord, MetadataDocument, ReleaseTag, ResourceTable};
use tapgen_net::validation::validate_url;
use tracing::debug;

use crate::matcher::find_asset;
use crate::metadata::MetadataStore;
use crate::render::FormulaRenderer;

/// Everything one successful run produces. Persistence is left to the
/// caller so a dry run can inspect the outcome without touching disk.
#[derive(Debug)]
pub struct GenerateOutcome {
    pub metadata: MetadataDocument,
    pub formula: String,
}

/// The generation pipeline: resolve the tagged release for each configured
/// repository, match and fetch each resource's asset, record its digest,
/// and render the formula from the updated document.
///
/// Any failure aborts the whole run; no partial state escapes.
pub struct Generator<S, F> {
    resources: ResourceTable,
    source: S,
    fetcher: F,
}

impl<S: ReleaseSource, F: Fetcher> Generator<S, F> {
    pub fn new(resources: ResourceTable, source: S, fetcher: F) -> Self {
        Self {
            resources,
            source,
            fetcher,
        }
    }

    pub async fn run(
        &self,
        version: &str,
        store: &MetadataStore,
        renderer: &FormulaRenderer,
    ) -> Result<GenerateOutcome> {
        // Validated before any file or network access.
        let tag = ReleaseTag::parse(version)?;

        let mut doc = store.load()?;
        doc.version = tag.bare_version().to_string();

        for (repo, resources) in self.resources.iter() {
            debug!("Processing {}", repo);
            let release = self.source.release_for_tag(repo, &tag).await?;

            for (name, spec) in resources {
                debug!("Processing resource: {}", name);
                let asset = find_asset(&spec.pattern, tag.as_str(), &release.assets)?;

                validate_url(&asset.browser_download_url)?;
                debug!("Downloading from {}", asset.browser_download_url);
                let content = self.fetcher.fetch(&asset.browser_download_url).await?;

                let digest = tapgen_aio::checksum::sha256_hex(&content);
                debug!("SHA256: {}", digest);
                doc.record(
                    repo,
                    name,
                    IntegrityRecord {
                        url: asset.browser_download_url.clone(),
                        sha256: digest,
                    },
                );
            }
        }

        let formula = renderer.render(&doc)?;
        Ok(GenerateOutcome {
            metadata: doc,
            formula,
        })
    }
}
