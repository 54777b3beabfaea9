// tapgen-core/src/render.rs
use std::path::{Path, PathBuf};

use tapgen_common::error::{Result, TapError};
use tapgen_common::model::MetadataDocument;
use tera::{Context, Tera};
use tracing::debug;

/// Renders the formula template against a metadata document.
///
/// The template sees two values: `version` (the bare version string) and
/// `resources` (repository -> resource name -> `{url, sha256}`). Any
/// reference to a field that is not present fails the render.
pub struct FormulaRenderer {
    template_path: PathBuf,
}

impl FormulaRenderer {
    pub fn new(template_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
        }
    }

    pub fn render(&self, doc: &MetadataDocument) -> Result<String> {
        if !self.template_path.is_file() {
            return Err(TapError::TemplateNotFound(
                self.template_path.display().to_string(),
            ));
        }
        debug!("Rendering template {}", self.template_path.display());

        let raw = tapgen_aio::fs::read_to_string(&self.template_path)?;
        let mut tera = Tera::default();
        tera.add_raw_template("formula", &raw)?;

        let mut context = Context::new();
        context.insert("version", &doc.version);
        context.insert("resources", &doc.resources);

        tera.render("formula", &context).map_err(TapError::from)
    }
}

/// Writes rendered formula text, creating parent directories as needed.
/// In dry-run mode the text is printed instead.
pub fn write_formula(path: &Path, content: &str, dry_run: bool) -> Result<()> {
    if dry_run {
        println!();
        println!("--- {} (DRY RUN) ---", path.display());
        println!("{content}");
        println!("--- END {} ---", path.display());
        return Ok(());
    }
    tapgen_aio::fs::atomic_write_file(path, content.as_bytes())
}
