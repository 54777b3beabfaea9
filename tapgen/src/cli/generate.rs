//! Contains the logic for a formula generation run.
use colored::Colorize;
use tapgen_common::config::Config;
use tapgen_common::error::Result;
use tapgen_common::model::{ReleaseTag, ResourceTable};
use tapgen_core::render::write_formula;
use tapgen_core::{FormulaRenderer, Generator, MetadataStore};
use tapgen_net::{GitHubReleases, HttpFetcher};

use crate::cli::CliArgs;

pub async fn run(args: &CliArgs, config: &Config) -> Result<()> {
    // Reject a malformed tag before touching the resource table or the
    // network; the pipeline validates again when it builds the tag itself.
    ReleaseTag::parse(&args.version)?;

    println!(
        "{}{}",
        "==> ".bold().blue(),
        format!("Fetching SHA256 hashes for {}...", args.version).bold()
    );

    let resources = ResourceTable::load(&config.resources_path)?;
    let source = GitHubReleases::from_config(config)?;
    let fetcher = HttpFetcher::new()?;
    let generator = Generator::new(resources, source, fetcher);

    let store = MetadataStore::new(&config.metadata_path);
    let renderer = FormulaRenderer::new(&config.template_path);

    let outcome = generator.run(&args.version, &store, &renderer).await?;

    println!("{}{}", "==> ".bold().blue(), "Generating formula...".bold());
    write_formula(&config.formula_path, &outcome.formula, args.dry_run)?;
    if !args.dry_run {
        println!("Generated: {}", config.formula_path.display());
    }

    println!("{}{}", "==> ".bold().blue(), "Saving metadata...".bold());
    store.save(&outcome.metadata, args.dry_run)?;

    println!();
    println!("{}", "Formula generated successfully!".bold());
    Ok(())
}
