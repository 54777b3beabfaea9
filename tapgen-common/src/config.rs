// tapgen-common/src/config.rs
use std::env;
use std::path::PathBuf;

use tracing::debug;

const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
const DEFAULT_METADATA_PATH: &str = "formula-metadata.json";
const DEFAULT_RESOURCES_PATH: &str = "resources.json";
const DEFAULT_TEMPLATE_PATH: &str = "templates/eep.rb.tera";
const DEFAULT_FORMULA_PATH: &str = "Formula/eep.rb";

/// Process configuration for one generator run.
///
/// The access token is read here, once, and handed explicitly to the API
/// client so nothing else touches process environment state.
#[derive(Debug, Clone)]
pub struct Config {
    pub github_api_token: Option<String>,
    pub api_base_url: String,
    pub metadata_path: PathBuf,
    pub resources_path: PathBuf,
    pub template_path: PathBuf,
    pub formula_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        debug!("Loading tapgen configuration");

        let github_api_token = env::var("GITHUB_TOKEN").ok().filter(|s| !s.is_empty());
        if github_api_token.is_none() {
            debug!("GITHUB_TOKEN not set; release API calls will be unauthenticated");
        }

        let api_base_url = env::var("TAPGEN_API_BASE")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        debug!("Release API base URL: {}", api_base_url);

        Self {
            github_api_token,
            api_base_url,
            metadata_path: PathBuf::from(DEFAULT_METADATA_PATH),
            resources_path: PathBuf::from(DEFAULT_RESOURCES_PATH),
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            formula_path: PathBuf::from(DEFAULT_FORMULA_PATH),
        }
    }
}
