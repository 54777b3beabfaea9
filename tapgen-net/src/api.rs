// tapgen-net/src/api.rs
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, StatusCode};
use tapgen_common::backend::ReleaseSource;
use tapgen_common::config::Config;
use tapgen_common::error::{Result, TapError};
use tapgen_common::model::{Release, ReleaseTag};
use tracing::{debug, error};

use crate::http::{CONNECT_TIMEOUT_SECS, REQUEST_TIMEOUT_SECS, USER_AGENT_STRING};

/// Client for the release-hosting API (api.github.com by default).
pub struct GitHubReleases {
    client: Client,
    base_url: String,
}

impl GitHubReleases {
    /// Builds a client for `base_url`, attaching `token` as a bearer
    /// credential when provided.
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, USER_AGENT_STRING.parse().unwrap());
        headers.insert(ACCEPT, "application/vnd.github+json".parse().unwrap());

        if let Some(token) = token {
            debug!("Adding API token to request headers.");
            let value = format!("Bearer {token}").parse().map_err(|e| {
                TapError::Config(format!(
                    "Failed to parse API token into header value: {e}"
                ))
            })?;
            headers.insert(AUTHORIZATION, value);
        } else {
            debug!("No API token provided; requests are unauthenticated.");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_base_url, config.github_api_token.as_deref())
    }

    /// Looks up the release tagged `tag` in `repo` and returns its asset
    /// list.
    pub async fn release_for_tag(&self, repo: &str, tag: &ReleaseTag) -> Result<Release> {
        let url = format!(
            "{}/repos/{}/releases/tags/{}",
            self.base_url,
            repo,
            tag.as_str()
        );
        debug!("Fetching release metadata from {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!("HTTP request failed for {}: {}", url, e);
            TapError::Http(Arc::new(e))
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(TapError::ReleaseNotFound(
                repo.to_string(),
                tag.as_str().to_string(),
            ));
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("(Failed to read response body: {e})"));
            error!("HTTP {} from {}: {}", status, url, body);
            return Err(TapError::ApiRequestError(format!(
                "HTTP status {status} from {url}. Response body: {body}"
            )));
        }

        response
            .json::<Release>()
            .await
            .map_err(|e| TapError::Http(Arc::new(e)))
    }
}

#[async_trait]
impl ReleaseSource for GitHubReleases {
    async fn release_for_tag(&self, repo: &str, tag: &ReleaseTag) -> Result<Release> {
        GitHubReleases::release_for_tag(self, repo, tag).await
    }
}
