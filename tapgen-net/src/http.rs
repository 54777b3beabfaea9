use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, ACCEPT, LOCATION, USER_AGENT};
use reqwest::Client;
use tapgen_common::backend::Fetcher;
use tapgen_common::error::{Result, TapError};
use tracing::debug;
use url::Url;

pub(crate) const REQUEST_TIMEOUT_SECS: u64 = 30;
pub(crate) const CONNECT_TIMEOUT_SECS: u64 = 30;
pub(crate) const USER_AGENT_STRING: &str =
    "tapgen formula generator (Rust; +https://github.com/expresslang/homebrew-eep)";

/// Maximum number of redirect hops before a fetch is abandoned.
const MAX_REDIRECTS: usize = 10;

/// Downloads release assets over HTTP(S).
///
/// Redirects are followed by hand in a bounded loop rather than through the
/// client's redirect policy, so a cyclic or excessive redirect chain fails
/// with `TooManyRedirects` instead of looping.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, USER_AGENT_STRING.parse().unwrap());
        headers.insert(ACCEPT, "*/*".parse().unwrap());
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the full body of `url`, following up to `MAX_REDIRECTS`
    /// redirects.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let mut current = Url::parse(url).map_err(|e| {
            TapError::ValidationError(format!("Failed to parse URL '{url}': {e}"))
        })?;

        for _ in 0..=MAX_REDIRECTS {
            debug!("GET {}", current);
            let response = self.client.get(current.clone()).send().await?;
            let status = response.status();

            if status.is_success() {
                let body = response.bytes().await?;
                debug!("Fetched {} bytes from {}", body.len(), current);
                return Ok(body.to_vec());
            }

            if status.is_redirection() {
                let location = response
                    .headers()
                    .get(LOCATION)
                    .and_then(|value| value.to_str().ok())
                    .ok_or_else(|| TapError::RedirectError(current.to_string()))?
                    .to_string();
                // Relative locations resolve against the redirecting URL.
                current = current.join(&location).map_err(|e| {
                    TapError::ValidationError(format!(
                        "Invalid redirect location '{location}' from {current}: {e}"
                    ))
                })?;
                debug!("Redirected to {}", current);
                continue;
            }

            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".to_string());
            return Err(TapError::FetchError(
                status.as_u16(),
                current.to_string(),
                message,
            ));
        }

        Err(TapError::TooManyRedirects(url.to_string()))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.fetch_bytes(url).await
    }
}
