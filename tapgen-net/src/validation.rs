use tapgen_common::error::{Result, TapError};
use url::Url;

/// Validates a URL, ensuring it uses the HTTPS scheme.
///
/// Applied to asset download URLs taken from release metadata before any
/// bytes are fetched from them.
pub fn validate_url(url_str: &str) -> Result<()> {
    let url = Url::parse(url_str)
        .map_err(|e| TapError::ValidationError(format!("Failed to parse URL '{url_str}': {e}")))?;
    if url.scheme() == "https" {
        Ok(())
    } else {
        Err(TapError::ValidationError(format!(
            "Invalid URL scheme for '{}': Must be https, but got '{}'",
            url_str,
            url.scheme()
        )))
    }
}
