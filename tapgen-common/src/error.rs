use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum TapError {
    #[error("I/O Error: {0}")]
    Io(#[from] Arc<std::io::Error>),

    #[error("HTTP Request Error: {0}")]
    Http(#[from] Arc<reqwest::Error>),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] Arc<serde_json::Error>),

    #[error("Template Error: {0}")]
    Template(#[from] Arc<tera::Error>),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("API Request Error: {0}")]
    ApiRequestError(String),

    #[error("Version '{0}' must match pattern 'vX.Y.Z'")]
    InvalidVersion(String),

    #[error("Release not found for {0} at tag {1}")]
    ReleaseNotFound(String, String),

    #[error("Asset matching '{0}' not found in release {1}")]
    AssetNotFound(String, String),

    #[error("Pattern '{0}' matches more than one asset: {1}")]
    AmbiguousAsset(String, String),

    #[error("FetchError: HTTP {0} for '{1}': {2}")]
    FetchError(u16, String, String),

    #[error("Redirect from '{0}' without a Location header")]
    RedirectError(String),

    #[error("Too many redirects while fetching '{0}'")]
    TooManyRedirects(String),

    #[error("Corrupt metadata file {0}: {1}")]
    CorruptMetadata(String, String),

    #[error("Template file {0} not found")]
    TemplateNotFound(String),

    #[error("Validation Error: {0}")]
    ValidationError(String),

    #[error("IoError: {0}")]
    IoError(String),
}

impl From<std::io::Error> for TapError {
    fn from(err: std::io::Error) -> Self {
        TapError::Io(Arc::new(err))
    }
}

impl From<reqwest::Error> for TapError {
    fn from(err: reqwest::Error) -> Self {
        TapError::Http(Arc::new(err))
    }
}

impl From<serde_json::Error> for TapError {
    fn from(err: serde_json::Error) -> Self {
        TapError::Json(Arc::new(err))
    }
}

impl From<tera::Error> for TapError {
    fn from(err: tera::Error) -> Self {
        TapError::Template(Arc::new(err))
    }
}

pub type Result<T> = std::result::Result<T, TapError>;
