use thiserror::Error;

/// Failure of a catalog request.
///
/// Cloneable so a single failure can be handed to every caller that was
/// waiting on the same in-flight request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("invalid API key")]
    InvalidApiKey,

    #[error("not found")]
    NotFound,

    #[error("rate limited")]
    RateLimited,

    #[error("failed to decode catalog response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CatalogError::Decode(err.to_string())
        } else {
            CatalogError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
