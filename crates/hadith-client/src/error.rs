//! Error types for the client.

use hadith_core::normalizer::NormalizeError;
use hyper::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid base URL {url:?}: {reason}")]
    BaseUrl { url: String, reason: String },
    #[error("invalid request URI: {0}")]
    Uri(#[from] hyper::http::uri::InvalidUri),
    #[error("HTTP error: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),
    #[error("error reading response body: {0}")]
    Body(#[from] hyper::Error),
    #[error("server returned {0}")]
    Status(StatusCode),
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unexpected response: {0}")]
    Malformed(#[from] NormalizeError),
    #[error("request timed out after {0:?}")]
    Timeout(std::time::Duration),
}
