// src/error.rs

/// Errors that can occur while constructing an `AccessControlClient`.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Internal transport-tier failures. These never escape the public API:
/// the dispatcher collapses every variant into the synthetic
/// `{status: 500, error: InternalServerError}` envelope, logging the
/// original detail before discarding it.
#[derive(thiserror::Error, Debug)]
pub(crate) enum TransportError {
    #[error("request failed: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("response deserialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
    #[error("server fault: {0}")]
    ServerFault(reqwest::StatusCode),
}
