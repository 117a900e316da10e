// src/response.rs

use serde::{Deserialize, Serialize};

/// Uniform envelope returned by every client call.
///
/// Domain errors (4xx) are never surfaced as `Err`; they arrive here with
/// `data: None` and `error` populated verbatim from the service's error
/// schema. Transport failures and server faults are collapsed into a
/// synthetic 500 envelope before reaching the caller.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// HTTP status code of the response (500 when synthesized locally).
    pub status: u16,
    /// Payload on success; `None` on error responses and empty bodies.
    pub data: Option<T>,
    /// Error schema passed through from the service, when present.
    pub error: Option<ApiError>,
}

impl<T> ApiResponse<T> {
    /// The single locally-synthesized failure shape. Every transport
    /// failure, 5xx fault, and deserialization failure maps to this.
    pub(crate) fn internal_server_error() -> Self {
        Self {
            status: 500,
            data: None,
            error: Some(ApiError {
                code: "InternalServerError".to_string(),
                message: "An internal exception happened while calling the service".to_string(),
                details: None,
                target: None,
            }),
        }
    }
}

/// Error payload mirroring the remote service's error schema verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ApiErrorDetail>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}
