// src/client/dispatch.rs

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as ReqwestClient, Method, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::error::TransportError;
use crate::response::{ApiError, ApiResponse};

/// Explicit "this request carries no body" marker for `ClientCore::request`.
pub(crate) const NO_BODY: Option<&()> = None;

/// Optional pagination for list endpoints, rendered as `$top`/`$skip`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Maximum number of items to return.
    pub top: Option<u32>,
    /// Number of items to exclude from the start of the unfiltered list.
    pub skip: Option<u32>,
}

/// Render the pagination query suffix: `$top` first, then `$skip`, each
/// omitted when absent. First parameter uses `?`, subsequent ones `&`.
pub(crate) fn query_suffix(query: Option<QueryOptions>) -> String {
    let Some(query) = query else {
        return String::new();
    };
    let mut suffix = String::new();
    let mut separator = '?';
    if let Some(top) = query.top {
        let _ = write!(suffix, "{separator}$top={top}");
        separator = '&';
    }
    if let Some(skip) = query.skip {
        let _ = write!(suffix, "{separator}$skip={skip}");
    }
    suffix
}

/// Shared handle every sub-client dispatches through: the HTTP client plus
/// the immutable base URL. This is the only state the library holds.
#[derive(Debug, Clone)]
pub(crate) struct ClientCore {
    http: ReqwestClient,
    base_url: Url,
}

impl ClientCore {
    pub(crate) fn new(http: ReqwestClient, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint_url(&self, path: &str) -> Result<Url, TransportError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}/{path}")).map_err(TransportError::UrlParse)
    }

    /// Perform one call and normalize the outcome into the envelope.
    ///
    /// The wire type `W` is the body shape as the service sends it
    /// (usually a one-field wrapper like `{"roles": [...]}`); `extract`
    /// unwraps it into the payload the caller sees. Every transport
    /// failure, 5xx fault, and deserialization failure collapses into the
    /// synthetic 500 envelope; 4xx responses resolve normally with the
    /// service's error schema passed through.
    pub(crate) async fn request<B, W, T>(
        &self,
        access_token: &str,
        method: Method,
        path: &str,
        body: Option<&B>,
        extra_headers: &[(&str, &str)],
        extract: impl FnOnce(W) -> T,
    ) -> ApiResponse<T>
    where
        B: Serialize + ?Sized,
        W: DeserializeOwned,
    {
        match self
            .try_request(access_token, method, path, body, extra_headers, extract)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    target: "access_control::client::dispatch",
                    %path,
                    error = %e,
                    "Call failed locally; returning synthetic 500 envelope"
                );
                ApiResponse::internal_server_error()
            }
        }
    }

    async fn try_request<B, W, T>(
        &self,
        access_token: &str,
        method: Method,
        path: &str,
        body: Option<&B>,
        extra_headers: &[(&str, &str)],
        extract: impl FnOnce(W) -> T,
    ) -> Result<ApiResponse<T>, TransportError>
    where
        B: Serialize + ?Sized,
        W: DeserializeOwned,
    {
        let url = self.endpoint_url(path)?;
        tracing::debug!(target: "access_control::client::dispatch", %method, %url, "Dispatching request");

        let mut request = self
            .http
            .request(method, url)
            .header(AUTHORIZATION, access_token)
            .header(CONTENT_TYPE, "application/json");
        for (name, value) in extra_headers {
            request = request.header(*name, *value);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_server_error() {
            tracing::warn!(target: "access_control::client::dispatch", %status, "Server fault");
            return Err(TransportError::ServerFault(status));
        }

        let body_text = response.text().await?;
        if body_text.trim().is_empty() {
            return Ok(ApiResponse {
                status: status.as_u16(),
                data: None,
                error: None,
            });
        }

        // The service signals domain errors with an `error` field in the
        // body; surface it verbatim regardless of the status code.
        if let Ok(wire_error) = serde_json::from_str::<WireError>(&body_text) {
            tracing::debug!(
                target: "access_control::client::dispatch",
                %status,
                code = %wire_error.error.code,
                "Service returned an error payload"
            );
            return Ok(ApiResponse {
                status: status.as_u16(),
                data: None,
                error: Some(wire_error.error),
            });
        }
        if !status.is_success() {
            // Non-2xx without a recognizable error schema still resolves.
            return Ok(ApiResponse {
                status: status.as_u16(),
                data: None,
                error: None,
            });
        }

        let wire: W = serde_json::from_str(&body_text)?;
        Ok(ApiResponse {
            status: status.as_u16(),
            data: Some(extract(wire)),
            error: None,
        })
    }
}

#[derive(Debug, Deserialize)]
struct WireError {
    error: ApiError,
}
