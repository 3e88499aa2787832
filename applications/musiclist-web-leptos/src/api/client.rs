use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to encode request body: {0}")]
    Encode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Status and unparsed body of an HTTP reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 200..=299
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// API client for making HTTP requests
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client for an explicit base URL; an empty base targets the current origin
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Absolute or origin-relative URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a JSON POST for an API path without sending it
    pub fn json_request<B: Serialize>(&self, path: &str, body: &B) -> Result<Request, ApiError> {
        Request::post(&self.url(path))
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))
    }

    /// Send a request and hand back the raw reply.
    ///
    /// Non-2xx statuses are not errors here; callers decide what a status means.
    pub async fn send(&self, request: Request) -> Result<RawResponse, ApiError> {
        let response = request.send().await?;

        let status = response.status();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}
