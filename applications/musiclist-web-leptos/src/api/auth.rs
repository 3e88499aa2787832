use async_trait::async_trait;
use gloo_net::http::Request;

use super::client::{ApiClient, ApiError, RawResponse};
use crate::models::LoginRequest;

/// Path of the login endpoint relative to the API base URL
pub const LOGIN_PATH: &str = "/auth/login";

/// Sends login requests to the authentication endpoint.
///
/// Implementations report only whether a reply arrived; classifying the status
/// and body is left to the caller.
#[async_trait(?Send)]
pub trait AuthTransport {
    async fn send_login(&self, request: &LoginRequest) -> Result<RawResponse, ApiError>;
}

impl ApiClient {
    /// The POST that carries credentials to the login endpoint
    pub fn login_request(&self, request: &LoginRequest) -> Result<Request, ApiError> {
        self.json_request(LOGIN_PATH, request)
    }

    /// POST credentials to the login endpoint
    pub async fn login(&self, request: &LoginRequest) -> Result<RawResponse, ApiError> {
        self.send(self.login_request(request)?).await
    }
}

#[async_trait(?Send)]
impl AuthTransport for ApiClient {
    async fn send_login(&self, request: &LoginRequest) -> Result<RawResponse, ApiError> {
        self.login(request).await
    }
}
