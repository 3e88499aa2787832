use thiserror::Error;

use crate::api::ApiError;

/// Why a login submission did not succeed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// Any non-2xx reply; status and body are kept for diagnostics only
    #[error("Login rejected with HTTP {status}: {payload}")]
    CredentialRejected {
        status: u16,
        detail: Option<String>,
        /// Rejection body as received, re-serialised from its JSON
        payload: String,
    },
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Unreadable response (HTTP {status}): {message}")]
    InvalidResponse { status: u16, message: String },
    #[error("A login request is already in flight")]
    AlreadySubmitting,
}

impl LoginError {
    /// The request or its reply could not be used at all
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            LoginError::Transport(_) | LoginError::InvalidResponse { .. }
        )
    }
}

impl From<ApiError> for LoginError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network(message) | ApiError::Encode(message) => {
                LoginError::Transport(message)
            }
        }
    }
}
