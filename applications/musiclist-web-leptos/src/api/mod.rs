pub mod auth;
pub mod client;

pub use auth::{AuthTransport, LOGIN_PATH};
pub use client::{ApiClient, ApiError, RawResponse};
