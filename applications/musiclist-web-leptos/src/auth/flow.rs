//! Credential submission: one request per submit, classified into success,
//! rejection or transport failure.

use std::cell::Cell;

use super::error::LoginError;
use super::events::{EventSender, LoginEvent, Notice};
use crate::api::{AuthTransport, RawResponse};
use crate::config::LoginConfig;
use crate::models::{rejection_detail, LoginRequest, LoginResponse};

pub const REJECTED_TEXT: &str = "Login failed: email or password is incorrect, please try again.";
pub const NETWORK_ERROR_TEXT: &str =
    "Network error: the login service could not be reached. Check the backend URL.";

/// Progress of the most recent submission
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Classify a reply from the login endpoint.
///
/// The body must be JSON whatever the status. Every non-2xx status counts as
/// rejected credentials; a 2xx reply must carry a `username`.
pub fn interpret(reply: &RawResponse) -> Result<LoginResponse, LoginError> {
    let status = reply.status;
    let invalid = |e: serde_json::Error| LoginError::InvalidResponse {
        status,
        message: e.to_string(),
    };

    let body: serde_json::Value = serde_json::from_str(&reply.body).map_err(invalid)?;

    if !reply.is_success() {
        return Err(LoginError::CredentialRejected {
            status,
            detail: rejection_detail(&body),
            payload: body.to_string(),
        });
    }

    serde_json::from_value(body).map_err(invalid)
}

/// Sets the final state when a submission ends, or back to idle if it is abandoned
struct InFlight<'a> {
    state: &'a Cell<SubmitState>,
    settled: SubmitState,
}

impl<'a> InFlight<'a> {
    fn begin(state: &'a Cell<SubmitState>) -> Self {
        state.set(SubmitState::Submitting);
        Self {
            state,
            settled: SubmitState::Idle,
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.state.set(self.settled);
    }
}

/// Login flow shared by every login view
pub struct LoginFlow<T> {
    transport: T,
    config: LoginConfig,
    events: EventSender,
    state: Cell<SubmitState>,
}

impl<T: AuthTransport> LoginFlow<T> {
    pub fn new(transport: T, config: LoginConfig, events: EventSender) -> Self {
        Self {
            transport,
            config,
            events,
            state: Cell::new(SubmitState::Idle),
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state.get()
    }

    /// Submit credentials once.
    ///
    /// Returns `AlreadySubmitting` without side effects while another
    /// submission of this flow is in flight.
    pub async fn submit(&self, email: &str, password: &str) -> Result<LoginResponse, LoginError> {
        if self.state.get() == SubmitState::Submitting {
            log::debug!("Ignoring login submit while a request is in flight");
            return Err(LoginError::AlreadySubmitting);
        }

        let mut in_flight = InFlight::begin(&self.state);
        let request = LoginRequest::new(email, password);

        let result = match self.transport.send_login(&request).await {
            Ok(reply) => interpret(&reply),
            Err(err) => Err(err.into()),
        };

        match &result {
            Ok(response) => {
                self.on_success(response);
                in_flight.settled = SubmitState::Succeeded;
            }
            Err(err) => {
                self.on_failure(err);
                in_flight.settled = SubmitState::Failed;
            }
        }

        result
    }

    fn on_success(&self, response: &LoginResponse) {
        log::info!("Login response: {:?}", response);

        self.emit(LoginEvent::Notify(Notice::success(format!(
            "Login success! Welcome {}",
            response.username
        ))));
        self.emit(LoginEvent::SignedIn {
            username: response.username.clone(),
        });
        self.emit(LoginEvent::Navigate {
            to: self.config.main_route.clone(),
        });
    }

    fn on_failure(&self, err: &LoginError) {
        match err {
            LoginError::CredentialRejected {
                status, payload, ..
            } => {
                log::error!("Login failed (HTTP {}): {}", status, payload);
                self.emit(LoginEvent::Notify(Notice::error(REJECTED_TEXT)));
                if self.config.reload_on_reject {
                    self.emit(LoginEvent::Reload);
                }
            }
            LoginError::Transport(_) | LoginError::InvalidResponse { .. } => {
                log::error!("Login request failed: {}", err);
                self.emit(LoginEvent::Notify(Notice::warning(NETWORK_ERROR_TEXT)));
            }
            LoginError::AlreadySubmitting => {}
        }
    }

    fn emit(&self, event: LoginEvent) {
        if self.events.unbounded_send(event).is_err() {
            log::debug!("Login event dropped, no listener");
        }
    }
}
