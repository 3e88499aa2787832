//! Side effects requested by a login flow, delivered over a channel so the
//! flow itself never touches the browser.

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};

pub type EventSender = UnboundedSender<LoginEvent>;
pub type EventReceiver = UnboundedReceiver<LoginEvent>;

/// Create a connected event sender/receiver pair
pub fn event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// A message for the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginEvent {
    Notify(Notice),
    /// The backend accepted the credentials for this user
    SignedIn { username: String },
    Navigate { to: String },
    /// Reset the login view by reloading the page
    Reload,
}
