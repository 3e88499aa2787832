//! Browser side of the login event channel

use futures::StreamExt;
use leptos_router::NavigateOptions;

use crate::auth::{EventReceiver, LoginEvent, Notice, NoticeLevel};
use crate::state::SessionContext;

/// Apply login events until every sender is gone
pub async fn run_login_effects<N>(
    mut events: EventReceiver,
    session: Option<SessionContext>,
    navigate: N,
) where
    N: Fn(&str, NavigateOptions),
{
    while let Some(event) = events.next().await {
        match event {
            LoginEvent::Notify(notice) => notify(&notice),
            LoginEvent::SignedIn { username } => {
                if let Some(session) = session {
                    session.sign_in(username);
                }
            }
            LoginEvent::Navigate { to } => navigate(&to, NavigateOptions::default()),
            LoginEvent::Reload => reload(),
        }
    }
}

/// Blocking alert, mirrored to the console
fn notify(notice: &Notice) {
    match notice.level {
        NoticeLevel::Success => log::info!("{}", notice.text),
        NoticeLevel::Warning => log::warn!("{}", notice.text),
        NoticeLevel::Error => log::error!("{}", notice.text),
    }

    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&notice.text);
    }
}

fn reload() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::error!("Failed to reload login view: {:?}", e);
        }
    }
}
