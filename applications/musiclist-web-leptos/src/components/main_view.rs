use leptos::*;
use leptos_router::*;

use crate::state::use_session;

/// Destination after a successful login
#[component]
pub fn MainView() -> impl IntoView {
    let username = use_session().and_then(|session| session.username.get_untracked());

    match username {
        Some(username) => view! {
            <div class="main-container">
                <h1>"Music List"</h1>
                <p class="welcome">"Signed in as " {username}</p>
            </div>
        }
        .into_view(),
        None => view! { <Redirect path="/" /> }.into_view(),
    }
}
