use std::rc::Rc;

use leptos::*;
use leptos_router::use_navigate;

use super::effects::run_login_effects;
use crate::api::ApiClient;
use crate::auth::{event_channel, LoginFlow};
use crate::config::use_app_config;
use crate::state::use_session;

/// Login form: email, masked password and a submit button
#[component]
pub fn Login() -> impl IntoView {
    let config = use_app_config();
    let (events_tx, events_rx) = event_channel();
    let flow = Rc::new(LoginFlow::new(
        ApiClient::with_base_url(config.api_url.clone()),
        config.login_config(),
        events_tx,
    ));

    spawn_local(run_login_effects(events_rx, use_session(), use_navigate()));

    let (email, set_email) = create_signal(config.prefill_email.unwrap_or_default());
    let (password, set_password) = create_signal(String::new());

    let submit = create_action(move |credentials: &(String, String)| {
        let flow = Rc::clone(&flow);
        let (email, password) = credentials.clone();
        async move { flow.submit(&email, &password).await }
    });
    let is_pending = submit.pending();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        submit.dispatch((email.get_untracked(), password.get_untracked()));
    };

    view! {
        <div class="login-container">
            <h1>"Login"</h1>
            <form on:submit=on_submit>
                <label for="email" class="login-label">"Email:"</label>
                <input
                    id="email"
                    type="text"
                    class="login-input"
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />

                <label for="password" class="login-label">"Password:"</label>
                <input
                    id="password"
                    type="password"
                    class="login-input"
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                <button
                    type="submit"
                    class="login-button"
                    disabled=move || is_pending.get()
                >
                    {move || if is_pending.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
}
