//! Browser smoke tests, run with `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use gloo_net::http::Method;
use musiclist_web_leptos::api::{ApiClient, LOGIN_PATH};
use musiclist_web_leptos::auth::{event_channel, LoginError, LoginFlow, SubmitState};
use musiclist_web_leptos::config::{AppConfig, LoginConfig};
use musiclist_web_leptos::models::LoginRequest;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn config_defaults_without_window_env() {
    let config = AppConfig::from_env();
    assert_eq!(config, AppConfig::default());
}

#[wasm_bindgen_test]
fn login_url_is_origin_relative_by_default() {
    let client = ApiClient::with_base_url(AppConfig::from_env().api_url);
    assert_eq!(client.url(LOGIN_PATH), "/auth/login");
}

#[wasm_bindgen_test]
fn login_request_is_json_post_to_login_endpoint() {
    let client = ApiClient::with_base_url("http://10.0.0.5:8000/");
    let request = client
        .login_request(&LoginRequest::new("a@b.com", "x"))
        .unwrap();

    assert_eq!(request.method(), Method::POST);
    assert_eq!(request.url(), "http://10.0.0.5:8000/auth/login");
    assert_eq!(
        request.headers().get("Content-Type").as_deref(),
        Some("application/json")
    );
}

#[wasm_bindgen_test]
fn login_request_defaults_to_current_origin() {
    let client = ApiClient::with_base_url(AppConfig::from_env().api_url);
    let request = client
        .login_request(&LoginRequest::new("a@b.com", "x"))
        .unwrap();

    let origin = web_sys::window().unwrap().location().origin().unwrap();
    assert_eq!(request.url(), format!("{origin}/auth/login"));
    assert_eq!(request.method(), Method::POST);
}

#[wasm_bindgen_test]
async fn unreachable_backend_is_a_transport_failure() {
    let (tx, _rx) = event_channel();
    // Port 9 (discard) is not served by the test runner
    let flow = LoginFlow::new(
        ApiClient::with_base_url("http://127.0.0.1:9"),
        LoginConfig::default(),
        tx,
    );

    let err = flow.submit("a@b.com", "x").await.unwrap_err();
    assert!(err.is_transport_failure(), "unexpected {err:?}");
    assert!(!matches!(err, LoginError::CredentialRejected { .. }));
    assert_eq!(flow.state(), SubmitState::Failed);
}
