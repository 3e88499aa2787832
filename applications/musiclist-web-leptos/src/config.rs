//! Runtime configuration injected by the hosting page through `window.ENV`

use leptos::{provide_context, use_context};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Route of the view shown after a successful login
pub const MAIN_ROUTE: &str = "/main";

/// Values read from window.ENV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the authentication backend, empty for a co-located backend
    pub api_url: String,
    /// Optional email shown in the login form on first render
    pub prefill_email: Option<String>,
    /// Reload the login view after the backend rejects the credentials
    pub reload_on_reject: bool,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            prefill_email: None,
            reload_on_reject: false,
            log_level: log::Level::Debug,
        }
    }
}

impl AppConfig {
    /// Load configuration from window.ENV, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(read_env_var)
    }

    /// Build configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            api_url: non_empty("API_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            prefill_email: non_empty("LOGIN_PREFILL_EMAIL"),
            reload_on_reject: non_empty("RELOAD_ON_REJECT")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.reload_on_reject),
            log_level: non_empty("LOG_LEVEL")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }

    /// Options for the login flow derived from this configuration
    pub fn login_config(&self) -> LoginConfig {
        LoginConfig::default().with_reload_on_reject(self.reload_on_reject)
    }
}

/// Behaviour knobs of a login flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginConfig {
    /// Route navigated to after a successful login
    pub main_route: String,
    pub reload_on_reject: bool,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            main_route: MAIN_ROUTE.to_string(),
            reload_on_reject: false,
        }
    }
}

impl LoginConfig {
    pub fn with_main_route(mut self, route: impl Into<String>) -> Self {
        self.main_route = route.into();
        self
    }

    pub fn with_reload_on_reject(mut self, reload: bool) -> Self {
        self.reload_on_reject = reload;
        self
    }
}

/// Share the configuration parsed at startup with every component below
pub fn provide_app_config(config: AppConfig) {
    provide_context(config);
}

/// Configuration provided at the app root, read from window.ENV if none was
pub fn use_app_config() -> AppConfig {
    resolve_app_config(use_context::<AppConfig>())
}

fn resolve_app_config(provided: Option<AppConfig>) -> AppConfig {
    provided.unwrap_or_else(AppConfig::from_env)
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Read a string property of window.ENV
fn read_env_var(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let env = js_sys::Reflect::get(&window, &JsValue::from_str("ENV")).ok()?;
        if env.is_undefined() || env.is_null() {
            return None;
        }
        let value = js_sys::Reflect::get(&env, &JsValue::from_str(key)).ok()?;
        // Booleans are accepted for flags written as `RELOAD_ON_REJECT: true`
        value
            .as_string()
            .or_else(|| value.as_bool().map(|b| b.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}
