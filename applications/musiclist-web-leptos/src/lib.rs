use leptos::*;
use wasm_bindgen::prelude::*;

pub mod api;
mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod models;
pub mod state;

/// WASM entry point - called when the WASM module loads
#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = config::AppConfig::from_env();

    // Initialize logging
    _ = console_log::init_with_level(config.log_level);

    log::info!("Starting MusicList login");

    // Mount the app to the document body
    mount_to_body(move || view! { <app::App config=config.clone() /> });
}
