use leptos::*;
use wasm_bindgen::prelude::*;

pub mod api;
mod app;
pub mod commands;
mod components;
pub mod config;
pub mod models;
mod poller;
pub mod state;

/// WASM entry point - called when the WASM module loads
#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logging
    _ = console_log::init_with_level(log::Level::Debug);

    let config = config::DashboardConfig::load();
    log::info!(
        "Starting Freshness Monitor for {} (api: {:?})",
        config.device_id,
        config.api_url
    );

    // Mount the app to the document body
    mount_to_body(move || view! { <app::App config=config.clone() /> });
}
