//! Food Dashboard Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod store;

use app::App;
use config::ApiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = ApiConfig::from_env();
    if let Err(err) = console_log::init_with_level(config.log_level) {
        web_sys::console::error_1(&format!("[MAIN] logger init failed: {}", err).into());
    }

    mount_to_body(move || {
        provide_context(config);
        view! { <App /> }
    });
}
