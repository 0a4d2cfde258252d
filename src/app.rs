//! Food Dashboard App
//!
//! Root component: builds the HTTP client from config and mounts the dashboard.

use leptos::prelude::*;

use crate::commands::HttpFoodStore;
use crate::components::Dashboard;
use crate::config::ApiConfig;

#[component]
pub fn App() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    log::info!("[APP] using food API at {}", config.base_url);
    let api = HttpFoodStore::new(config);

    view! {
        <main class="app-layout">
            <Dashboard api=api />
        </main>
    }
}
