//! Header Component
//!
//! Title bar with the button that opens the add-plate modal.

use leptos::prelude::*;

use crate::context::use_dashboard;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_dashboard();

    view! {
        <header class="dashboard-header">
            <h1>"GoRestaurant"</h1>
            <button
                type="button"
                class="new-plate-btn"
                aria-expanded=move || ctx.is_modal_open().to_string()
                on:click=move |_| ctx.toggle_modal()
            >
                "New plate"
            </button>
        </header>
    }
}
