//! Food Card Component
//!
//! A single plate in the dashboard list.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use food_core::FoodPlate;

use crate::components::DeleteConfirmButton;
use crate::store::{store_food, use_dashboard_store};

/// One plate with its availability switch and edit/delete actions.
///
/// The availability flip is computed here; the dashboard only persists
/// the record it is handed. The switch always shows the mirrored value,
/// so a refused toggle snaps back.
#[component]
pub fn FoodCard(
    food: FoodPlate,
    #[prop(into)] on_edit: Callback<FoodPlate>,
    #[prop(into)] on_delete: Callback<u32>,
    #[prop(into)] on_toggle_availability: Callback<FoodPlate>,
) -> impl IntoView {
    let id = food.id;
    let available = food.available;
    let edit_food = food.clone();
    let toggle_food = food.clone();

    let store = use_dashboard_store();
    let is_available = move || store_food(&store, id).map_or(available, |f| f.available);

    view! {
        <div
            class={if available { "food-card" } else { "food-card unavailable" }}
            data-testid=format!("food-{}", id)
        >
            <header>
                <img src=food.image.clone() alt=food.name.clone() />
            </header>
            <section class="food-body">
                <h2>{food.name.clone()}</h2>
                <p>{food.description.clone()}</p>
                <p class="price">"R$ " <b>{food.price.clone()}</b></p>
            </section>
            <section class="food-footer">
                <div class="icon-container">
                    <button
                        type="button"
                        class="icon edit-btn"
                        data-testid=format!("edit-food-{}", id)
                        on:click=move |_| on_edit.run(edit_food.clone())
                    >
                        "Edit"
                    </button>
                    <DeleteConfirmButton
                        button_class="icon delete-btn"
                        plate_name=food.name.clone()
                        on_confirm=move |_: ()| on_delete.run(id)
                    />
                </div>
                <div class="availability-container">
                    <p>{move || if is_available() { "Available" } else { "Unavailable" }}</p>
                    <label class="switch">
                        <input
                            type="checkbox"
                            prop:checked=is_available
                            data-testid=format!("change-status-food-{}", id)
                            on:change=move |ev| {
                                let Some(input) = ev
                                    .target()
                                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                                else {
                                    return;
                                };
                                let requested = input.checked();
                                // stays on the mirrored value until the server echo lands
                                input.set_checked(!requested);
                                on_toggle_availability.run(toggle_food.with_availability(requested));
                            }
                        />
                        <span class="slider"></span>
                    </label>
                </div>
            </section>
        </div>
    }
}
