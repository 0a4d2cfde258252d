//! Dashboard Component
//!
//! Lists the plates from `/foods` and wires the add, update, delete and
//! availability commands to the local mirror. Modal forms are supplied by
//! the caller as children and reach the commands through
//! [`DashboardContext`].

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use food_core::{handlers, FoodDraft, FoodPlate, LoadState};

use crate::commands::HttpFoodStore;
use crate::components::{FoodCard, Header};
use crate::context::DashboardContext;
use crate::store::{
    store_edit_target, store_foods, store_settle, store_settle_load, store_status,
    DashboardState, DashboardStateStoreFields,
};

#[component]
pub fn Dashboard(
    api: HttpFoodStore,
    /// Modal forms rendered alongside the list
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let store = Store::new(DashboardState::default());
    provide_context(store);

    // Load foods on mount
    {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            store.load().set(LoadState::Loading);
            spawn_local(async move {
                let outcome = handlers::load_foods(&api).await;
                store_settle_load(&store, outcome);
            });
        });
    }

    let add_food = {
        let api = api.clone();
        Callback::new(move |draft: FoodDraft| {
            let api = api.clone();
            spawn_local(async move {
                let outcome = handlers::add_food(&api, draft).await;
                store_settle(&store, outcome);
            });
        })
    };

    let update_food = {
        let api = api.clone();
        Callback::new(move |draft: FoodDraft| {
            let api = api.clone();
            let target = store_edit_target(&store);
            spawn_local(async move {
                let outcome = handlers::update_food(&api, target.as_ref(), draft).await;
                store_settle(&store, outcome);
            });
        })
    };

    let delete_food = {
        let api = api.clone();
        Callback::new(move |id: u32| {
            let api = api.clone();
            spawn_local(async move {
                let outcome = handlers::delete_food(&api, id).await;
                store_settle(&store, outcome);
            });
        })
    };

    let update_availability = {
        let api = api.clone();
        Callback::new(move |food: FoodPlate| {
            let api = api.clone();
            spawn_local(async move {
                let outcome = handlers::set_availability(&api, food).await;
                store_settle(&store, outcome);
            });
        })
    };

    let ctx = DashboardContext::new(store, add_food, update_food);
    provide_context(ctx);

    let edit_food = Callback::new(move |food: FoodPlate| ctx.edit_food(food));

    let status = move || store_status(&store);

    view! {
        <Header />
        {children.map(|children| children())}

        {move || status().map(|message| view! {
            <p class="dashboard-status" role="status">{message}</p>
        })}

        <div class="foods-container" data-testid="foods-list">
            <For
                each=move || store_foods(&store)
                key=|food| food.clone()
                children=move |food| view! {
                    <FoodCard
                        food=food
                        on_edit=edit_food
                        on_delete=delete_food
                        on_toggle_availability=update_availability
                    />
                }
            />
        </div>
    }
}
