//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use food_core::{DashboardResult, FoodEvent, FoodMirror, FoodPlate, LoadState, ModalState};

/// View state owned by one mounted dashboard
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Local mirror of `/foods`
    pub foods: FoodMirror,
    /// Add/edit modal flags and the staged edit target
    pub modals: ModalState,
    /// Initial load progress
    pub load: LoadState,
    /// Message of the most recent failed command
    pub last_error: Option<String>,
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    use_context::<DashboardStore>().expect("DashboardStore should be provided")
}

// ========================
// Store Helper Functions
// ========================

/// Apply a finished command to the store.
///
/// Writes go through `try_update`: once the dashboard is unmounted the
/// store is disposed and late responses are dropped.
pub fn store_settle(store: &DashboardStore, outcome: DashboardResult<FoodEvent>) {
    match outcome {
        Ok(event) => {
            if store.foods().try_update(|foods| foods.apply(event)).is_none() {
                log::debug!("[STORE] dashboard disposed, dropping response");
                return;
            }
            store.last_error().try_update(|err| *err = None);
        }
        Err(err) => {
            log::error!("[STORE] {}", err);
            store.last_error().try_update(|slot| *slot = Some(err.to_string()));
        }
    }
}

/// Record the outcome of the initial load
pub fn store_settle_load(store: &DashboardStore, outcome: DashboardResult<FoodEvent>) {
    match outcome {
        Ok(event) => {
            if store.foods().try_update(|foods| foods.apply(event)).is_none() {
                log::debug!("[STORE] dashboard disposed, dropping initial load");
                return;
            }
            store.load().try_update(|state| *state = LoadState::Ready);
        }
        Err(err) => {
            log::error!("[STORE] {}", err);
            store.last_error().try_update(|slot| *slot = Some(err.to_string()));
            store.load().try_update(|state| *state = LoadState::Failed(err));
        }
    }
}

/// Plates in display order
pub fn store_foods(store: &DashboardStore) -> Vec<FoodPlate> {
    store.foods().with(|foods| foods.to_vec())
}

/// Mirrored plate by id
pub fn store_food(store: &DashboardStore, id: u32) -> Option<FoodPlate> {
    store.foods().with(|foods| foods.get(id).cloned())
}

/// Status line: loading notice, else the most recent failure
pub fn store_status(store: &DashboardStore) -> Option<String> {
    if store.load().with(|load| load.is_loading()) {
        return Some("Loading plates...".to_string());
    }
    store.last_error().get()
}

/// Plate currently staged for editing
pub fn store_edit_target(store: &DashboardStore) -> Option<FoodPlate> {
    store.modals().with_untracked(|modals| modals.edit_target.clone())
}
