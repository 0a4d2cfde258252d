//! Dashboard Context
//!
//! Handle provided via Leptos Context API to the header, the plate cards and
//! the modal forms mounted inside the dashboard.

use leptos::prelude::*;

use food_core::{FoodDraft, FoodPlate};

use crate::store::{DashboardStateStoreFields, DashboardStore};

/// Dashboard-wide state and commands
#[derive(Clone, Copy)]
pub struct DashboardContext {
    store: DashboardStore,
    /// Create a plate from modal form data
    pub add_food: Callback<FoodDraft>,
    /// Replace the staged edit target with modal form data
    pub update_food: Callback<FoodDraft>,
}

impl DashboardContext {
    pub fn new(
        store: DashboardStore,
        add_food: Callback<FoodDraft>,
        update_food: Callback<FoodDraft>,
    ) -> Self {
        Self {
            store,
            add_food,
            update_food,
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.store.modals().with(|m| m.add_open)
    }

    pub fn is_edit_modal_open(&self) -> bool {
        self.store.modals().with(|m| m.edit_open)
    }

    /// Flip the add modal
    pub fn toggle_modal(&self) {
        self.store.modals().update(|m| m.toggle_add());
    }

    /// Flip the edit modal
    pub fn toggle_edit_modal(&self) {
        self.store.modals().update(|m| m.toggle_edit());
    }

    /// Stage `food` and open the edit modal
    pub fn edit_food(&self, food: FoodPlate) {
        log::debug!("[CONTEXT] editing plate {}", food.id);
        self.store.modals().update(|m| m.begin_edit(food));
    }

    /// Plate staged for editing
    pub fn editing_food(&self) -> Option<FoodPlate> {
        self.store.modals().with(|m| m.edit_target.clone())
    }
}

/// Get the dashboard context
pub fn use_dashboard() -> DashboardContext {
    use_context::<DashboardContext>().expect("DashboardContext should be provided")
}
