//! Modal visibility state owned by the dashboard.

use crate::domain::FoodPlate;

/// Add/edit modal flags plus the single staged edit target
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalState {
    pub add_open: bool,
    pub edit_open: bool,
    /// Plate being edited. Overwritten by every `begin_edit`.
    pub edit_target: Option<FoodPlate>,
}

impl ModalState {
    pub fn toggle_add(&mut self) {
        self.add_open = !self.add_open;
    }

    pub fn toggle_edit(&mut self) {
        self.edit_open = !self.edit_open;
    }

    /// Stage `plate` for editing and flip the edit modal
    pub fn begin_edit(&mut self, plate: FoodPlate) {
        self.edit_target = Some(plate);
        self.toggle_edit();
    }
}
