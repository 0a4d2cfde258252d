//! Load status of the initial collection read.

use crate::error::DashboardError;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(DashboardError),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&DashboardError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}
