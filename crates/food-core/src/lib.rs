//! Food Dashboard Core
//!
//! Everything the dashboard view does that is not rendering: the plate
//! model, the remote store seam, the local mirror reducer and the command
//! handlers that connect them.

pub mod domain;
pub mod error;
pub mod handlers;
pub mod mirror;
pub mod modal;
pub mod remote;
pub mod status;

pub use domain::{Entity, FoodDraft, FoodPlate, NewFoodPlate};
pub use error::{DashboardError, DashboardResult, Operation, RemoteError, RemoteResult};
pub use mirror::{FoodEvent, FoodMirror, Mirror, MirrorEvent};
pub use modal::ModalState;
pub use remote::RemoteStore;
pub use status::LoadState;
