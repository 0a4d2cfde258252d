//! Domain Layer
//!
//! Entities exchanged with the remote `/foods` resource.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod food;

pub use entity::Entity;
pub use food::{FoodDraft, FoodPlate, NewFoodPlate};
