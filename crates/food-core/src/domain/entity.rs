//! Domain Layer - Core Entity Trait
//!
//! Every record the dashboard mirrors carries a server-assigned identity.

use std::hash::Hash;

/// Core trait for mirrored entities
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + Hash + std::fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}
