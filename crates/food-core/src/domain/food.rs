//! Food plate entity and its request payloads.

use serde::{Deserialize, Serialize};

use super::Entity;

/// A plate as stored by the remote API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoodPlate {
    pub id: u32,
    pub name: String,
    /// Image URL
    pub image: String,
    /// Decimal price kept as the server sends it
    pub price: String,
    pub description: String,
    pub available: bool,
}

impl FoodPlate {
    /// Same plate with the availability flag set to `available`
    pub fn with_availability(&self, available: bool) -> Self {
        Self {
            available,
            ..self.clone()
        }
    }
}

impl Entity for FoodPlate {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

/// Form data collected by the add/edit modals (no id, no availability)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodDraft {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
}

impl FoodDraft {
    /// Body for `POST /foods`. New plates are always created available.
    pub fn into_new_plate(self) -> NewFoodPlate {
        NewFoodPlate {
            name: self.name,
            image: self.image,
            price: self.price,
            description: self.description,
            available: true,
        }
    }

    /// Body for `PUT /foods/{id}`. Editing a plate marks it available again.
    pub fn into_plate(self, id: u32) -> FoodPlate {
        FoodPlate {
            id,
            name: self.name,
            image: self.image,
            price: self.price,
            description: self.description,
            available: true,
        }
    }
}

impl From<&FoodPlate> for FoodDraft {
    fn from(plate: &FoodPlate) -> Self {
        Self {
            name: plate.name.clone(),
            image: plate.image.clone(),
            price: plate.price.clone(),
            description: plate.description.clone(),
        }
    }
}

/// Create payload: a plate before the server has assigned its id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFoodPlate {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    pub available: bool,
}
