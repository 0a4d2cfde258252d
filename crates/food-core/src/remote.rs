//! Remote Store - Collaborator Trait
//!
//! Abstract interface over the `/foods` REST resource.
//! The browser build talks HTTP; tests use an in-memory fake.

use async_trait::async_trait;

use crate::domain::{FoodPlate, NewFoodPlate};
use crate::error::RemoteResult;

/// CRUD access to the remote food collection
///
/// Futures are `?Send`: the dashboard runs on the single-threaded
/// browser event loop.
#[async_trait(?Send)]
pub trait RemoteStore {
    /// `GET /foods`
    async fn list(&self) -> RemoteResult<Vec<FoodPlate>>;

    /// `POST /foods`, returns the stored plate with its assigned id
    async fn create(&self, plate: &NewFoodPlate) -> RemoteResult<FoodPlate>;

    /// `PUT /foods/{id}`, returns the server's echo
    async fn replace(&self, plate: &FoodPlate) -> RemoteResult<FoodPlate>;

    /// `DELETE /foods/{id}`
    async fn delete(&self, id: u32) -> RemoteResult<()>;
}
