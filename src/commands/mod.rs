//! Remote API Bindings
//!
//! Frontend bindings to the `/foods` REST resource.

mod food;

pub use food::HttpFoodStore;
