//! UI Components
//!
//! Leptos components making up the dashboard page.

mod dashboard;
mod delete_confirm_button;
mod food_card;
mod header;

pub use dashboard::Dashboard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use food_card::FoodCard;
pub use header::Header;
