//! Nutritrack Core Library
//!
//! Local-first nutrition tracking: foods come from Open Food Facts, meals
//! are assembled through a single draft and persisted on-device, and daily
//! calorie intake is tracked against an optional goal.

pub mod api;
pub mod commands;
pub mod config;
pub mod models;
pub mod nutrition;
pub mod search;
pub mod storage;
pub mod store;

pub use api::{FoodApiClient, FoodApiError};
pub use config::{Config, ConfigError};
pub use models::{DraftMeal, Food, Meal, MealType};
pub use nutrition::MealTotals;
pub use search::{ScanGate, SearchSession, SearchTicket};
pub use storage::{Storage, StorageError};
pub use store::MealStore;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
