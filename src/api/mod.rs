mod open_food_facts;

pub use open_food_facts::{FoodApiClient, FoodApiError, DEFAULT_BASE_URL};
