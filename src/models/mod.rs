mod draft;
mod food;
mod meal;
mod meal_type;

pub use draft::DraftMeal;
pub use food::Food;
pub use meal::Meal;
pub use meal_type::MealType;
