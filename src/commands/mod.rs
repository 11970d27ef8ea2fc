mod food;
mod goal;
mod meal;

pub use food::FoodCommand;
pub use goal::GoalCommand;
pub use meal::MealCommand;
