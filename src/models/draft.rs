use super::food::Food;
use super::meal_type::MealType;

/// The single in-progress meal being assembled by the user.
///
/// A draft lives only in memory and is never persisted. Its food list is
/// append-only through user actions; entries may duplicate by id, so removal
/// supports an explicit positional index in addition to first-match-by-id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftMeal {
    pub name: Option<MealType>,
    pub foods: Vec<Food>,
}

impl DraftMeal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the meal type without touching accumulated foods.
    pub fn set_name(&mut self, name: MealType) {
        self.name = Some(name);
    }

    /// Appends a food; duplicates are allowed.
    pub fn add_food(&mut self, food: Food) {
        self.foods.push(food);
    }

    /// Removes one food entry.
    ///
    /// With an explicit index, removes exactly that position (no-op when out
    /// of range). Without one, removes only the first entry whose id matches,
    /// never all matches.
    pub fn remove_food(&mut self, id: &str, index: Option<usize>) {
        match index {
            Some(i) => {
                if i < self.foods.len() {
                    self.foods.remove(i);
                }
            }
            None => {
                if let Some(pos) = self.foods.iter().position(|f| f.id == id) {
                    self.foods.remove(pos);
                }
            }
        }
    }

    /// Clears the draft back to empty and unset.
    pub fn reset(&mut self) {
        self.name = None;
        self.foods.clear();
    }

    /// A draft may be promoted once it has a name and at least one food.
    pub fn is_promotable(&self) -> bool {
        self.name.is_some() && !self.foods.is_empty()
    }
}
