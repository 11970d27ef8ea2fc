use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::food::Food;
use super::meal_type::MealType;

/// A persisted meal: a dated, typed list of foods.
///
/// Meals are only ever created by promoting a draft, so a meal always has a
/// name and at least one food. Food order is insertion order and duplicates
/// are allowed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    pub id: String,
    pub name: MealType,
    pub date: NaiveDate,
    pub foods: Vec<Food>,
}

impl Meal {
    pub fn new(name: MealType, date: NaiveDate, foods: Vec<Food>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            date,
            foods,
        }
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} - {} ({})", self.date, self.name, self.id)?;
        for food in &self.foods {
            writeln!(f, "  - {}", food)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_meal_new() {
        let foods = vec![Food::new("a", "Pomme", "Verger")];
        let meal = Meal::new(MealType::Snack, sample_date(), foods.clone());

        assert_eq!(meal.name, MealType::Snack);
        assert_eq!(meal.date, sample_date());
        assert_eq!(meal.foods, foods);
        assert!(!meal.id.is_empty());
    }

    #[test]
    fn test_meal_ids_are_unique() {
        let foods = vec![Food::new("a", "Pomme", "Verger")];
        let first = Meal::new(MealType::Snack, sample_date(), foods.clone());
        let second = Meal::new(MealType::Snack, sample_date(), foods);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_meal_display() {
        let foods = vec![
            Food::new("a", "Riz", "Taureau Aile").with_macros(350.0, 7.0, 78.0, 1.0),
            Food::new("b", "Poulet", "Maitre Coq").with_macros(165.0, 31.0, 0.0, 3.6),
        ];
        let meal = Meal::new(MealType::Dejeuner, sample_date(), foods);
        let output = format!("{}", meal);
        assert!(output.contains("2025-06-15"));
        assert!(output.contains("Dejeuner"));
        assert!(output.contains("Riz"));
        assert!(output.contains("Poulet"));
    }

    #[test]
    fn test_meal_json_roundtrip() {
        let foods = vec![Food::new("a", "Pomme", "Verger").with_macros(52.0, 0.3, 14.0, 0.2)];
        let meal = Meal::new(MealType::PetitDejeuner, sample_date(), foods);

        let json = serde_json::to_string(&meal).unwrap();
        assert!(json.contains("\"Petit-dejeuner\""));
        assert!(json.contains("\"2025-06-15\""));

        let parsed: Meal = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, meal);
    }
}
