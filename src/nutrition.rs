//! Pure nutrition aggregation helpers.
//!
//! Everything here is side-effect-free: totals are computed on read,
//! arguments are never mutated, and repeated calls on equal input yield
//! equal output.

use chrono::{Local, NaiveDate};

use crate::models::{Food, Meal};

/// Summed macros for a list of foods.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MealTotals {
    pub calories: f64,
    pub proteins: f64,
    pub carbs: f64,
    pub fats: f64,
}

fn macro_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Sums the four macro fields across a food list; non-finite values count
/// as zero.
pub fn totals(foods: &[Food]) -> MealTotals {
    foods.iter().fold(MealTotals::default(), |mut acc, food| {
        acc.calories += macro_or_zero(food.calories);
        acc.proteins += macro_or_zero(food.proteins);
        acc.carbs += macro_or_zero(food.carbs);
        acc.fats += macro_or_zero(food.fats);
        acc
    })
}

pub fn meal_calories(meal: &Meal) -> f64 {
    totals(&meal.foods).calories
}

/// The local calendar day, used to assign dates to promoted meals and to
/// filter "today's" meals.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `today()` formatted as `YYYY-MM-DD`.
pub fn today_key() -> String {
    today().format("%Y-%m-%d").to_string()
}

/// Fraction of the daily goal consumed, clamped to `[0, 1]`.
///
/// Returns 0 when no goal is set or the goal is not a positive number.
pub fn goal_progress(consumed: f64, goal: Option<f64>) -> f64 {
    match goal {
        Some(g) if g > 0.0 && g.is_finite() => (macro_or_zero(consumed) / g).clamp(0.0, 1.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;

    fn food(id: &str, calories: f64, proteins: f64, carbs: f64, fats: f64) -> Food {
        Food::new(id, format!("food-{}", id), "brand").with_macros(calories, proteins, carbs, fats)
    }

    #[test]
    fn test_totals_empty() {
        assert_eq!(totals(&[]), MealTotals::default());
    }

    #[test]
    fn test_totals_sums_each_macro() {
        let foods = vec![
            food("a", 200.0, 10.0, 20.0, 5.0),
            food("b", 150.0, 3.0, 30.0, 1.5),
        ];
        let t = totals(&foods);
        assert_eq!(t.calories, 350.0);
        assert_eq!(t.proteins, 13.0);
        assert_eq!(t.carbs, 50.0);
        assert_eq!(t.fats, 6.5);
    }

    #[test]
    fn test_totals_treats_non_finite_as_zero() {
        let foods = vec![
            food("a", f64::NAN, f64::INFINITY, 10.0, 2.0),
            food("b", 100.0, 5.0, 10.0, 2.0),
        ];
        let t = totals(&foods);
        assert_eq!(t.calories, 100.0);
        assert_eq!(t.proteins, 5.0);
        assert_eq!(t.carbs, 20.0);
        assert_eq!(t.fats, 4.0);
    }

    #[test]
    fn test_totals_does_not_mutate_input() {
        let foods = vec![food("a", 200.0, 10.0, 20.0, 5.0)];
        let before = foods.clone();
        let _ = totals(&foods);
        let _ = totals(&foods);
        assert_eq!(foods, before);
    }

    #[test]
    fn test_meal_calories() {
        let meal = Meal::new(
            MealType::Dejeuner,
            today(),
            vec![food("a", 200.0, 0.0, 0.0, 0.0), food("b", 150.0, 0.0, 0.0, 0.0)],
        );
        assert_eq!(meal_calories(&meal), 350.0);
    }

    #[test]
    fn test_today_key_format() {
        let key = today_key();
        assert_eq!(key.len(), 10);
        assert_eq!(key, today().format("%Y-%m-%d").to_string());
        assert_eq!(&key[4..5], "-");
        assert_eq!(&key[7..8], "-");
    }

    #[test]
    fn test_goal_progress() {
        assert_eq!(goal_progress(1200.0, Some(2000.0)), 0.6);
        assert_eq!(goal_progress(0.0, Some(2000.0)), 0.0);
        assert_eq!(goal_progress(500.0, None), 0.0);
        assert_eq!(goal_progress(500.0, Some(0.0)), 0.0);
        assert_eq!(goal_progress(500.0, Some(-10.0)), 0.0);
    }

    #[test]
    fn test_goal_progress_clamps_at_one() {
        assert_eq!(goal_progress(2500.0, Some(2000.0)), 1.0);
    }
}
