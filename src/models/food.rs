use serde::{Deserialize, Serialize};
use std::fmt;

/// A food item as normalized from the Open Food Facts database.
///
/// All macro fields are per 100g, as returned by the external source.
/// Foods are immutable once fetched; meals own their foods by value, so
/// the same product may appear in several meals (or several times in one).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Food {
    /// Product barcode, or a generated fallback when the source has none.
    pub id: String,
    pub name: String,
    pub brand: String,
    pub image_url: String,
    /// Nutriscore grade (`a`..`e`), lowercase, empty when ungraded.
    pub nutriscore: String,
    pub calories: f64,
    pub proteins: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl Food {
    pub fn new(id: impl Into<String>, name: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            image_url: String::new(),
            nutriscore: String::new(),
            calories: 0.0,
            proteins: 0.0,
            carbs: 0.0,
            fats: 0.0,
        }
    }

    pub fn with_macros(mut self, calories: f64, proteins: f64, carbs: f64, fats: f64) -> Self {
        self.calories = calories;
        self.proteins = proteins;
        self.carbs = carbs;
        self.fats = fats;
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_nutriscore(mut self, nutriscore: impl Into<String>) -> Self {
        self.nutriscore = nutriscore.into();
        self
    }
}

impl fmt::Display for Food {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - {} kcal/100g", self.name, self.brand, self.calories)?;
        if !self.nutriscore.is_empty() {
            write!(f, " [nutriscore {}]", self.nutriscore)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_new() {
        let food = Food::new("123", "Yaourt nature", "Danone");
        assert_eq!(food.id, "123");
        assert_eq!(food.name, "Yaourt nature");
        assert_eq!(food.brand, "Danone");
        assert_eq!(food.calories, 0.0);
        assert!(food.nutriscore.is_empty());
    }

    #[test]
    fn test_food_with_macros() {
        let food = Food::new("123", "Pain complet", "Boulangerie").with_macros(250.0, 9.0, 47.0, 3.5);
        assert_eq!(food.calories, 250.0);
        assert_eq!(food.proteins, 9.0);
        assert_eq!(food.carbs, 47.0);
        assert_eq!(food.fats, 3.5);
    }

    #[test]
    fn test_food_display() {
        let food = Food::new("123", "Muesli", "Bio Village")
            .with_macros(380.0, 10.0, 60.0, 8.0)
            .with_nutriscore("a");
        let output = format!("{}", food);
        assert!(output.contains("Muesli"));
        assert!(output.contains("380 kcal/100g"));
        assert!(output.contains("nutriscore a"));
    }

    #[test]
    fn test_food_json_roundtrip() {
        let food = Food::new("3017620422003", "Pate a tartiner", "Ferrero")
            .with_macros(539.0, 6.3, 57.5, 30.9)
            .with_image_url("https://images.example/p.jpg")
            .with_nutriscore("e");
        let json = serde_json::to_string(&food).unwrap();
        let parsed: Food = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, food);
    }
}
