use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of meal-type labels.
///
/// The wire labels match the persisted records exactly (the app's original
/// French labels); `FromStr` additionally accepts English aliases for CLI use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealType {
    #[serde(rename = "Petit-dejeuner")]
    PetitDejeuner,
    #[serde(rename = "Dejeuner")]
    Dejeuner,
    #[serde(rename = "Diner")]
    Diner,
    #[serde(rename = "Snack")]
    Snack,
}

impl MealType {
    /// The persisted label for this meal type.
    pub fn label(&self) -> &'static str {
        match self {
            MealType::PetitDejeuner => "Petit-dejeuner",
            MealType::Dejeuner => "Dejeuner",
            MealType::Diner => "Diner",
            MealType::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "petit-dejeuner" | "breakfast" => Ok(MealType::PetitDejeuner),
            "dejeuner" | "lunch" => Ok(MealType::Dejeuner),
            "diner" | "dinner" => Ok(MealType::Diner),
            "snack" => Ok(MealType::Snack),
            _ => Err(format!(
                "Invalid meal type '{}'. Valid options: petit-dejeuner, dejeuner, diner, snack",
                s
            )),
        }
    }
}
