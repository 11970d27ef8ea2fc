use clap::{Args, Subcommand};

use crate::api::FoodApiClient;

#[derive(Args)]
pub struct FoodCommand {
    #[command(subcommand)]
    pub command: FoodSubcommand,
}

#[derive(Subcommand)]
pub enum FoodSubcommand {
    /// Search the food database by name
    Search {
        /// Search terms
        query: String,
    },

    /// Look up a product by barcode
    Barcode {
        /// Product barcode
        code: String,
    },
}

impl FoodCommand {
    pub async fn run(&self, api: &FoodApiClient) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            FoodSubcommand::Search { query } => {
                let foods = api.search(query).await?;
                if foods.is_empty() {
                    println!("No products found for '{}'", query);
                }
                for food in &foods {
                    println!("{}  [{}]", food, food.id);
                }
            }
            FoodSubcommand::Barcode { code } => match api.lookup_by_code(code).await? {
                Some(food) => {
                    println!("{}  [{}]", food, food.id);
                    println!(
                        "  per 100g: {} kcal, {}g protein, {}g carbs, {}g fat",
                        food.calories, food.proteins, food.carbs, food.fats
                    );
                }
                None => println!("No product found for barcode {}", code),
            },
        }
        Ok(())
    }
}
