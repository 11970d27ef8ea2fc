use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};

use crate::api::FoodApiClient;
use crate::models::MealType;
use crate::nutrition;
use crate::search::{ScanGate, SearchSession};
use crate::store::MealStore;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct MealCommand {
    #[command(subcommand)]
    pub command: MealSubcommand,
}

#[derive(Subcommand)]
pub enum MealSubcommand {
    /// List recorded meals, most recent first
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Only meals on this date (YYYY-MM-DD, or "today")
        #[arg(long)]
        date: Option<String>,
    },

    /// Show one meal with its nutrition totals
    Show {
        /// Meal ID
        id: String,
    },

    /// Remove a meal
    Remove {
        /// Meal ID
        id: String,
    },

    /// Record a meal for today from barcodes and/or searches
    Log {
        /// Meal type (petit-dejeuner, dejeuner, diner, snack)
        #[arg(long = "type", short = 't', value_name = "TYPE")]
        meal_type: String,

        /// Add a product by barcode (can be repeated)
        #[arg(long = "code", value_name = "BARCODE")]
        codes: Vec<String>,

        /// Add the best match for a search query (can be repeated)
        #[arg(long = "search", value_name = "QUERY")]
        searches: Vec<String>,
    },
}

impl MealCommand {
    pub async fn run(
        &self,
        store: &mut MealStore,
        api: &FoodApiClient,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            MealSubcommand::List { format, date } => {
                let meals = match date {
                    Some(raw) => {
                        let date = parse_date(raw)?;
                        store.meals_for(date)
                    }
                    None => store.meals().to_vec(),
                };

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&meals)?);
                    }
                    OutputFormat::Text => {
                        if meals.is_empty() {
                            println!("No meals recorded");
                        }
                        for meal in &meals {
                            print!("{}", meal);
                            println!("  total: {} kcal", nutrition::meal_calories(meal));
                        }
                    }
                }
            }

            MealSubcommand::Show { id } => {
                let meal = store
                    .find_meal(id)
                    .ok_or_else(|| format!("No meal with id '{}'", id))?;
                print!("{}", meal);
                let totals = nutrition::totals(&meal.foods);
                println!(
                    "  totals: {} kcal, {}g protein, {}g carbs, {}g fat",
                    totals.calories, totals.proteins, totals.carbs, totals.fats
                );
            }

            MealSubcommand::Remove { id } => {
                if store.find_meal(id).is_none() {
                    return Err(format!("No meal with id '{}'", id).into());
                }
                store.remove_meal(id);
                println!("Removed meal {}", id);
            }

            MealSubcommand::Log {
                meal_type,
                codes,
                searches,
            } => {
                let meal_type: MealType = meal_type.parse().map_err(|e: String| e)?;
                store.set_draft_name(meal_type);

                let mut gate = ScanGate::default();
                for code in codes {
                    if !gate.try_begin() {
                        eprintln!("Ignoring repeated scan of {}", code);
                        continue;
                    }
                    let found = api.lookup_by_code(code).await;
                    gate.complete();
                    match found? {
                        Some(food) => {
                            println!("Adding {}", food);
                            store.add_food_to_draft(food);
                        }
                        None => eprintln!("No product found for barcode {}", code),
                    }
                }

                let mut session = SearchSession::new();
                for query in searches {
                    let ticket = session.begin();
                    let results = api.search(query).await?;
                    session.accept(ticket, results);
                    match session.results().first() {
                        Some(food) => {
                            println!("Adding {}", food);
                            store.add_food_to_draft(food.clone());
                        }
                        None => eprintln!("No product found for '{}'", query),
                    }
                }

                match store.promote_draft() {
                    Some(meal) => {
                        println!("Recorded meal {} ({})", meal.id, meal.name);
                        println!("  total: {} kcal", nutrition::meal_calories(&meal));
                    }
                    None => {
                        store.reset_draft();
                        return Err("A meal needs a type and at least one food".into());
                    }
                }
            }
        }
        Ok(())
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    if raw.eq_ignore_ascii_case("today") {
        return Ok(nutrition::today());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date format '{}'. Use YYYY-MM-DD.", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_log_without_foods_errors_and_flushes_clean() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().to_path_buf());
        let mut store = MealStore::new(storage.clone());
        store.hydrate().await;

        // unroutable base url; no lookups are issued for an empty log
        let api = FoodApiClient::new("http://127.0.0.1:0", 20);
        let cmd = MealCommand {
            command: MealSubcommand::Log {
                meal_type: "dejeuner".to_string(),
                codes: Vec::new(),
                searches: Vec::new(),
            },
        };

        let result = cmd.run(&mut store, &api).await;
        assert!(result.is_err());

        // flushing after a failed command must still be safe and leave
        // durable state untouched
        store.flush().await;
        assert!(store.meals().is_empty());
        assert!(store.draft().name.is_none());
        assert!(storage.load_meals().await.is_empty());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-06-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
        );
        assert_eq!(parse_date("today").unwrap(), nutrition::today());
        assert!(parse_date("15/06/2025").is_err());
    }
}
