use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use nutritrack::commands::{FoodCommand, GoalCommand, MealCommand};
use nutritrack::{Config, FoodApiClient, MealStore, Storage};

#[derive(Parser)]
#[command(name = "nutritrack")]
#[command(version)]
#[command(about = "A local-first nutrition tracking CLI", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the daily calorie goal
    Goal(GoalCommand),

    /// List, inspect, record, and remove meals
    Meal(MealCommand),

    /// Query the food database
    Food(FoodCommand),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config)?;

    let mut store = MealStore::new(Storage::new(config.data_dir.clone()));
    store.hydrate().await;

    let api = FoodApiClient::new(config.api_base_url.clone(), config.page_size);

    let result = match cli.command {
        Some(Commands::Goal(cmd)) => cmd.run(&mut store),
        Some(Commands::Meal(cmd)) => cmd.run(&mut store, &api).await,
        Some(Commands::Food(cmd)) => cmd.run(&api).await,
        None => {
            println!("Use --help to see available commands");
            Ok(())
        }
    };

    // write-backs are fire-and-forget; let them land before the runtime
    // goes away, even when the command failed after mutating
    store.flush().await;

    result
}
