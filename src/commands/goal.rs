use clap::{Args, Subcommand};

use crate::nutrition;
use crate::store::MealStore;

#[derive(Args)]
pub struct GoalCommand {
    #[command(subcommand)]
    pub command: GoalSubcommand,
}

#[derive(Subcommand)]
pub enum GoalSubcommand {
    /// Set the daily calorie goal
    Set {
        /// Goal in kcal per day (positive)
        kcal: f64,
    },

    /// Remove the daily calorie goal
    Clear,

    /// Show the goal and today's progress
    Show,
}

impl GoalCommand {
    pub fn run(&self, store: &mut MealStore) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            GoalSubcommand::Set { kcal } => {
                // positivity is validated here; the store accepts any value
                if !kcal.is_finite() || *kcal <= 0.0 {
                    return Err(format!("Goal must be a positive number, got '{}'", kcal).into());
                }
                store.set_goal(Some(*kcal));
                println!("Daily goal set to {} kcal", kcal);
            }
            GoalSubcommand::Clear => {
                store.set_goal(None);
                println!("Daily goal cleared");
            }
            GoalSubcommand::Show => {
                let consumed = store.consumed_today();
                let today = nutrition::today_key();
                match store.goal() {
                    Some(goal) => {
                        let progress = nutrition::goal_progress(consumed, Some(goal));
                        println!("Daily goal: {} kcal", goal);
                        println!(
                            "Today ({}): {} kcal consumed ({:.0}% of goal)",
                            today,
                            consumed,
                            progress * 100.0
                        );
                    }
                    None => {
                        println!("No daily goal set");
                        println!("Today ({}): {} kcal consumed", today, consumed);
                    }
                }
            }
        }
        Ok(())
    }
}
