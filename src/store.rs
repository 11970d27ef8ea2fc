//! The meal store: the single owner of in-memory meal state.
//!
//! One `MealStore` is constructed at process start, hydrated once from
//! [`Storage`], and handed to consumers by explicit reference. Callers only
//! see snapshots and the operation set below; the store never hands out a
//! mutable alias to its internals.
//!
//! Every mutation of the meal list or the goal schedules a fire-and-forget
//! write-back of the full changed record. Writes carry complete snapshots,
//! so concurrent write-backs converge on the last issued value
//! (last-write-wins); a failed write is logged and dropped, leaving the
//! in-memory state authoritative for the session.

use chrono::NaiveDate;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::models::{DraftMeal, Food, Meal, MealType};
use crate::nutrition;
use crate::storage::Storage;

pub struct MealStore {
    storage: Storage,
    meals: Vec<Meal>,
    goal: Option<f64>,
    draft: DraftMeal,
    hydrated: bool,
    /// Runtime the write-back tasks run on, captured during hydration so
    /// mutations stay callable from plain synchronous code.
    runtime: Option<Handle>,
    pending_writes: Vec<JoinHandle<()>>,
}

impl MealStore {
    /// Creates a cold store. No write-back happens until [`hydrate`]
    /// completes, so startup can never clobber durable state with empty
    /// defaults.
    ///
    /// [`hydrate`]: MealStore::hydrate
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            meals: Vec::new(),
            goal: None,
            draft: DraftMeal::new(),
            hydrated: false,
            runtime: None,
            pending_writes: Vec::new(),
        }
    }

    /// Loads both persisted records and flips the store to ready.
    ///
    /// Runs at most once; later calls are no-ops. Meals and goal are set
    /// together before the flag flips.
    pub async fn hydrate(&mut self) {
        if self.hydrated {
            return;
        }
        let (meals, goal) = self.storage.load().await;
        self.meals = meals;
        self.goal = goal;
        self.runtime = Some(Handle::current());
        self.hydrated = true;
        tracing::debug!("Hydrated {} meal(s), goal: {:?}", self.meals.len(), self.goal);
    }

    pub fn hydrated(&self) -> bool {
        self.hydrated
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn goal(&self) -> Option<f64> {
        self.goal
    }

    pub fn draft(&self) -> &DraftMeal {
        &self.draft
    }

    pub fn find_meal(&self, id: &str) -> Option<&Meal> {
        self.meals.iter().find(|m| m.id == id)
    }

    /// Meals belonging to the given local calendar day, cloned for the
    /// caller.
    pub fn meals_for(&self, date: NaiveDate) -> Vec<Meal> {
        self.meals.iter().filter(|m| m.date == date).cloned().collect()
    }

    /// Calories consumed across today's meals.
    pub fn consumed_today(&self) -> f64 {
        self.meals
            .iter()
            .filter(|m| m.date == nutrition::today())
            .map(nutrition::meal_calories)
            .sum()
    }

    /// Replaces the goal as-is; validating positivity is the caller's job.
    pub fn set_goal(&mut self, goal: Option<f64>) {
        self.goal = goal;
        self.persist_goal();
    }

    /// Removes the meal with the given id; no-op when absent.
    pub fn remove_meal(&mut self, id: &str) {
        let before = self.meals.len();
        if let Some(pos) = self.meals.iter().position(|m| m.id == id) {
            self.meals.remove(pos);
        }
        if self.meals.len() != before {
            self.persist_meals();
        }
    }

    pub fn set_draft_name(&mut self, name: MealType) {
        self.draft.set_name(name);
    }

    pub fn add_food_to_draft(&mut self, food: Food) {
        self.draft.add_food(food);
    }

    /// See [`DraftMeal::remove_food`] for the single-match removal policy.
    pub fn remove_food_from_draft(&mut self, id: &str, index: Option<usize>) {
        self.draft.remove_food(id, index);
    }

    pub fn reset_draft(&mut self) {
        self.draft.reset();
    }

    /// Promotes the draft into a persisted meal.
    ///
    /// Returns `None` without touching any state unless the draft has both
    /// a name and at least one food. On success the new meal gets a fresh
    /// id and today's date, is prepended to the list (most-recent-first),
    /// the draft is cleared, and a write-back is scheduled.
    pub fn promote_draft(&mut self) -> Option<Meal> {
        if !self.draft.is_promotable() {
            return None;
        }
        let name = self.draft.name.take()?;
        let foods = std::mem::take(&mut self.draft.foods);

        let meal = Meal::new(name, nutrition::today(), foods);
        self.meals.insert(0, meal.clone());
        self.persist_meals();
        Some(meal)
    }

    /// Waits for all in-flight write-backs.
    ///
    /// Mutations never block on persistence; short-lived hosts (the CLI)
    /// call this once before exiting so spawned writes are not torn down
    /// with the runtime.
    pub async fn flush(&mut self) {
        for handle in self.pending_writes.drain(..) {
            let _ = handle.await;
        }
    }

    fn persist_meals(&mut self) {
        if !self.hydrated {
            return;
        }
        let storage = self.storage.clone();
        let snapshot = self.meals.clone();
        self.spawn_write(async move {
            if let Err(e) = storage.save_meals(&snapshot).await {
                tracing::warn!("Meal write-back failed: {}", e);
            }
        });
    }

    fn persist_goal(&mut self) {
        if !self.hydrated {
            return;
        }
        let storage = self.storage.clone();
        let goal = self.goal;
        self.spawn_write(async move {
            if let Err(e) = storage.save_goal(goal).await {
                tracing::warn!("Goal write-back failed: {}", e);
            }
        });
    }

    fn spawn_write<F>(&mut self, fut: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        // set during hydration, and writes are gated on hydrated
        let Some(runtime) = self.runtime.as_ref() else {
            return;
        };
        self.pending_writes.retain(|h| !h.is_finished());
        self.pending_writes.push(runtime.spawn(fut));
    }
}
