//! On-device persistence for the meal list and the daily calorie goal.
//!
//! Two independent records live under the data directory: the full meal
//! list as a JSON snapshot, and the goal as a plain number in its own file.
//! Loading is deliberately forgiving: a missing or corrupt record decodes
//! to "no prior data" so a bad payload can never wedge startup.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::models::Meal;

/// Filename of the meals record.
pub const MEALS_FILE: &str = "meals.json";
/// Filename of the daily goal record; absent means no goal is set.
pub const GOAL_FILE: &str = "daily_goal";

/// Storage for the two persisted records.
#[derive(Debug, Clone)]
pub struct Storage {
    data_dir: PathBuf,
}

impl Storage {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn meals_path(&self) -> PathBuf {
        self.data_dir.join(MEALS_FILE)
    }

    fn goal_path(&self) -> PathBuf {
        self.data_dir.join(GOAL_FILE)
    }

    /// Loads both records for hydration.
    ///
    /// Never fails: any read or decode problem yields the empty defaults.
    pub async fn load(&self) -> (Vec<Meal>, Option<f64>) {
        (self.load_meals().await, self.load_goal().await)
    }

    /// Loads the meal list, defaulting to empty on a missing or corrupt
    /// record.
    pub async fn load_meals(&self) -> Vec<Meal> {
        let path = self.meals_path();
        let raw = match fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(meals) => meals,
            Err(e) => {
                tracing::warn!("Corrupt meals record at {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }

    /// Loads the daily goal; a missing file or unparseable number means no
    /// goal.
    pub async fn load_goal(&self) -> Option<f64> {
        let raw = fs::read_to_string(self.goal_path()).await.ok()?;
        raw.trim().parse::<f64>().ok().filter(|g| g.is_finite())
    }

    /// Writes the full meal list snapshot.
    pub async fn save_meals(&self, meals: &[Meal]) -> Result<(), StorageError> {
        let json = serde_json::to_string(meals).map_err(StorageError::EncodeError)?;
        self.write_record(self.meals_path(), &json).await
    }

    /// Writes the goal, or removes its record entirely when unset.
    pub async fn save_goal(&self, goal: Option<f64>) -> Result<(), StorageError> {
        match goal {
            Some(value) => self.write_record(self.goal_path(), &value.to_string()).await,
            None => match fs::remove_file(self.goal_path()).await {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(StorageError::IoError(self.goal_path(), e)),
            },
        }
    }

    async fn write_record(&self, path: PathBuf, contents: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| StorageError::IoError(self.data_dir.clone(), e))?;
        fs::write(&path, contents)
            .await
            .map_err(|e| StorageError::IoError(path, e))
    }
}

/// Errors that can occur while writing a record.
#[derive(Debug)]
pub enum StorageError {
    /// I/O error reading or writing a file.
    IoError(PathBuf, io::Error),
    /// Error encoding the meals record.
    EncodeError(serde_json::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::IoError(path, e) => {
                write!(f, "I/O error for {}: {}", path.display(), e)
            }
            StorageError::EncodeError(e) => {
                write!(f, "Failed to encode meals record: {}", e)
            }
        }
    }
}

impl std::error::Error for StorageError {}
