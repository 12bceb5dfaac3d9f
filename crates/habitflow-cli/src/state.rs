//! On-disk CLI state: the core's in-memory stores hydrated from a JSON
//! snapshot. The engine itself stays free of persistence; this file is the
//! whole storage layer of the CLI.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use habitflow_core::{Habit, HabitRepository, MemoryHabitStore, MemoryProgressStore};

use crate::config::data_dir;

fn state_path() -> PathBuf {
    data_dir().join("state.json")
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppState {
    pub habits: MemoryHabitStore,
    pub progress: MemoryProgressStore,
}

impl AppState {
    pub fn load() -> Result<Self, Box<dyn Error>> {
        let path = state_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save(&self) -> Result<(), Box<dyn Error>> {
        let dir = data_dir();
        fs::create_dir_all(&dir)?;
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(state_path(), raw)?;
        Ok(())
    }

    /// Resolve a habit by uuid or exact title for the given owner.
    pub fn resolve_habit(&self, owner: &str, needle: &str) -> Result<Habit, Box<dyn Error>> {
        if let Ok(id) = needle.parse::<Uuid>() {
            return Ok(self.habits.get(id)?);
        }
        let habits = self.habits.list(owner)?;
        habits
            .into_iter()
            .find(|h| h.title == needle)
            .ok_or_else(|| format!("no habit named '{needle}'").into())
    }
}
