//! CLI configuration, loaded from `config.toml` in the data directory.
//!
//! Every key has a default so a missing or partial file is fine.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Data directory for state and configuration.
///
/// `HABITFLOW_DATA_DIR` overrides the platform default, which keeps tests
/// away from real user data.
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("HABITFLOW_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("habitflow")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Owner id stamped on habits created through this CLI.
    pub owner: String,
    /// Default calendar/stats window length in days.
    pub window_days: u32,
    /// Goal used by `habit add` when none is given.
    pub default_goal: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner: "local".to_string(),
            window_days: 90,
            default_goal: 1,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn Error>> {
        let path = data_dir().join("config.toml");
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)?;
        Ok(toml::from_str(&raw)?)
    }
}
