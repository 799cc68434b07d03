//! User settings for the assistant bot
//!
//! Manages user preferences: the prompt shown by the interactive session and
//! the length of the upcoming-birthdays window.

use serde::{Deserialize, Serialize};

use tracing::info;

use super::paths::AppPaths;
use crate::error::AddressBookError;
use crate::models::DEFAULT_WINDOW_DAYS;
use crate::storage::file_io::write_json_atomic;

/// User settings for the assistant bot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Days ahead (inclusive) that `birthdays` looks at
    #[serde(default = "default_window_days")]
    pub upcoming_window_days: u64,

    /// Prompt printed before each command
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_window_days() -> u64 {
    DEFAULT_WINDOW_DAYS
}

fn default_prompt() -> String {
    "Enter a command: ".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            upcoming_window_days: default_window_days(),
            prompt: default_prompt(),
        }
    }
}

impl Settings {
    /// Load settings from disk, writing the defaults on first run
    pub fn load_or_create(paths: &AppPaths) -> Result<Self, AddressBookError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            let settings = Settings::default();
            settings.save(paths)?;
            info!(path = %settings_path.display(), "wrote default settings");
            return Ok(settings);
        }

        let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
            AddressBookError::Io(format!("Failed to read settings file: {}", e))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            AddressBookError::Config(format!("Failed to parse settings file: {}", e))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AppPaths) -> Result<(), AddressBookError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
