//! Path management for the assistant bot
//!
//! Provides XDG-compliant path resolution for settings and the persisted
//! address book.
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` command line flag (if given)
//! 2. `ASSISTANT_BOT_DATA_DIR` environment variable (if set)
//! 3. Unix (Linux/macOS): `$XDG_CONFIG_HOME/assistant-bot` or `~/.config/assistant-bot`
//! 4. Other platforms: the platform config directory

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::AddressBookError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "ASSISTANT_BOT_DATA_DIR";

const APP_DIR_NAME: &str = "assistant-bot";

/// Manages all paths used by the assistant bot
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Base directory for all assistant bot data
    base_dir: PathBuf,
}

impl AppPaths {
    /// Create a new AppPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, AddressBookError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Resolve paths, preferring an explicit directory when one is given
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, AddressBookError> {
        match explicit {
            Some(base_dir) => Ok(Self::with_base_dir(base_dir)),
            None => Self::new(),
        }
    }

    /// Create AppPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the address book snapshot
    pub fn snapshot_file(&self) -> PathBuf {
        self.base_dir.join("addressbook.json")
    }

    /// Get the default path of the plain-text contacts export
    pub fn contacts_text_file(&self) -> PathBuf {
        self.base_dir.join("contacts.txt")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), AddressBookError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            AddressBookError::Io(format!("Failed to create data directory: {}", e))
        })
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, AddressBookError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    if let Ok(config_home) = std::env::var("XDG_CONFIG_HOME") {
        if !config_home.is_empty() {
            return Ok(PathBuf::from(config_home).join(APP_DIR_NAME));
        }
    }

    let dirs = BaseDirs::new()
        .ok_or_else(|| AddressBookError::Config("Could not determine home directory".into()))?;
    Ok(dirs.home_dir().join(".config").join(APP_DIR_NAME))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, AddressBookError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| AddressBookError::Config("Could not determine APPDATA directory".into()))?;
    Ok(dirs.config_dir().join(APP_DIR_NAME))
}
