//! Persisted visibility flags with XDG Base Directory compliance.
//!
//! The three view toggles survive sessions as independent flags in a
//! JSON settings file. A missing or unreadable file is never fatal:
//! every flag falls back to its default of visible.

use std::{
    env::var,
    fs::{create_dir_all, read_to_string, write},
    io::Error as StdError,
    path::{Path, PathBuf},
};

use {
    parking_lot::{RwLock, RwLockReadGuard},
    serde::{Deserialize, Serialize},
    serde_json::{Error as SerdeJsonError, from_str, to_string_pretty},
    thiserror::Error,
    tracing::{debug, warn},
};

/// Error type for settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read or write the settings file.
    #[error("IO error: {0}")]
    IoError(#[from] StdError),
    /// Failed to serialize settings for writing.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] SerdeJsonError),
}

/// Serializable plugin settings with default values.
///
/// One independent flag per view; no combination is forbidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Whether the textual-reading view is shown.
    pub show_reader: bool,
    /// Whether the audio-recitation view is shown.
    pub show_reciter: bool,
    /// Whether the bookmark bar is shown.
    pub show_bookmarks: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            show_reader: true,
            show_reciter: true,
            show_bookmarks: true,
        }
    }
}

/// Handles loading and saving of the persisted flags.
#[derive(Debug)]
pub struct SettingsManager {
    /// Thread-safe settings storage.
    settings: RwLock<UserSettings>,
    /// Path to the settings file on disk.
    config_path: PathBuf,
}

impl SettingsManager {
    /// Creates a settings manager with the default config path.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the config directory cannot be
    /// created. Unreadable or corrupt settings content is not an error;
    /// it degrades to defaults.
    pub fn new() -> Result<Self, SettingsError> {
        Self::with_config_path(get_config_path())
    }

    /// Creates a settings manager with a custom config path (for testing).
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the config directory cannot be
    /// created.
    pub fn with_config_path(config_path: PathBuf) -> Result<Self, SettingsError> {
        // Ensure config directory exists
        if let Some(parent) = config_path.parent() {
            create_dir_all(parent)?;
        }

        let settings = if config_path.exists() {
            debug!("Loading settings from existing file: {:?}", config_path);
            load_or_default(&config_path)
        } else {
            debug!("No settings file yet, using defaults: {:?}", config_path);
            UserSettings::default()
        };

        Ok(SettingsManager {
            settings: RwLock::new(settings),
            config_path,
        })
    }

    /// Gets the current settings.
    pub fn get_settings(&self) -> RwLockReadGuard<'_, UserSettings> {
        self.settings.read()
    }

    /// Gets the settings file path.
    pub fn get_config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Updates the settings and saves them to disk.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the settings cannot be written.
    pub fn update_settings(&self, new_settings: UserSettings) -> Result<(), SettingsError> {
        let mut settings_write = self.settings.write();
        *settings_write = new_settings;
        drop(settings_write);
        self.save_settings()
    }

    /// Saves the current settings to disk.
    fn save_settings(&self) -> Result<(), SettingsError> {
        debug!("Saving settings to file: {:?}", self.config_path);
        let contents = to_string_pretty(&*self.settings.read())?;
        write(&self.config_path, contents)?;
        Ok(())
    }
}

/// Reads the settings file, degrading to defaults on any failure.
///
/// A persisted-setting read failure must never be fatal: the views
/// simply come back visible.
fn load_or_default(config_path: &Path) -> UserSettings {
    match read_to_string(config_path) {
        Ok(contents) => match from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Settings file corrupt, using defaults: {}", e);
                UserSettings::default()
            }
        },
        Err(e) => {
            warn!("Settings file unreadable, using defaults: {}", e);
            UserSettings::default()
        }
    }
}

/// Ensures proper XDG directory usage for the settings file.
#[must_use]
pub fn get_config_path() -> PathBuf {
    let mut config_dir = get_xdg_config_home();
    config_dir.push("mushaf");
    config_dir.push("settings.json");
    config_dir
}

/// Gets the XDG config home directory following XDG Base Directory specification.
///
/// Uses `XDG_CONFIG_HOME` environment variable if set, otherwise defaults to $HOME/.config
fn get_xdg_config_home() -> PathBuf {
    if let Ok(config_home) = var("XDG_CONFIG_HOME")
        && !config_home.is_empty()
    {
        return PathBuf::from(config_home);
    }

    if let Ok(home) = var("HOME") {
        let mut path = PathBuf::from(home);
        path.push(".config");
        return path;
    }

    // Fallback to current directory if HOME is not set (shouldn't happen on Unix)
    PathBuf::from(".")
}
