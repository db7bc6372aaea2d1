//! Persisted plugin settings management.
//!
//! This module provides the visibility-flag persistence with XDG Base
//! Directory compliance.

pub mod settings;

pub use settings::{SettingsError, SettingsManager, UserSettings, get_config_path};
