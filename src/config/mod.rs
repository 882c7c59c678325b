// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and downloads folder
//! - `[notifications]` - Which notification categories are enabled
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_SETTINGS_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_settings::config::{self, PreferencesPatch};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (cfg, _warning) = config::load();
//! let mut preferences = cfg.into_preferences("en");
//!
//! // Modify a setting
//! preferences.apply(&PreferencesPatch::language("fr"));
//!
//! // Save the modified configuration
//! config::save(&config::Config::from(&preferences)).expect("Failed to save config");
//! ```

pub mod defaults;
mod preferences;

pub use defaults::*;
pub use preferences::{base_language, PreferencesPatch, UserPreferences};

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr"). Unset means "follow the system".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Downloads folder. Unset means "use the OS downloads directory".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloads_path: Option<PathBuf>,
}

/// Notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationsConfig {
    /// Notify when a download completes.
    #[serde(default = "default_download_notifications")]
    pub downloads: bool,

    /// Notify when the repack list gains new entries.
    #[serde(default = "default_repack_updates_notifications")]
    pub repack_updates: bool,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            downloads: DEFAULT_DOWNLOAD_NOTIFICATIONS_ENABLED,
            repack_updates: DEFAULT_REPACK_UPDATES_NOTIFICATIONS_ENABLED,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Notification settings.
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

impl Config {
    /// Flattens the file representation into [`UserPreferences`].
    ///
    /// `fallback_language` is used when the file does not pin a language,
    /// typically the locale the i18n layer resolved from the system.
    #[must_use]
    pub fn into_preferences(self, fallback_language: &str) -> UserPreferences {
        UserPreferences {
            downloads_path: self.general.downloads_path,
            download_notifications_enabled: self.notifications.downloads,
            repack_updates_notifications_enabled: self.notifications.repack_updates,
            language: self
                .general
                .language
                .unwrap_or_else(|| fallback_language.to_string()),
        }
    }
}

impl From<&UserPreferences> for Config {
    fn from(preferences: &UserPreferences) -> Self {
        Config {
            general: GeneralConfig {
                language: Some(preferences.language.clone()),
                downloads_path: preferences.downloads_path.clone(),
            },
            notifications: NotificationsConfig {
                downloads: preferences.download_notifications_enabled,
                repack_updates: preferences.repack_updates_notifications_enabled,
            },
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_download_notifications() -> bool {
    DEFAULT_DOWNLOAD_NOTIFICATIONS_ENABLED
}

fn default_repack_updates_notifications() -> bool {
    DEFAULT_REPACK_UPDATES_NOTIFICATIONS_ENABLED
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "falling back to default settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "settings saved");
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
