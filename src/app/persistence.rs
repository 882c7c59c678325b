// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! This module handles saving user preferences to disk and applying
//! language changes to the localization context.

use crate::config::{self, Config, UserPreferences};
use crate::error::Result;
use crate::i18n::fluent::I18n;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Persists the preferences to `settings.toml`.
///
/// `config_dir` overrides the resolved config directory (tests, portable
/// installs); `None` uses the regular resolution order.
pub fn persist_preferences(
    preferences: &UserPreferences,
    config_dir: Option<PathBuf>,
) -> Result<()> {
    config::save_with_override(&Config::from(preferences), config_dir).inspect_err(|error| {
        tracing::error!(%error, "failed to save settings");
    })
}

/// Switches the active locale to `code`.
///
/// Unparsable or unavailable codes leave the current locale in place.
pub fn apply_language_change(i18n: &mut I18n, code: &str) -> bool {
    match code.parse::<LanguageIdentifier>() {
        Ok(locale) => i18n.set_locale(&locale),
        Err(error) => {
            tracing::warn!(code, %error, "ignoring invalid language code");
            false
        }
    }
}
