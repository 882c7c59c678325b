// SPDX-License-Identifier: MPL-2.0
//! In-memory user preferences and partial updates.
//!
//! [`UserPreferences`] is the flat view of `settings.toml` that the rest of
//! the application works with. UI components never mutate it; they emit a
//! [`PreferencesPatch`] and the owner applies it.

use super::defaults::{
    DEFAULT_DOWNLOAD_NOTIFICATIONS_ENABLED, DEFAULT_LANGUAGE,
    DEFAULT_REPACK_UPDATES_NOTIFICATIONS_ENABLED,
};
use std::path::PathBuf;

/// User-configurable preferences persisted by the host application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPreferences {
    /// Directory new downloads are written to. `None` means "use the OS default".
    pub downloads_path: Option<PathBuf>,
    pub download_notifications_enabled: bool,
    pub repack_updates_notifications_enabled: bool,
    /// Locale identifier, possibly region-qualified (e.g. `"en-US"`).
    pub language: String,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            downloads_path: None,
            download_notifications_enabled: DEFAULT_DOWNLOAD_NOTIFICATIONS_ENABLED,
            repack_updates_notifications_enabled: DEFAULT_REPACK_UPDATES_NOTIFICATIONS_ENABLED,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl UserPreferences {
    /// Overwrites the fields present in `patch`, leaving the others untouched.
    pub fn apply(&mut self, patch: &PreferencesPatch) {
        if let Some(path) = &patch.downloads_path {
            self.downloads_path = Some(path.clone());
        }
        if let Some(enabled) = patch.download_notifications_enabled {
            self.download_notifications_enabled = enabled;
        }
        if let Some(enabled) = patch.repack_updates_notifications_enabled {
            self.repack_updates_notifications_enabled = enabled;
        }
        if let Some(language) = &patch.language {
            self.language.clone_from(language);
        }
    }
}

/// A partial update of [`UserPreferences`]. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferencesPatch {
    pub downloads_path: Option<PathBuf>,
    pub download_notifications_enabled: Option<bool>,
    pub repack_updates_notifications_enabled: Option<bool>,
    pub language: Option<String>,
}

impl PreferencesPatch {
    #[must_use]
    pub fn downloads_path(path: PathBuf) -> Self {
        Self {
            downloads_path: Some(path),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn download_notifications(enabled: bool) -> Self {
        Self {
            download_notifications_enabled: Some(enabled),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn repack_updates_notifications(enabled: bool) -> Self {
        Self {
            repack_updates_notifications_enabled: Some(enabled),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn language(code: impl Into<String>) -> Self {
        Self {
            language: Some(code.into()),
            ..Self::default()
        }
    }
}

/// Returns the primary language subtag of a locale identifier.
///
/// `"en-US"` becomes `"en"`, `"pt-BR"` becomes `"pt"`. Underscore-separated
/// POSIX forms (`"fr_CA"`) are handled too. The input is not validated.
#[must_use]
pub fn base_language(locale: &str) -> &str {
    locale.split(['-', '_']).next().unwrap_or(locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_only_touches_fields_in_patch() {
        let mut prefs = UserPreferences {
            downloads_path: Some(PathBuf::from("/old")),
            download_notifications_enabled: true,
            repack_updates_notifications_enabled: false,
            language: "en-US".to_string(),
        };

        prefs.apply(&PreferencesPatch::repack_updates_notifications(true));

        assert!(prefs.repack_updates_notifications_enabled);
        assert!(prefs.download_notifications_enabled);
        assert_eq!(prefs.downloads_path, Some(PathBuf::from("/old")));
        assert_eq!(prefs.language, "en-US");
    }

    #[test]
    fn apply_language_and_path() {
        let mut prefs = UserPreferences::default();

        prefs.apply(&PreferencesPatch::language("de"));
        prefs.apply(&PreferencesPatch::downloads_path(PathBuf::from("/games")));

        assert_eq!(prefs.language, "de");
        assert_eq!(prefs.downloads_path, Some(PathBuf::from("/games")));
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let patch = PreferencesPatch::default();

        let mut prefs = UserPreferences::default();
        prefs.apply(&patch);
        assert_eq!(prefs, UserPreferences::default());
    }

    #[test]
    fn constructors_set_exactly_one_field() {
        let patch = PreferencesPatch::download_notifications(false);
        assert_eq!(patch.download_notifications_enabled, Some(false));
        assert!(patch.downloads_path.is_none());
        assert!(patch.repack_updates_notifications_enabled.is_none());
        assert!(patch.language.is_none());
    }

    #[test]
    fn base_language_strips_region() {
        assert_eq!(base_language("en-US"), "en");
        assert_eq!(base_language("pt-BR"), "pt");
        assert_eq!(base_language("zh-Hant-TW"), "zh");
        assert_eq!(base_language("fr_CA"), "fr");
    }

    #[test]
    fn base_language_keeps_plain_codes() {
        assert_eq!(base_language("de"), "de");
        assert_eq!(base_language(""), "");
    }
}
