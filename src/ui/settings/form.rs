// SPDX-License-Identifier: MPL-2.0
//! Editable form state mirrored from the user preferences.

use crate::config::{base_language, PreferencesPatch, UserPreferences};
use std::path::{Path, PathBuf};

/// Local copy of the preferences the general settings panel edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pub downloads_path: PathBuf,
    pub download_notifications_enabled: bool,
    pub repack_updates_notifications_enabled: bool,
    /// Base language subtag only (`"en"`, never `"en-US"`).
    pub language: String,
}

impl Form {
    /// Reflects an outgoing edit locally before the owner acknowledges it.
    pub fn apply(&mut self, patch: &PreferencesPatch) {
        if let Some(path) = &patch.downloads_path {
            self.downloads_path.clone_from(path);
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

/// Projects the preferences and the resolved OS default into form state.
///
/// Returns `None` while the preferences are not loaded yet, in which case the
/// caller keeps its previous form.
#[must_use]
pub fn project(
    preferences: Option<&UserPreferences>,
    default_downloads_path: Option<&Path>,
) -> Option<Form> {
    let preferences = preferences?;

    let downloads_path = preferences
        .downloads_path
        .clone()
        .or_else(|| default_downloads_path.map(Path::to_path_buf))
        .unwrap_or_default();

    Some(Form {
        downloads_path,
        download_notifications_enabled: preferences.download_notifications_enabled,
        repack_updates_notifications_enabled: preferences.repack_updates_notifications_enabled,
        language: base_language(&preferences.language).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preferences() -> UserPreferences {
        UserPreferences {
            downloads_path: None,
            download_notifications_enabled: true,
            repack_updates_notifications_enabled: false,
            language: "en-US".to_string(),
        }
    }

    #[test]
    fn no_preferences_projects_nothing() {
        assert_eq!(project(None, Some(Path::new("/default"))), None);
    }

    #[test]
    fn unset_path_uses_default() {
        let form = project(Some(&preferences()), Some(Path::new("/default"))).unwrap();
        assert_eq!(form.downloads_path, PathBuf::from("/default"));
    }

    #[test]
    fn stored_path_wins_over_default() {
        let prefs = UserPreferences {
            downloads_path: Some(PathBuf::from("/games")),
            ..preferences()
        };
        let form = project(Some(&prefs), Some(Path::new("/default"))).unwrap();
        assert_eq!(form.downloads_path, PathBuf::from("/games"));
    }

    #[test]
    fn unresolved_default_projects_empty_path() {
        let form = project(Some(&preferences()), None).unwrap();
        assert_eq!(form.downloads_path, PathBuf::new());
    }

    #[test]
    fn language_is_reduced_to_base_subtag() {
        let form = project(Some(&preferences()), None).unwrap();
        assert_eq!(form.language, "en");
    }

    #[test]
    fn notification_flags_are_copied() {
        let prefs = UserPreferences {
            download_notifications_enabled: false,
            repack_updates_notifications_enabled: true,
            ..preferences()
        };
        let form = project(Some(&prefs), None).unwrap();
        assert!(!form.download_notifications_enabled);
        assert!(form.repack_updates_notifications_enabled);
    }

    #[test]
    fn apply_updates_only_patched_fields() {
        let mut form = project(Some(&preferences()), Some(Path::new("/default"))).unwrap();
        let before = form.clone();

        form.apply(&PreferencesPatch::repack_updates_notifications(true));

        assert!(form.repack_updates_notifications_enabled);
        assert_eq!(
            Form {
                repack_updates_notifications_enabled: false,
                ..form
            },
            before
        );
    }
}
