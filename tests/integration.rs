// SPDX-License-Identifier: MPL-2.0
use iced_settings::config::{self, Config, UserPreferences};
use iced_settings::i18n::fluent::I18n;
use iced_settings::ui::settings::{Event, Message, State};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_file_path = dir.path().join("settings.toml");

    let mut preferences = UserPreferences {
        language: "en-US".to_string(),
        ..UserPreferences::default()
    };
    config::save_to_path(&Config::from(&preferences), &config_file_path)
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&config_file_path)
        .expect("Failed to load initial config from path")
        .into_preferences("en");
    let i18n_en = I18n::new(None, Some(&loaded.language));
    assert_eq!(i18n_en.current_locale().to_string(), "en");

    preferences.language = "fr".to_string();
    config::save_to_path(&Config::from(&preferences), &config_file_path)
        .expect("Failed to write french config file");

    let loaded = config::load_from_path(&config_file_path)
        .expect("Failed to load french config from path")
        .into_preferences("en");
    let i18n_fr = I18n::new(None, Some(&loaded.language));
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_settings_panel_edits_round_trip_through_disk() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let i18n = I18n::new(Some("en".to_string()), None);
    let mut panel = State::new(i18n.available_locales());
    let mut preferences = UserPreferences::default();

    panel.set_default_downloads_path(Some(PathBuf::from("/home/me/Downloads")), None);
    panel.sync(Some(&preferences));
    assert_eq!(
        panel.form().downloads_path,
        PathBuf::from("/home/me/Downloads")
    );

    let messages = [
        Message::ToggleDownloadNotifications,
        Message::ToggleRepackUpdatesNotifications,
        Message::DownloadsPathPicked(Some(PathBuf::from("/mnt/games"))),
    ];
    for message in messages {
        match panel.update(message) {
            Event::PreferencesChanged(patch) => {
                preferences.apply(&patch);
                config::save_with_override(
                    &Config::from(&preferences),
                    Some(dir.path().to_path_buf()),
                )
                .expect("Failed to save preferences");
                panel.sync(Some(&preferences));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    let (reloaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    let reloaded = reloaded.into_preferences("en");
    assert_eq!(reloaded, preferences);
    assert_eq!(reloaded.downloads_path, Some(PathBuf::from("/mnt/games")));
    assert_ne!(
        reloaded.download_notifications_enabled,
        UserPreferences::default().download_notifications_enabled
    );
    assert_ne!(
        reloaded.repack_updates_notifications_enabled,
        UserPreferences::default().repack_updates_notifications_enabled
    );
}

#[test]
fn test_corrupt_config_falls_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[general\nlanguage = ")
        .expect("Failed to write corrupt config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn test_every_bundle_translates_panel_labels() {
    let keys = [
        "settings-title",
        "settings-downloads-path",
        "settings-change",
        "settings-language",
        "settings-notifications",
        "settings-enable-download-notifications",
        "settings-enable-repack-list-notifications",
    ];
    let mut i18n = I18n::new(Some("en".to_string()), None);
    let locales = i18n.available_locales().to_vec();
    assert!(locales.len() >= 2);

    for locale in locales {
        assert!(i18n.set_locale(&locale));
        for key in keys {
            let value = i18n.tr(key);
            assert!(
                !value.starts_with("MISSING:"),
                "{locale} is missing {key}"
            );
        }
    }
}

#[test]
fn test_language_options_use_native_names() {
    let i18n = I18n::new(Some("en".to_string()), None);
    let panel = State::new(i18n.available_locales());

    let french = panel
        .language_options()
        .iter()
        .find(|option| option.option == "fr")
        .expect("fr bundle should be embedded");
    assert_eq!(french.to_string(), "Français");
}
