// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the settings panel.
//!
//! The `App` struct owns the user preferences and the localization context.
//! The settings panel only receives read access to both and reports edits
//! back as events, which `update` turns into preference writes, locale
//! switches and native dialogs.

mod message;
pub mod paths;
mod persistence;
pub mod platform;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, PreferencesPatch, UserPreferences};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::settings::State as SettingsState;
use crate::ui::theming;
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    /// Locale forced on the command line; stored preferences cannot override it.
    cli_lang: Option<String>,
    /// `None` until `settings.toml` has been read.
    preferences: Option<UserPreferences>,
    /// Edits made before `preferences` was loaded, replayed on load.
    pending_patches: Vec<PreferencesPatch>,
    settings: SettingsState,
    /// `--config-dir`, ahead of the env var and platform directory.
    config_dir: Option<PathBuf>,
    /// i18n key of the warning raised while loading the config file.
    config_warning: Option<String>,
    /// Last failed save, cleared by the next successful one.
    save_error: Option<Error>,
    theme: Theme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("preferences", &self.preferences)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 560;
pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 420;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        let i18n = I18n::default();
        let settings = SettingsState::new(i18n.available_locales());
        Self {
            i18n,
            cli_lang: None,
            preferences: None,
            pending_patches: Vec::new(),
            settings,
            config_dir: None,
            config_warning: None,
            save_error: None,
            theme: Theme::Dark,
        }
    }
}

impl App {
    /// Initializes application state and kicks off the two startup fetches:
    /// reading `settings.toml` and resolving the OS downloads directory.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), None);
        let settings = SettingsState::new(i18n.available_locales());

        let app = App {
            i18n,
            cli_lang: flags.lang,
            settings,
            config_dir: flags.config_dir.map(PathBuf::from),
            theme: theming::system_theme(),
            ..Self::default()
        };

        let config_dir = app.config_dir.clone();
        // Read settings.toml off the UI thread
        let load_preferences = Task::perform(
            async move {
                tokio::task::spawn_blocking(move || config::load_with_override(config_dir))
                    .await
                    .unwrap_or_else(|error| {
                        tracing::error!(%error, "settings loader task failed");
                        (
                            config::Config::default(),
                            Some("notification-config-load-error".to_string()),
                        )
                    })
            },
            |(config, warning)| Message::PreferencesLoaded { config, warning },
        );
        let resolve_default_path = Task::perform(
            platform::default_downloads_path(),
            Message::DefaultDownloadsPathResolved,
        );

        (app, Task::batch([load_preferences, resolve_default_path]))
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    /// Current preferences, `None` until loaded.
    pub fn preferences(&self) -> Option<&UserPreferences> {
        self.preferences.as_ref()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            cli_lang: self.cli_lang.as_deref(),
            preferences: &mut self.preferences,
            pending_patches: &mut self.pending_patches,
            settings: &mut self.settings,
            config_dir: self.config_dir.as_ref(),
            config_warning: &mut self.config_warning,
            save_error: &mut self.save_error,
        };

        match message {
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::PreferencesLoaded { config, warning } => {
                update::handle_preferences_loaded(&mut ctx, config, warning)
            }
            Message::DefaultDownloadsPathResolved(path) => {
                update::handle_default_downloads_path(&mut ctx, path)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            settings: &self.settings,
            config_warning: self.config_warning.as_deref(),
            save_error: self.save_error.as_ref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_app_starts_without_preferences() {
        let app = App::default();
        assert!(app.preferences().is_none());
        assert!(app.settings.form().downloads_path.as_os_str().is_empty());
    }

    #[test]
    fn title_is_localized() {
        let app = App::default();
        assert!(!app.title().starts_with("MISSING:"));
    }

    #[test]
    fn view_renders_without_preferences() {
        let app = App::default();
        let _element = app.view();
    }

    #[test]
    fn preferences_loaded_message_reaches_settings() {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let mut app = App {
            config_dir: Some(temp_dir.path().to_path_buf()),
            ..App::default()
        };

        let _ = app.update(Message::DefaultDownloadsPathResolved(Some(PathBuf::from(
            "/home/me/Downloads",
        ))));
        let _ = app.update(Message::PreferencesLoaded {
            config: config::Config::default(),
            warning: None,
        });

        assert!(app.preferences().is_some());
        assert_eq!(
            app.settings.form().downloads_path,
            PathBuf::from("/home/me/Downloads")
        );
    }

    #[test]
    fn config_dir_flag_is_carried_by_app() {
        let (app, _task) = App::new(Flags {
            lang: Some("en".to_string()),
            config_dir: Some("/tmp/iced-settings".to_string()),
        });
        assert_eq!(app.config_dir, Some(PathBuf::from("/tmp/iced-settings")));
    }

    #[test]
    fn toggle_before_load_keeps_stored_settings() {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let stored = UserPreferences {
            downloads_path: Some(PathBuf::from("/mnt/games")),
            download_notifications_enabled: true,
            repack_updates_notifications_enabled: true,
            language: "fr".to_string(),
        };
        config::save_with_override(
            &config::Config::from(&stored),
            Some(temp_dir.path().to_path_buf()),
        )
        .expect("seed settings");
        let mut app = App {
            config_dir: Some(temp_dir.path().to_path_buf()),
            ..App::default()
        };

        let _ = app.update(Message::Settings(
            crate::ui::settings::Message::ToggleRepackUpdatesNotifications,
        ));
        let (config, warning) = config::load_with_override(app.config_dir.clone());
        assert!(warning.is_none());
        assert_eq!(
            config.clone().into_preferences("en"),
            stored,
            "an early edit must not rewrite the file"
        );

        let _ = app.update(Message::PreferencesLoaded { config, warning });

        let (reloaded, _) = config::load_with_override(app.config_dir.clone());
        let reloaded = reloaded.into_preferences("en");
        assert_eq!(app.preferences(), Some(&reloaded));
        assert_eq!(reloaded.language, "fr");
        assert_eq!(reloaded.downloads_path, Some(PathBuf::from("/mnt/games")));
        assert!(reloaded.download_notifications_enabled);
        assert!(reloaded.repack_updates_notifications_enabled);
    }

    #[test]
    fn window_minimum_fits_inside_default() {
        let settings = window_settings();
        let min = settings.min_size.expect("min size set");
        assert!(min.width <= settings.size.width);
        assert!(min.height <= settings.size.height);
    }
}
