// SPDX-License-Identifier: MPL-2.0
//! General settings panel: downloads folder, display language and
//! notification preferences.
//!
//! The panel never owns the preferences. It keeps a mirrored [`Form`] that is
//! recomputed through [`State::sync`] whenever the owner's preferences or the
//! resolved OS downloads folder change, and reports every edit as an
//! [`Event`] carrying a [`PreferencesPatch`]. Edits are reflected in the form
//! immediately; there is no separate "save" step.
//!
//! # Examples
//!
//! ```no_run
//! use iced_settings::config::UserPreferences;
//! use iced_settings::i18n::fluent::I18n;
//! use iced_settings::ui::settings::{Event, Message, State};
//!
//! let i18n = I18n::default();
//! let preferences = UserPreferences::default();
//!
//! let mut settings = State::new(i18n.available_locales());
//! settings.sync(Some(&preferences));
//!
//! if let Event::PreferencesChanged(patch) = settings.update(Message::ToggleDownloadNotifications) {
//!     println!("forward {patch:?} to the preferences owner");
//! }
//! ```

mod form;
mod language;
mod view;

pub use form::{project, Form};
pub use language::{language_options, LanguageOption};
pub use view::ViewContext;

use crate::config::{PreferencesPatch, UserPreferences};
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Messages emitted by the settings widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// "Change" button next to the downloads path.
    ChooseDownloadsPath,
    /// Result of the directory picker; `None` when cancelled.
    DownloadsPathPicked(Option<PathBuf>),
    LanguageSelected(LanguageOption),
    ToggleDownloadNotifications,
    ToggleRepackUpdatesNotifications,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Forward this partial update to the preferences owner.
    PreferencesChanged(PreferencesPatch),
    /// The user picked a language: forward `{ language }` to the preferences
    /// owner and switch the active locale to it.
    LanguageSelected(String),
    /// Open the native directory picker, starting at `current` when known.
    PickDownloadsDirectory { current: Option<PathBuf> },
}

/// Local state of the general settings panel.
#[derive(Debug, Clone, Default)]
pub struct State {
    form: Form,
    language_options: Vec<LanguageOption>,
    default_downloads_path: Option<PathBuf>,
}

impl State {
    /// Creates the panel with one language option per available bundle.
    #[must_use]
    pub fn new(available_locales: &[LanguageIdentifier]) -> Self {
        Self {
            language_options: language_options(available_locales),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn form(&self) -> &Form {
        &self.form
    }

    #[must_use]
    pub fn language_options(&self) -> &[LanguageOption] {
        &self.language_options
    }

    /// The option matching the form language, if it has a bundle.
    #[must_use]
    pub fn selected_language(&self) -> Option<&LanguageOption> {
        self.language_options
            .iter()
            .find(|option| option.option == self.form.language)
    }

    #[must_use]
    pub fn default_downloads_path(&self) -> Option<&PathBuf> {
        self.default_downloads_path.as_ref()
    }

    /// Re-derives the form from the owner's preferences.
    ///
    /// A `None` preferences object leaves the current form untouched.
    pub fn sync(&mut self, preferences: Option<&UserPreferences>) {
        if let Some(form) = project(preferences, self.default_downloads_path.as_deref()) {
            self.form = form;
        }
    }

    /// Stores the resolved OS downloads folder and re-syncs the form.
    pub fn set_default_downloads_path(
        &mut self,
        path: Option<PathBuf>,
        preferences: Option<&UserPreferences>,
    ) {
        self.default_downloads_path = path;
        self.sync(preferences);
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ChooseDownloadsPath => {
                let current = Some(self.form.downloads_path.clone())
                    .filter(|path| !path.as_os_str().is_empty());
                Event::PickDownloadsDirectory { current }
            }
            Message::DownloadsPathPicked(Some(path)) => {
                self.change(PreferencesPatch::downloads_path(path))
            }
            Message::DownloadsPathPicked(None) => Event::None,
            Message::LanguageSelected(option) => {
                self.form.apply(&PreferencesPatch::language(option.option.clone()));
                Event::LanguageSelected(option.option)
            }
            Message::ToggleDownloadNotifications => self.change(
                PreferencesPatch::download_notifications(!self.form.download_notifications_enabled),
            ),
            Message::ToggleRepackUpdatesNotifications => {
                self.change(PreferencesPatch::repack_updates_notifications(
                    !self.form.repack_updates_notifications_enabled,
                ))
            }
        }
    }

    fn change(&mut self, patch: PreferencesPatch) -> Event {
        self.form.apply(&patch);
        Event::PreferencesChanged(patch)
    }
}
