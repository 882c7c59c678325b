// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers the main `update`
//! function dispatches to.

use super::{persistence, platform, Message};
use crate::config::{Config, PreferencesPatch, UserPreferences};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::settings::{self, Event as SettingsEvent, State as SettingsState};
use iced::Task;
use std::path::PathBuf;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub cli_lang: Option<&'a str>,
    pub preferences: &'a mut Option<UserPreferences>,
    /// Edits made before `preferences` was loaded, in order.
    pub pending_patches: &'a mut Vec<PreferencesPatch>,
    pub settings: &'a mut SettingsState,
    pub config_dir: Option<&'a PathBuf>,
    pub config_warning: &'a mut Option<String>,
    pub save_error: &'a mut Option<Error>,
}

/// Stores the preferences read at startup and re-syncs the settings panel.
///
/// Edits deferred while loading are replayed on top of the stored values and
/// persisted once. The stored language only drives the active locale when no
/// `--lang` flag was given.
pub fn handle_preferences_loaded(
    ctx: &mut UpdateContext<'_>,
    config: Config,
    warning: Option<String>,
) -> Task<Message> {
    let fallback_language = ctx.i18n.current_locale().to_string();
    let mut preferences = config.into_preferences(&fallback_language);

    let pending = std::mem::take(ctx.pending_patches);
    if !pending.is_empty() {
        tracing::debug!(count = pending.len(), "replaying edits made while loading");
        for patch in &pending {
            preferences.apply(patch);
        }
        *ctx.save_error =
            persistence::persist_preferences(&preferences, ctx.config_dir.cloned()).err();
    }

    if ctx.cli_lang.is_none() {
        persistence::apply_language_change(ctx.i18n, &preferences.language);
    }

    tracing::debug!(?preferences, "preferences loaded");
    *ctx.config_warning = warning;
    ctx.settings.sync(Some(&preferences));
    *ctx.preferences = Some(preferences);
    Task::none()
}

/// Hands the resolved OS downloads directory to the settings panel.
pub fn handle_default_downloads_path(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    if path.is_none() {
        tracing::warn!("no default downloads directory on this system");
    }
    ctx.settings
        .set_default_downloads_path(path, ctx.preferences.as_ref());
    Task::none()
}

/// Handles settings component messages.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match ctx.settings.update(message) {
        SettingsEvent::None => Task::none(),
        SettingsEvent::PreferencesChanged(patch) => {
            update_preferences(ctx, &patch);
            Task::none()
        }
        SettingsEvent::LanguageSelected(code) => {
            update_preferences(ctx, &PreferencesPatch::language(code.clone()));
            persistence::apply_language_change(ctx.i18n, &code);
            Task::none()
        }
        SettingsEvent::PickDownloadsDirectory { current } => {
            let title = ctx.i18n.tr("settings-choose-downloads-dialog-title");
            Task::perform(platform::pick_directory(current, title), |picked| {
                Message::Settings(settings::Message::DownloadsPathPicked(picked))
            })
        }
    }
}

/// Applies a partial update to the owned preferences, persists them and
/// re-syncs the settings panel from the result.
///
/// Before the stored preferences are loaded the patch is queued instead, so
/// the file on disk is never rewritten from defaults.
pub fn update_preferences(ctx: &mut UpdateContext<'_>, patch: &PreferencesPatch) {
    let Some(preferences) = ctx.preferences.as_mut() else {
        tracing::debug!(?patch, "preferences not loaded yet, deferring edit");
        ctx.pending_patches.push(patch.clone());
        return;
    };
    preferences.apply(patch);

    *ctx.save_error = persistence::persist_preferences(preferences, ctx.config_dir.cloned()).err();
    ctx.settings.sync(Some(&*preferences));
}
