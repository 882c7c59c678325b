// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::Config;
use crate::ui::settings;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Settings(settings::Message),
    /// Result of reading `settings.toml` at startup, with an optional
    /// warning i18n key when the file was unreadable.
    PreferencesLoaded {
        config: Config,
        warning: Option<String>,
    },
    /// The OS downloads directory, once resolved.
    DefaultDownloadsPathResolved(Option<PathBuf>),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_SETTINGS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
