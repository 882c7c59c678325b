// SPDX-License-Identifier: MPL-2.0
//! Light/Dark theme selection following the operating system.

use iced::Theme;

/// Detects the system theme, defaulting to dark when detection fails.
#[must_use]
pub fn system_theme() -> Theme {
    theme_for(dark_light::detect().ok())
}

fn theme_for(mode: Option<dark_light::Mode>) -> Theme {
    match mode {
        Some(dark_light::Mode::Light) => Theme::Light,
        _ => Theme::Dark,
    }
}
