// SPDX-License-Identifier: MPL-2.0
//! `iced_settings` is a general settings panel built with the Iced GUI framework.
//!
//! It lets the user pick a downloads directory, choose the interface language
//! among the bundled Fluent translations and toggle two notification
//! preferences. Preferences are persisted to a `settings.toml` file in the
//! platform config directory.

#![doc(html_root_url = "https://docs.rs/iced_settings/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
