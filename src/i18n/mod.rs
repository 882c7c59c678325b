// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, stored preferences, or system settings
//! - `.ftl` translation files embedded at compile time
//! - Runtime language switching through an explicit [`fluent::I18n`] context
//! - Native language names for language pickers
//! - Fallback to default locale when translations are missing

pub mod fluent;
pub mod language_names;
