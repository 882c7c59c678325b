// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`settings`] - General preferences (downloads folder, language, notifications)
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (containers, banners)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark theme following the system setting

pub mod design_tokens;
pub mod settings;
pub mod styles;
pub mod theming;
