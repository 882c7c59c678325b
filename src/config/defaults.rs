// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **General**: Language fallback
//! - **Notifications**: Which notification categories start enabled
//! - **Downloads**: Fallback folder name when the OS has no download directory

// ==========================================================================
// General Defaults
// ==========================================================================

/// Language used when neither the CLI, the stored preferences nor the OS
/// provide a locale with a matching bundle.
pub const DEFAULT_LANGUAGE: &str = "en";

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Whether "download finished" notifications are enabled on first launch.
pub const DEFAULT_DOWNLOAD_NOTIFICATIONS_ENABLED: bool = true;

/// Whether "new repacks available" notifications are enabled on first launch.
pub const DEFAULT_REPACK_UPDATES_NOTIFICATIONS_ENABLED: bool = false;

// ==========================================================================
// Downloads Defaults
// ==========================================================================

/// Folder appended to the home directory when the platform does not expose
/// a dedicated downloads directory.
pub const FALLBACK_DOWNLOADS_DIR_NAME: &str = "Downloads";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!DEFAULT_LANGUAGE.is_empty());
    assert!(!FALLBACK_DOWNLOADS_DIR_NAME.is_empty());
};
