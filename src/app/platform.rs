// SPDX-License-Identifier: MPL-2.0
//! Native platform services used by the settings screens.
//!
//! Both functions are `async` so they can be driven by `Task::perform` and
//! never block the UI thread.

use crate::config::FALLBACK_DOWNLOADS_DIR_NAME;
use std::path::{Path, PathBuf};

/// Resolves the OS downloads directory.
///
/// Falls back to `~/Downloads` when the platform does not advertise one, and
/// to `None` when not even a home directory is known.
pub async fn default_downloads_path() -> Option<PathBuf> {
    resolve_default_downloads_path(dirs::download_dir(), dirs::home_dir())
}

fn resolve_default_downloads_path(
    download_dir: Option<PathBuf>,
    home_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    download_dir.or_else(|| home_dir.map(|home| home.join(FALLBACK_DOWNLOADS_DIR_NAME)))
}

/// Opens the native directory picker.
///
/// `current` pre-selects the starting folder when it exists. Returns `None`
/// when the user cancels the dialog.
pub async fn pick_directory(current: Option<PathBuf>, title: String) -> Option<PathBuf> {
    let mut dialog = rfd::AsyncFileDialog::new().set_title(title);

    if let Some(dir) = current.as_deref().filter(|dir| dir.is_dir()) {
        dialog = dialog.set_directory(dir);
    }

    let picked = dialog
        .pick_folder()
        .await
        .map(|handle| handle.path().to_path_buf());

    match &picked {
        Some(path) => tracing::info!(path = %path.display(), "downloads directory picked"),
        None => tracing::debug!("directory picker cancelled"),
    }
    picked
}

/// Display form of a path for read-only text fields.
#[must_use]
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
