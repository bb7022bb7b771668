//! Filesystem path resolution for user-local data.
//!
//! This module locates the per-user data directory where the preference file
//! lives, falling back to a relative directory when the platform provides no
//! data home (e.g. stripped-down containers).

use std::path::PathBuf;

/// Application directory name within the platform data home.
const APP_DIR: &str = "appdex";

/// Returns the data directory for appdex storage.
///
/// Resolves to `<platform data dir>/appdex`, e.g.
/// `~/.local/share/appdex` on Linux or
/// `~/Library/Application Support/appdex` on macOS. When the platform data
/// directory cannot be determined, falls back to `.appdex` in the current
/// working directory.
///
/// The preference file `preferences.json` is located within this directory.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".appdex"), |base| base.join(APP_DIR))
}

/// Returns the full path of the preference file.
#[must_use]
pub fn preferences_path() -> PathBuf {
    data_dir().join(crate::storage::PREFERENCES_FILE)
}
