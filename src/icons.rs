//! Icon path resolution with idempotent fallback.
//!
//! The UI maps a record's name to an image resource by convention:
//! `<name>.png` under the icon directory. When the primary image is missing,
//! [`resolve_icon`] substitutes the fixed fallback image. The substitution is
//! idempotent: resolving the fallback name itself (or a missing fallback file)
//! still yields the fallback path, so a broken fallback can never loop.

use std::path::{Path, PathBuf};

/// File name of the fallback icon within the icon directory.
pub const FALLBACK_ICON: &str = "start.png";

/// Returns the conventional icon path for a record name.
///
/// Purely name-based; does not touch the filesystem.
#[must_use]
pub fn icon_path(icon_dir: &Path, name: &str) -> PathBuf {
    icon_dir.join(format!("{name}.png"))
}

/// Returns the fallback icon path within the icon directory.
#[must_use]
pub fn fallback_icon_path(icon_dir: &Path) -> PathBuf {
    icon_dir.join(FALLBACK_ICON)
}

/// Resolves the icon to display for a record, substituting the fallback when
/// the primary file does not exist.
///
/// The fallback is returned as-is even if it is itself missing; callers get a
/// stable path either way and never re-enter resolution.
#[must_use]
pub fn resolve_icon(icon_dir: &Path, name: &str) -> PathBuf {
    let primary = icon_path(icon_dir, name);
    if primary.is_file() {
        primary
    } else {
        fallback_icon_path(icon_dir)
    }
}
