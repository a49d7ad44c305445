//! Path helpers for backing file locations.
//!
//! Responsibilities:
//! - Expand a leading `~` to the user's home directory.
//! - Compute the timestamped backup path used by `save`.
//!
//! Does NOT handle:
//! - File I/O.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, SecondsFormat};

/// Expand a leading `~` (alone or followed by a separator) to the home directory.
///
/// Paths without a leading `~`, `~user` forms, and systems without a
/// resolvable home directory are returned unchanged.
pub fn expand_home(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match directories::BaseDirs::new() {
        Some(dirs) => dirs.home_dir().join(rest),
        None => {
            tracing::debug!(path = %path.display(), "No home directory, leaving path as-is");
            path.to_path_buf()
        }
    }
}

/// `<path><RFC3339 timestamp>`, e.g. `app.conf2024-05-01T10:00:00+02:00`.
pub fn backup_path(path: &Path, at: DateTime<Local>) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(at.to_rfc3339_opts(SecondsFormat::Secs, true));
    PathBuf::from(name)
}

/// Sibling file the new content is written to before it replaces `path`.
pub(crate) fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
