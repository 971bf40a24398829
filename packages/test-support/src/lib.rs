//! Shared helpers for integration tests: logging bootstrap and unique names
//! for files created during a test run.

pub mod logging;

use std::path::{Path, PathBuf};

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use test_support::unique_str;
///
/// let id1 = unique_str("match");
/// let id2 = unique_str("match");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("match-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A settings file path inside `dir` that no other test uses.
///
/// # Examples
/// ```
/// use test_support::unique_settings_path;
///
/// let a = unique_settings_path(std::path::Path::new("/tmp"));
/// let b = unique_settings_path(std::path::Path::new("/tmp"));
/// assert_ne!(a, b);
/// assert_eq!(a.extension().unwrap(), "json");
/// ```
pub fn unique_settings_path(dir: &Path) -> PathBuf {
    dir.join(format!("{}.json", unique_str("settings")))
}
