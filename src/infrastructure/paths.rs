//! Platform locations for catalog data.
//!
//! Everything the crate writes lives in one per-user directory: the state file
//! and the rotating log.

use std::path::{Path, PathBuf};

/// Name of the per-user data directory.
const APP_DIR: &str = "multiverse-catalog";

const STORAGE_FILE: &str = "storage.json";

const LOG_FILE: &str = "multiverse-catalog.log";

/// Returns the data directory for catalog storage.
///
/// Resolves to the platform's local data directory (for example
/// `~/.local/share/multiverse-catalog` on Linux). Falls back to the system
/// temp directory when the platform reports no data directory.
///
/// # Examples
///
/// ```
/// use multiverse_catalog::infrastructure::default_data_dir;
///
/// assert!(default_data_dir().ends_with("multiverse-catalog"));
/// ```
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
}

/// Default location of the persisted state file.
#[must_use]
pub fn default_storage_path() -> PathBuf {
    default_data_dir().join(STORAGE_FILE)
}

/// Log file kept next to the state file at `storage_path`.
///
/// # Examples
///
/// ```
/// use multiverse_catalog::infrastructure::log_path;
/// use std::path::Path;
///
/// assert_eq!(
///     log_path(Path::new("/data/catalog/storage.json")),
///     Path::new("/data/catalog/multiverse-catalog.log")
/// );
/// ```
#[must_use]
pub fn log_path(storage_path: &Path) -> PathBuf {
    storage_path
        .parent()
        .map_or_else(default_data_dir, Path::to_path_buf)
        .join(LOG_FILE)
}
