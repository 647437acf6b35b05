//! JSON file-based key-value backend.
//!
//! All records live in one human-readable JSON file. Writes go to a temporary
//! file first and are then renamed over the target, so a crash never leaves a
//! half-written file behind.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - the whole file is loaded into memory once
//! - **Write**: O(n) - the whole container is serialized on every change
//! - **Best for**: a few small records written on user interaction

use crate::domain::error::{CatalogError, Result};
use crate::storage::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current version of the on-disk container.
const FORMAT_VERSION: u32 = 1;

/// JSON storage container format.
///
/// Values are kept as raw JSON strings so each record owner controls its own
/// schema and can reject a malformed record without affecting the others.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// Raw records keyed by namespace.
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

/// JSON file key-value backend.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. It is owned by the persistence layer of
/// a single application instance.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "rick-morty-storage": "{\"state\":{\"favorites\":[1,2]},\"version\":0}"
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonFileStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy of the file, loaded on creation.
    data: StorageData,
}

impl JsonFileStore {
    /// Creates or opens a JSON file store.
    ///
    /// If the file exists, its records are loaded. Otherwise the store starts
    /// empty and the file is created on the first write. Parent directories
    /// are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but contains invalid JSON
    /// - File permissions prevent reading
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use multiverse_catalog::storage::JsonFileStore;
    ///
    /// let store = JsonFileStore::open("/tmp/multiverse-catalog/storage.json")?;
    /// # Ok::<(), multiverse_catalog::CatalogError>(())
    /// ```
    pub fn open(file_path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = file_path.into();
        tracing::debug!(path = ?file_path, "opening JSON store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty store");
            StorageData::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "JSON store opened");

        Ok(Self { file_path, data })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| CatalogError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            entries = data.entries.len(),
            "loaded storage data"
        );

        Ok(data)
    }

    /// Writes the container to disk using write-to-temp + rename.
    fn save_to_file(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| CatalogError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!(path = ?self.file_path, "store saved");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_store_set", key = %key, bytes = value.len()).entered();

        if self.data.entries.get(key).is_some_and(|current| current == value) {
            tracing::trace!("value unchanged, skipping save");
            return Ok(());
        }

        self.data.entries.insert(key.to_string(), value.to_string());
        self.save_to_file()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_store_remove", key = %key).entered();

        if self.data.entries.remove(key).is_some() {
            self.save_to_file()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("rick-morty-storage", r#"{"state":{}}"#).unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("rick-morty-storage").unwrap().as_deref(),
            Some(r#"{"state":{}}"#)
        );
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn remove_deletes_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("a", "1").unwrap();
        store.remove("a").unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("a").unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json").unwrap();

        let err = JsonFileStore::open(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Storage(_)));
    }
}
