//! Key-value storage backend abstraction.
//!
//! Durable state is a handful of namespaced JSON records, so the backend is a
//! plain string key-value store. This allows switching between the file
//! backend and the in-memory backend without touching the state layer.

use crate::domain::error::Result;

/// Abstraction over durable key-value backends.
///
/// # Implementations
///
/// - [`JsonFileStore`](super::JsonFileStore): JSON file with atomic writes (default)
/// - [`MemoryStore`](super::MemoryStore): process-local map, used in tests and
///   as the degraded fallback
///
/// # Examples
///
/// ```
/// use multiverse_catalog::storage::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::default();
/// store.set("rick-morty-storage", "{}")?;
/// assert_eq!(store.get("rick-morty-storage")?.as_deref(), Some("{}"));
/// # Ok::<(), multiverse_catalog::CatalogError>(())
/// ```
pub trait KeyValueStore: Send {
    /// Returns the raw value stored under `key`, or `Ok(None)` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. Backends may have updated their
    /// in-memory view before failing.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key` if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn remove(&mut self, key: &str) -> Result<()>;
}
