//! Failure-tolerant persistence of application state.
//!
//! [`Persistence`] reads records once at startup and writes them on every
//! mutation. Storage problems never reach the caller: unreadable or malformed
//! records load as defaults, and a failed write switches the layer into
//! degraded mode, after which the application runs in memory only.

use super::backend::KeyValueStore;
use super::json::JsonFileStore;
use super::memory::MemoryStore;
use super::snapshot::{CatalogSnapshot, Envelope, PlaybackSnapshot, CATALOG_KEY, PLAYBACK_KEY};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Owner of the durable backend for one application instance.
pub struct Persistence {
    backend: Box<dyn KeyValueStore>,
    degraded: bool,
}

impl Persistence {
    /// Wraps an existing backend.
    #[must_use]
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            degraded: false,
        }
    }

    /// Opens the JSON file backend at `path`.
    ///
    /// Falls back to an in-memory backend in degraded mode if the file cannot
    /// be opened.
    #[must_use]
    pub fn open(path: &Path) -> Self {
        match JsonFileStore::open(path) {
            Ok(store) => Self::new(Box::new(store)),
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "storage unavailable, continuing in memory");
                Self {
                    backend: Box::new(MemoryStore::default()),
                    degraded: true,
                }
            }
        }
    }

    /// Creates a persistence layer that never touches the filesystem.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::default()))
    }

    /// Returns `true` once storage has failed and writes are being skipped.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Loads favorites and filters, or defaults if absent or malformed.
    #[must_use]
    pub fn load_catalog(&self) -> CatalogSnapshot {
        self.load::<CatalogSnapshot>(CATALOG_KEY).sanitized()
    }

    pub fn save_catalog(&mut self, snapshot: &CatalogSnapshot) {
        self.save(CATALOG_KEY, snapshot);
    }

    /// Loads playback preferences, or defaults if absent or malformed.
    #[must_use]
    pub fn load_playback(&self) -> PlaybackSnapshot {
        let mut snapshot = self.load::<PlaybackSnapshot>(PLAYBACK_KEY);
        snapshot.volume = if snapshot.volume.is_finite() {
            snapshot.volume.clamp(0.0, 1.0)
        } else {
            PlaybackSnapshot::default().volume
        };
        snapshot
    }

    pub fn save_playback(&mut self, snapshot: &PlaybackSnapshot) {
        self.save(PLAYBACK_KEY, snapshot);
    }

    fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let _span = tracing::debug_span!("persistence_load", key = %key).entered();

        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("no stored record, using defaults");
                return T::default();
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored record, using defaults");
                return T::default();
            }
        };

        match serde_json::from_str::<Envelope<T>>(&raw) {
            Ok(envelope) => {
                tracing::debug!(version = envelope.version, "stored record restored");
                envelope.state
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored record is malformed, using defaults");
                T::default()
            }
        }
    }

    fn save<T: Serialize>(&mut self, key: &str, state: &T) {
        let _span = tracing::debug_span!("persistence_save", key = %key).entered();

        if self.degraded {
            tracing::trace!("storage degraded, skipping write");
            return;
        }

        let json = match serde_json::to_string(&Envelope::new(state)) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize record");
                return;
            }
        };

        if let Err(e) = self.backend.set(key, &json) {
            tracing::warn!(error = %e, "failed to write record, continuing in memory");
            self.degraded = true;
        }
    }
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persistence")
            .field("degraded", &self.degraded)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{CatalogError, Result};
    use crate::domain::CharacterStatus;
    use crate::storage::snapshot::PersistedFilters;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(CatalogError::Storage("unavailable".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(CatalogError::Storage("unavailable".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Err(CatalogError::Storage("unavailable".to_string()))
        }
    }

    #[test]
    fn catalog_round_trip() {
        let mut persistence = Persistence::in_memory();
        let snapshot = CatalogSnapshot {
            favorites: vec![1, 2, 3],
            filters: PersistedFilters {
                status: Some(CharacterStatus::Alive),
                ..Default::default()
            },
        };

        persistence.save_catalog(&snapshot);
        assert_eq!(persistence.load_catalog(), snapshot);
    }

    #[test]
    fn malformed_record_loads_defaults() {
        let store = MemoryStore::with_entries([(CATALOG_KEY, r#"{"state":{"favorites":"nope"}}"#)]);
        let persistence = Persistence::new(Box::new(store));
        assert_eq!(persistence.load_catalog(), CatalogSnapshot::default());
    }

    #[test]
    fn broken_backend_degrades_quietly() {
        let mut persistence = Persistence::new(Box::new(BrokenStore));

        assert_eq!(persistence.load_catalog(), CatalogSnapshot::default());
        assert!(!persistence.is_degraded());

        persistence.save_catalog(&CatalogSnapshot::default());
        assert!(persistence.is_degraded());

        persistence.save_playback(&PlaybackSnapshot::default());
        assert!(persistence.is_degraded());
    }

    #[test]
    fn out_of_range_volume_is_clamped() {
        let store = MemoryStore::with_entries([(PLAYBACK_KEY, r#"{"state":{"isPlaying":false,"volume":3.5}}"#)]);
        let persistence = Persistence::new(Box::new(store));
        assert!((persistence.load_playback().volume - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn unopenable_path_falls_back_to_memory() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        let persistence = Persistence::open(&blocker.join("storage.json"));
        assert!(persistence.is_degraded());
        assert_eq!(persistence.load_catalog(), CatalogSnapshot::default());
    }
}
