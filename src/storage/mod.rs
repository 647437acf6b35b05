//! Storage layer for durable application state.
//!
//! Favorites, the filter subset and playback preferences are persisted as
//! namespaced JSON records in a key-value backend, read once at startup and
//! rewritten on every mutation.
//!
//! # Modules
//!
//! - `backend`: Key-value trait abstraction for backend implementations
//! - `json`: JSON file backend with atomic writes
//! - `memory`: In-memory backend
//! - `snapshot`: Persisted record formats and storage keys
//! - `persistence`: Failure-tolerant load/save of application records

pub mod backend;
pub mod json;
pub mod memory;
pub mod persistence;
pub mod snapshot;

pub use backend::KeyValueStore;
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use persistence::Persistence;
pub use snapshot::{CatalogSnapshot, PersistedFilters, PlaybackSnapshot, CATALOG_KEY, PLAYBACK_KEY};
