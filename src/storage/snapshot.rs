//! Persisted record formats.
//!
//! Records are wrapped in a `{"state": ..., "version": N}` envelope so that a
//! future schema change can be detected on load. Field names follow the
//! camelCase convention of the stored records.

use crate::domain::{CharacterFilters, CharacterStatus, Gender};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Storage key of the favorites and filter record.
pub const CATALOG_KEY: &str = "rick-morty-storage";

/// Storage key of the playback preferences record.
pub const PLAYBACK_KEY: &str = "rick-morty-music-storage";

/// Schema version written into every envelope.
pub const RECORD_VERSION: u32 = 0;

/// Versioned wrapper around a persisted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub state: T,
    #[serde(default)]
    pub version: u32,
}

impl<T> Envelope<T> {
    pub const fn new(state: T) -> Self {
        Self {
            state,
            version: RECORD_VERSION,
        }
    }
}

/// The persisted subset of [`CharacterFilters`]; the page is never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CharacterStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

impl From<&CharacterFilters> for PersistedFilters {
    fn from(filters: &CharacterFilters) -> Self {
        Self {
            name: filters.name.clone(),
            status: filters.status,
            species: filters.species.clone(),
            gender: filters.gender,
        }
    }
}

impl PersistedFilters {
    /// Restores full criteria, starting again from page 1.
    #[must_use]
    pub fn into_filters(self) -> CharacterFilters {
        CharacterFilters {
            name: self.name.filter(|n| !n.is_empty()),
            status: self.status,
            species: self.species.filter(|s| !s.is_empty()),
            gender: self.gender,
            page: 1,
        }
    }
}

/// Favorites plus the filter subset, stored under [`CATALOG_KEY`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub favorites: Vec<u32>,
    #[serde(default)]
    pub filters: PersistedFilters,
}

impl CatalogSnapshot {
    /// Drops zero ids and repeated ids, keeping the first occurrence.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        let mut seen = HashSet::with_capacity(self.favorites.len());
        self.favorites.retain(|id| *id > 0 && seen.insert(*id));
        self
    }
}

/// Background music preferences, stored under [`PLAYBACK_KEY`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    #[serde(rename = "isPlaying", default)]
    pub is_playing: bool,
    #[serde(default = "default_volume")]
    pub volume: f32,
}

impl Default for PlaybackSnapshot {
    fn default() -> Self {
        Self {
            is_playing: false,
            volume: default_volume(),
        }
    }
}

const fn default_volume() -> f32 {
    0.5
}
