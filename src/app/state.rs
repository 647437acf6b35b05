//! Application state container.
//!
//! [`AppState`] groups the three observable stores (filters, favorites and
//! playback) with the active [`View`]. It is owned by the runtime and mutated
//! only through the event handler.
//!
//! # Example
//!
//! ```rust
//! use multiverse_catalog::app::AppState;
//! use multiverse_catalog::storage::{CatalogSnapshot, PlaybackSnapshot};
//!
//! let catalog = CatalogSnapshot { favorites: vec![1, 2], ..Default::default() };
//! let state = AppState::from_snapshots(catalog, PlaybackSnapshot::default());
//! assert!(state.favorites.is_favorite(2));
//! assert_eq!(state.filters.page(), 1);
//! ```

use super::favorites::FavoritesState;
use super::filters::FilterState;
use super::modes::View;
use super::playback::PlaybackState;
use crate::storage::{CatalogSnapshot, PlaybackSnapshot};

/// Central application state container.
#[derive(Debug, Default)]
pub struct AppState {
    /// Search criteria and current page of the character list.
    pub filters: FilterState,

    /// Favorite character ids in the order they were added.
    pub favorites: FavoritesState,

    /// Background music preferences.
    pub playback: PlaybackState,

    /// Screen currently shown.
    pub view: View,

    /// Number of pages the remote reports for the current filters.
    ///
    /// `None` while no list for these filters has loaded. Used to stop paging
    /// past the end.
    pub page_count: Option<u32>,
}

impl AppState {
    /// Rebuilds state from what was persisted. The page always starts at 1.
    #[must_use]
    pub fn from_snapshots(catalog: CatalogSnapshot, playback: PlaybackSnapshot) -> Self {
        Self {
            filters: FilterState::new(catalog.filters.into_filters()),
            favorites: FavoritesState::from_ids(catalog.favorites),
            playback: PlaybackState::new(playback),
            view: View::default(),
            page_count: None,
        }
    }

    /// The record written under the catalog storage key.
    #[must_use]
    pub fn catalog_snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            favorites: self.favorites.ids().to_vec(),
            filters: self.filters.persisted(),
        }
    }

    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.page_count.map_or(true, |count| self.filters.page() < count)
    }

    #[must_use]
    pub fn has_previous_page(&self) -> bool {
        self.filters.page() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CharacterStatus;
    use crate::storage::PersistedFilters;

    #[test]
    fn snapshot_excludes_page() {
        let catalog = CatalogSnapshot {
            favorites: vec![1, 2, 3],
            filters: PersistedFilters {
                status: Some(CharacterStatus::Alive),
                ..Default::default()
            },
        };
        let mut state = AppState::from_snapshots(catalog.clone(), PlaybackSnapshot::default());
        state.filters.set_page(5);

        assert_eq!(state.catalog_snapshot(), catalog);
    }

    #[test]
    fn paging_bounds() {
        let mut state = AppState::default();
        assert!(state.has_next_page());
        assert!(!state.has_previous_page());

        state.page_count = Some(1);
        assert!(!state.has_next_page());
    }
}
