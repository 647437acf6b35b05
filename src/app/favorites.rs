//! Observable favorites list.

use super::observer::{SubscriptionId, Subscribers};
use std::collections::HashSet;

/// Ordered favorite character ids.
///
/// The sequence keeps insertion order and never holds duplicates. A hash set
/// mirrors it for constant-time membership checks.
#[derive(Debug, Default)]
pub struct FavoritesState {
    ids: Vec<u32>,
    index: HashSet<u32>,
    subscribers: Subscribers<Vec<u32>>,
}

impl FavoritesState {
    /// Builds the state from stored ids, dropping repeats and zeros.
    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = u32>) -> Self {
        let mut state = Self::default();
        for id in ids {
            if id != 0 && state.index.insert(id) {
                state.ids.push(id);
            }
        }
        state
    }

    /// Adds `id` at the end if absent, removes it otherwise.
    ///
    /// Returns whether `id` is a favorite afterwards. Id 0 is not a valid
    /// character and is rejected without notifying subscribers.
    pub fn toggle_favorite(&mut self, id: u32) -> bool {
        if id == 0 {
            return false;
        }
        let added = if self.index.remove(&id) {
            self.ids.retain(|existing| *existing != id);
            false
        } else {
            self.index.insert(id);
            self.ids.push(id);
            true
        };

        tracing::debug!(id, added, total = self.ids.len(), "favorite toggled");
        self.subscribers.notify(&self.ids);
        added
    }

    #[must_use]
    pub fn is_favorite(&self, id: u32) -> bool {
        self.index.contains(&id)
    }

    #[must_use]
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&Vec<u32>) + Send + 'static) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}
