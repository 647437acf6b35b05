//! Observable filter and pagination state.

use super::observer::{SubscriptionId, Subscribers};
use crate::domain::{CharacterFilters, FilterPatch};
use crate::storage::PersistedFilters;

/// Current character search criteria plus the listeners watching them.
#[derive(Debug, Default)]
pub struct FilterState {
    filters: CharacterFilters,
    subscribers: Subscribers<CharacterFilters>,
}

impl FilterState {
    #[must_use]
    pub fn new(filters: CharacterFilters) -> Self {
        Self {
            filters,
            subscribers: Subscribers::default(),
        }
    }

    #[must_use]
    pub const fn current(&self) -> &CharacterFilters {
        &self.filters
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.filters.page
    }

    /// Merges `patch` into the criteria and returns to page 1.
    pub fn set_filters(&mut self, patch: FilterPatch) {
        self.filters.apply(patch);
        tracing::debug!(filters = ?self.filters, "filters updated");
        self.notify();
    }

    /// Clears every field and returns to page 1.
    pub fn reset_filters(&mut self) {
        self.filters = CharacterFilters::default();
        tracing::debug!("filters reset");
        self.notify();
    }

    /// Moves to page `page`, leaving the criteria untouched. Page 0 becomes 1.
    pub fn set_page(&mut self, page: u32) {
        self.filters.page = page.max(1);
        tracing::debug!(page = self.filters.page, "page changed");
        self.notify();
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&CharacterFilters) + Send + 'static) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// The fields that survive a restart.
    #[must_use]
    pub fn persisted(&self) -> PersistedFilters {
        PersistedFilters::from(&self.filters)
    }

    fn notify(&mut self) {
        self.subscribers.notify(&self.filters);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CharacterStatus, Gender};
    use std::sync::{Arc, Mutex};

    fn narrowed() -> FilterState {
        FilterState::new(CharacterFilters {
            name: Some("rick".to_string()),
            gender: Some(Gender::Male),
            page: 4,
            ..Default::default()
        })
    }

    #[test]
    fn set_filters_keeps_other_fields_and_resets_page() {
        let mut state = narrowed();
        state.set_filters(FilterPatch::status(Some(CharacterStatus::Dead)));

        let filters = state.current();
        assert_eq!(filters.page, 1);
        assert_eq!(filters.name.as_deref(), Some("rick"));
        assert_eq!(filters.gender, Some(Gender::Male));
        assert_eq!(filters.status, Some(CharacterStatus::Dead));
    }

    #[test]
    fn set_page_touches_only_the_page() {
        let mut state = narrowed();
        state.set_page(7);
        assert_eq!(state.page(), 7);
        assert_eq!(state.current().name.as_deref(), Some("rick"));

        state.set_page(0);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = narrowed();
        state.reset_filters();
        assert_eq!(state.current(), &CharacterFilters::default());
    }

    #[test]
    fn listeners_see_every_mutation() {
        let pages = Arc::new(Mutex::new(Vec::new()));
        let mut state = narrowed();

        let sink = Arc::clone(&pages);
        state.subscribe(move |filters| sink.lock().unwrap().push(filters.page));

        state.set_page(2);
        state.set_filters(FilterPatch::name("morty"));
        state.reset_filters();

        assert_eq!(*pages.lock().unwrap(), vec![2, 1, 1]);
    }
}
