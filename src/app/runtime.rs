//! Application runtime wiring state, persistence and coordinators together.

use super::actions::Action;
use super::handler::{handle_event, Event};
use super::observer::SubscriptionId;
use super::state::AppState;
use crate::client::{CatalogApi, HttpCatalogClient};
use crate::coordinator::{self, ByIds, CharacterDetail, PagedCharacters};
use crate::domain::{Character, CharacterFilters, Episode, Result};
use crate::storage::{Persistence, PlaybackSnapshot};
use crate::Config;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Outcome of [`App::dispatch`].
#[derive(Debug)]
pub struct Dispatch {
    /// Whether the view must re-render.
    pub render: bool,

    /// Fetches issued while executing the event's actions.
    ///
    /// Callers do not need to await these; results reach the coordinators'
    /// state on their own.
    pub pending: Vec<JoinHandle<()>>,
}

/// One catalog instance: its stores, its storage and its coordinators.
///
/// Fetches are spawned on the ambient tokio runtime, so [`App::start`] and
/// [`App::dispatch`] should be called from within one.
pub struct App<A: CatalogApi + ?Sized> {
    api: Arc<A>,
    state: AppState,
    persistence: Persistence,
    characters: PagedCharacters,
    detail: CharacterDetail,
    episodes: ByIds<Episode>,
    favorites: ByIds<Character>,
    /// Page count of the last resolved list, keyed by its filters at page 1.
    known_pages: Option<(CharacterFilters, u32)>,
}

impl App<HttpCatalogClient> {
    /// Builds an app talking to the remote service and storing state at
    /// `config.storage_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL is invalid or the HTTP
    /// client cannot be built. Storage problems are not errors; the app falls
    /// back to in-memory state.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api = Arc::new(HttpCatalogClient::from_config(config)?);
        Ok(Self::new(api, Persistence::open(&config.storage_path)))
    }
}

impl<A: CatalogApi + ?Sized> App<A> {
    /// Creates the app and rehydrates favorites, filters and playback from
    /// `persistence`.
    pub fn new(api: Arc<A>, persistence: Persistence) -> Self {
        let _span = tracing::debug_span!("app_new").entered();

        let state = AppState::from_snapshots(persistence.load_catalog(), persistence.load_playback());
        tracing::debug!(
            favorites = state.favorites.len(),
            filters = ?state.filters.current(),
            degraded = persistence.is_degraded(),
            "state rehydrated"
        );

        Self {
            characters: coordinator::paged_characters(Arc::clone(&api)),
            detail: coordinator::character_detail(Arc::clone(&api)),
            episodes: coordinator::episodes_by_ids(Arc::clone(&api)),
            favorites: coordinator::characters_by_ids(Arc::clone(&api)),
            known_pages: None,
            api,
            state,
            persistence,
        }
    }

    /// Issues the initial character list fetch for the rehydrated filters.
    pub fn start(&mut self) -> Vec<JoinHandle<()>> {
        let filters = self.state.filters.current().clone();
        self.execute(vec![Action::FetchCharacters(filters)])
    }

    /// Handles one event and carries out the resulting actions.
    ///
    /// Fetch failures never surface here; they land in the coordinators'
    /// `error` field.
    ///
    /// # Errors
    ///
    /// Returns an error only if the event handler rejects the event.
    pub fn dispatch(&mut self, event: &Event) -> Result<Dispatch> {
        self.sync_page_count();

        let (render, actions) = handle_event(&mut self.state, event)?;
        let pending = self.execute(actions);
        Ok(Dispatch { render, pending })
    }

    /// Exposes a page count only if it was reported for the current filters.
    /// Every page of one filter set shares it; a different filter set waits
    /// for its own response.
    fn sync_page_count(&mut self) {
        let resolved = self.characters.with_state(|list| {
            if list.loading {
                None
            } else {
                list.data.as_ref().map(|page| page.info.pages)
            }
        });
        if let (Some(pages), Some(key)) = (resolved, self.characters.last_key()) {
            self.known_pages = Some((first_page(key), pages));
        }

        let current = first_page(self.state.filters.current());
        self.state.page_count = self
            .known_pages
            .as_ref()
            .filter(|(filters, _)| *filters == current)
            .map(|(_, pages)| *pages);
    }

    fn execute(&mut self, actions: Vec<Action>) -> Vec<JoinHandle<()>> {
        actions.into_iter().filter_map(|action| self.run(action)).collect()
    }

    fn run(&mut self, action: Action) -> Option<JoinHandle<()>> {
        tracing::trace!(action = ?action, "executing action");
        match action {
            Action::FetchCharacters(filters) => self.characters.request(filters),
            Action::FetchCharacter(id) => self.detail.request(id),
            Action::FetchEpisodes(ids) => self.episodes.request(ids),
            Action::FetchFavorites(ids) => self.favorites.request(ids),
            Action::Persist => {
                let snapshot = self.state.catalog_snapshot();
                self.persistence.save_catalog(&snapshot);
                None
            }
            Action::PersistPlayback => {
                let snapshot = self.state.playback.snapshot();
                self.persistence.save_playback(&snapshot);
                None
            }
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn api(&self) -> &Arc<A> {
        &self.api
    }

    #[must_use]
    pub const fn persistence(&self) -> &Persistence {
        &self.persistence
    }

    /// Paged character list for the current filters.
    #[must_use]
    pub const fn characters(&self) -> &PagedCharacters {
        &self.characters
    }

    #[must_use]
    pub const fn character_detail(&self) -> &CharacterDetail {
        &self.detail
    }

    /// Episodes of the character in the detail view.
    #[must_use]
    pub const fn episodes(&self) -> &ByIds<Episode> {
        &self.episodes
    }

    #[must_use]
    pub const fn favorite_characters(&self) -> &ByIds<Character> {
        &self.favorites
    }

    /// Re-runs the last character list request.
    pub fn refetch_characters(&mut self) -> Option<JoinHandle<()>> {
        self.characters.refetch()
    }

    pub fn subscribe_filters(
        &mut self,
        listener: impl FnMut(&CharacterFilters) + Send + 'static,
    ) -> SubscriptionId {
        self.state.filters.subscribe(listener)
    }

    pub fn subscribe_favorites(&mut self, listener: impl FnMut(&Vec<u32>) + Send + 'static) -> SubscriptionId {
        self.state.favorites.subscribe(listener)
    }

    pub fn subscribe_playback(
        &mut self,
        listener: impl FnMut(&PlaybackSnapshot) + Send + 'static,
    ) -> SubscriptionId {
        self.state.playback.subscribe(listener)
    }
}

fn first_page(filters: &CharacterFilters) -> CharacterFilters {
    CharacterFilters {
        page: 1,
        ..filters.clone()
    }
}

impl<A: CatalogApi + ?Sized> std::fmt::Debug for App<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("state", &self.state)
            .field("persistence", &self.persistence)
            .field("characters", &self.characters)
            .finish_non_exhaustive()
    }
}
