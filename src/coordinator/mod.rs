//! Data-fetching coordinators.
//!
//! A coordinator turns a key (filters, an id list, a single id) into one
//! remote fetch and exposes the result as an observable [`FetchState`]. The
//! constructors here bind the generic [`Coordinator`] to the catalog
//! operations each view needs.
//!
//! # Modules
//!
//! - `keyed`: The generic keyed coordinator and its supersede rule
//! - `fetch_state`: Observable `data`/`loading`/`error` state

pub mod keyed;
pub mod fetch_state;

pub use keyed::{Coordinator, Fetcher, Shortcut};
pub use fetch_state::FetchState;

use crate::client::CatalogApi;
use crate::domain::{Character, CharacterFilters, Episode, Page};
use futures_util::FutureExt;
use std::sync::Arc;

/// Character list for the current filters, including the page.
pub type PagedCharacters = Coordinator<CharacterFilters, Page<Character>>;

/// Characters or episodes for an ordered list of ids.
pub type ByIds<T> = Coordinator<Vec<u32>, Vec<T>>;

/// A single character for the detail view.
pub type CharacterDetail = Coordinator<u32, Character>;

pub fn paged_characters<A: CatalogApi + ?Sized>(api: Arc<A>) -> PagedCharacters {
    Coordinator::new(
        "paged_characters",
        Arc::new(move |filters: CharacterFilters| {
            let api = Arc::clone(&api);
            async move { api.list_characters(&filters).await }.boxed()
        }),
    )
}

/// Episodes for the given ids. An empty list resolves at once to no episodes.
pub fn episodes_by_ids<A: CatalogApi + ?Sized>(api: Arc<A>) -> ByIds<Episode> {
    Coordinator::new(
        "episodes_by_ids",
        Arc::new(move |ids: Vec<u32>| {
            let api = Arc::clone(&api);
            async move { api.get_episodes_by_ids(&ids).await }.boxed()
        }),
    )
    .with_shortcut(empty_ids())
}

/// Characters for the given ids. An empty list resolves at once to no
/// characters.
pub fn characters_by_ids<A: CatalogApi + ?Sized>(api: Arc<A>) -> ByIds<Character> {
    Coordinator::new(
        "characters_by_ids",
        Arc::new(move |ids: Vec<u32>| {
            let api = Arc::clone(&api);
            async move { api.get_characters_by_ids(&ids).await }.boxed()
        }),
    )
    .with_shortcut(empty_ids())
}

pub fn character_detail<A: CatalogApi + ?Sized>(api: Arc<A>) -> CharacterDetail {
    Coordinator::new(
        "character_detail",
        Arc::new(move |id: u32| {
            let api = Arc::clone(&api);
            async move { api.get_character(id).await }.boxed()
        }),
    )
}

fn empty_ids<T>() -> Shortcut<Vec<u32>, Vec<T>> {
    Arc::new(|ids: &Vec<u32>| ids.is_empty().then(Vec::new))
}
