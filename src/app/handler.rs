//! Event handling and state transition logic.
//!
//! The handler takes a user or system event, mutates [`AppState`] through the
//! store methods, and returns the [`Action`]s the runtime must carry out.
//!
//! # Event Types
//!
//! - **Filtering**: `SetFilters`, `ResetFilters`
//! - **Paging**: `SetPage`, `NextPage`, `PreviousPage`
//! - **Navigation**: `OpenCharacter`, `ShowFavorites`, `ShowCharacters`
//! - **Favorites**: `ToggleFavorite`
//! - **Playback**: `TogglePlayback`, `SetVolume`
//! - **Data**: `CharacterLoaded`, raised once the detail character is known
//!
//! # Example
//!
//! ```rust
//! use multiverse_catalog::app::{handle_event, Action, AppState, Event};
//!
//! let mut state = AppState::default();
//! let (render, actions) = handle_event(&mut state, &Event::ToggleFavorite(1))?;
//! assert!(render);
//! assert_eq!(actions, vec![Action::Persist]);
//! # Ok::<(), multiverse_catalog::CatalogError>(())
//! ```

use crate::app::{Action, AppState, View};
use crate::domain::error::Result;
use crate::domain::FilterPatch;

/// Events raised by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Merges a partial filter update and returns to page 1.
    SetFilters(FilterPatch),
    /// Clears every filter and returns to page 1.
    ResetFilters,
    /// Jumps to a page of the character list.
    SetPage(u32),
    NextPage,
    PreviousPage,
    /// Adds or removes a character from favorites.
    ToggleFavorite(u32),
    /// Shows the detail view for a character.
    OpenCharacter(u32),
    /// A detail character has loaded, with its episode ids in appearance
    /// order. Ignored unless that character is still the one on screen.
    CharacterLoaded { id: u32, episode_ids: Vec<u32> },
    ShowFavorites,
    ShowCharacters,
    TogglePlayback,
    SetVolume(f32),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// Whether the view must re-render, and the actions to run in order. Both may
/// be "nothing" when the event does not apply to the current state.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for handlers that validate
/// input.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SetFilters(patch) => {
            state.filters.set_filters(patch.clone());
            Ok((true, vec![fetch_characters(state), Action::Persist]))
        }
        Event::ResetFilters => {
            state.filters.reset_filters();
            Ok((true, vec![fetch_characters(state), Action::Persist]))
        }
        Event::SetPage(page) => {
            state.filters.set_page(*page);
            Ok((true, vec![fetch_characters(state)]))
        }
        Event::NextPage => {
            if !state.has_next_page() {
                tracing::debug!(page = state.filters.page(), "already on last page");
                return Ok((false, vec![]));
            }
            let Some(next) = state.filters.page().checked_add(1) else {
                tracing::debug!(page = state.filters.page(), "page number exhausted");
                return Ok((false, vec![]));
            };
            state.filters.set_page(next);
            Ok((true, vec![fetch_characters(state)]))
        }
        Event::PreviousPage => {
            if !state.has_previous_page() {
                tracing::debug!("already on first page");
                return Ok((false, vec![]));
            }
            state.filters.set_page(state.filters.page() - 1);
            Ok((true, vec![fetch_characters(state)]))
        }
        Event::ToggleFavorite(id) => {
            if *id == 0 {
                tracing::debug!("ignoring favorite toggle for id 0");
                return Ok((false, vec![]));
            }
            state.favorites.toggle_favorite(*id);

            let mut actions = vec![Action::Persist];
            if state.view == View::Favorites {
                actions.push(Action::FetchFavorites(state.favorites.ids().to_vec()));
            }
            Ok((true, actions))
        }
        Event::OpenCharacter(id) => {
            tracing::debug!(id, "opening character");
            state.view = View::CharacterDetail(*id);
            Ok((true, vec![Action::FetchCharacter(*id)]))
        }
        Event::CharacterLoaded { id, episode_ids } => {
            if state.view.detail_id() != Some(*id) {
                tracing::debug!(id, shown = ?state.view.detail_id(), "ignoring character no longer on screen");
                return Ok((false, vec![]));
            }
            Ok((false, vec![Action::FetchEpisodes(episode_ids.clone())]))
        }
        Event::ShowFavorites => {
            state.view = View::Favorites;
            Ok((true, vec![Action::FetchFavorites(state.favorites.ids().to_vec())]))
        }
        Event::ShowCharacters => {
            state.view = View::Characters;
            Ok((true, vec![fetch_characters(state)]))
        }
        Event::TogglePlayback => {
            let playing = state.playback.toggle();
            tracing::debug!(playing, "playback toggled");
            Ok((true, vec![Action::PersistPlayback]))
        }
        Event::SetVolume(volume) => {
            let before = state.playback.volume();
            state.playback.set_volume(*volume);
            if (state.playback.volume() - before).abs() < f32::EPSILON {
                return Ok((false, vec![]));
            }
            Ok((true, vec![Action::PersistPlayback]))
        }
    }
}

fn fetch_characters(state: &AppState) -> Action {
    Action::FetchCharacters(state.filters.current().clone())
}
