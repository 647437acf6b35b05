//! Side effects requested by the event handler.
//!
//! The handler never performs I/O itself. It returns a `Vec<Action>` and the
//! runtime executes them in order: fetch actions go to the matching
//! coordinator, persist actions to the storage layer.
//!
//! # Example
//!
//! ```rust
//! use multiverse_catalog::app::Action;
//! use multiverse_catalog::domain::CharacterFilters;
//!
//! let actions = vec![
//!     Action::FetchCharacters(CharacterFilters::default()),
//!     Action::Persist,
//! ];
//! ```

use crate::domain::CharacterFilters;

/// Commands executed by the runtime after an event has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Loads the character list for these criteria.
    ///
    /// Ignored by the coordinator if the criteria equal the last request.
    FetchCharacters(CharacterFilters),

    /// Loads one character for the detail view.
    FetchCharacter(u32),

    /// Loads the episodes with these ids, in this order.
    FetchEpisodes(Vec<u32>),

    /// Loads the favorite characters with these ids.
    FetchFavorites(Vec<u32>),

    /// Writes favorites and filters to storage.
    Persist,

    /// Writes playback preferences to storage.
    PersistPlayback,
}
