//! Which screen the catalog is showing.
//!
//! The view decides which coordinators an event feeds:
//! - **Characters**: the paged, filtered character list
//! - **`CharacterDetail`**: one character plus the episodes it appears in
//! - **Favorites**: the characters whose ids are in the favorites list
//!
//! # Example
//!
//! ```rust
//! use multiverse_catalog::app::View;
//!
//! let view = View::CharacterDetail(1);
//! assert_eq!(view.detail_id(), Some(1));
//! ```

/// Active screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    /// Paged character list driven by the current filters.
    #[default]
    Characters,

    /// Detail page of the character with this id.
    CharacterDetail(u32),

    /// Characters marked as favorites.
    Favorites,
}

impl View {
    /// Id of the character on screen, if this is a detail view.
    #[must_use]
    pub const fn detail_id(self) -> Option<u32> {
        match self {
            Self::CharacterDetail(id) => Some(id),
            Self::Characters | Self::Favorites => None,
        }
    }
}
