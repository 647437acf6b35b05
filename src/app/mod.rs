//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the presentation layer and the
//! client/coordinator/storage layers. It owns the observable stores and turns
//! UI events into fetches and persistence writes.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! UI Event → Event Handler → Store Mutations → Actions → Coordinators / Storage
//!                                                              ↓
//!                                      UI ← FetchState (watch) ┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transitions
//! - [`modes`]: The active screen
//! - [`state`]: Central application state container
//! - [`runtime`]: The [`App`] that executes actions
//! - [`filters`], [`favorites`], [`playback`]: Observable stores
//! - [`pagination`], [`debounce`]: Presentation helpers

pub mod actions;
pub mod debounce;
pub mod favorites;
pub mod filters;
pub mod handler;
pub mod modes;
pub mod observer;
pub mod pagination;
pub mod playback;
pub mod runtime;
pub mod state;

pub use actions::Action;
pub use debounce::Debouncer;
pub use favorites::FavoritesState;
pub use filters::FilterState;
pub use handler::{handle_event, Event};
pub use modes::View;
pub use observer::SubscriptionId;
pub use pagination::{page_window, PageLink};
pub use playback::PlaybackState;
pub use runtime::{App, Dispatch};
pub use state::AppState;
