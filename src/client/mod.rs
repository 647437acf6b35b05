//! Client adapter for the remote catalog service.
//!
//! This module defines the [`CatalogApi`] trait that abstracts over the remote
//! catalog, and the HTTP implementation [`HttpCatalogClient`]. Coordinators
//! depend only on the trait, so tests can substitute a scripted fake.
//!
//! # Normalization Rules
//!
//! - List endpoints map a not-found response to [`Page::empty`]
//! - Batch endpoints always return a list, even when the remote answers a
//!   single-id request with a bare object
//! - Batch endpoints given no ids return an empty list without a request
//! - Single-id lookups report a missing id as [`CatalogError::Fetch`]
//!
//! [`CatalogError::Fetch`]: crate::domain::CatalogError::Fetch

pub mod http;
pub mod response;

pub use http::HttpCatalogClient;
pub use response::OneOrMany;

use crate::domain::{Character, CharacterFilters, Episode, Page, Result};
use async_trait::async_trait;

/// Read-only operations offered by the remote catalog.
///
/// Every method is a single request/response exchange with no retries;
/// failures surface immediately so the caller can decide what to show.
#[async_trait]
pub trait CatalogApi: Send + Sync + 'static {
    /// Lists characters matching the given criteria.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Fetch`](crate::domain::CatalogError::Fetch) on
    /// any failure other than not-found, which yields an empty page instead.
    async fn list_characters(&self, filters: &CharacterFilters) -> Result<Page<Character>>;

    /// Fetches one character by id.
    ///
    /// # Errors
    ///
    /// Returns a fetch error if the request fails or the id does not exist.
    async fn get_character(&self, id: u32) -> Result<Character>;

    /// Fetches several characters in one request.
    ///
    /// # Errors
    ///
    /// Returns a fetch error if the request fails.
    async fn get_characters_by_ids(&self, ids: &[u32]) -> Result<Vec<Character>>;

    /// Lists one page of episodes.
    ///
    /// # Errors
    ///
    /// Returns a fetch error on any failure other than not-found.
    async fn list_episodes(&self, page: u32) -> Result<Page<Episode>>;

    /// Fetches one episode by id.
    ///
    /// # Errors
    ///
    /// Returns a fetch error if the request fails or the id does not exist.
    async fn get_episode(&self, id: u32) -> Result<Episode>;

    /// Fetches several episodes in one request.
    ///
    /// # Errors
    ///
    /// Returns a fetch error if the request fails.
    async fn get_episodes_by_ids(&self, ids: &[u32]) -> Result<Vec<Episode>>;
}
