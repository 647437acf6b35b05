//! Domain layer for the catalog core.
//!
//! Core types of the catalog, independent of HTTP, storage or UI concerns.
//!
//! # Organization
//!
//! - [`character`]: Character records, status and gender enums
//! - [`episode`]: Episode records
//! - [`filters`]: Search criteria and partial updates
//! - [`page`]: Paged list results
//! - [`error`]: Error types and result alias
//!
//! # Examples
//!
//! ```
//! use multiverse_catalog::domain::{CharacterFilters, FilterPatch, Result};
//!
//! fn narrow(mut filters: CharacterFilters) -> Result<CharacterFilters> {
//!     filters.apply(FilterPatch::species("Robot"));
//!     Ok(filters)
//! }
//! ```

pub mod character;
pub mod episode;
pub mod error;
pub mod filters;
pub mod page;

pub use character::{format_created, resource_id, Character, CharacterStatus, Gender, ResourceLink};
pub use episode::Episode;
pub use error::{CatalogError, Result};
pub use filters::{CharacterFilters, FilterPatch};
pub use page::{Page, PageInfo};
