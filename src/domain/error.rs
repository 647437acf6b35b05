//! Error types for the catalog core.
//!
//! This module defines the centralized error type [`CatalogError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented with the
//! `thiserror` crate.
//!
//! Only [`CatalogError::Fetch`] is ever shown to a user: not-found results are
//! normalized away by the client, and storage failures are absorbed by the
//! persistence layer.

use thiserror::Error;

/// The main error type for catalog operations.
///
/// # Examples
///
/// ```
/// use multiverse_catalog::CatalogError;
///
/// let err = CatalogError::Fetch("Request failed with status code 500".to_string());
/// assert_eq!(err.user_message(), "Request failed with status code 500");
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The remote service reported that a resource does not exist (HTTP 404).
    ///
    /// List and batch lookups turn this into an empty result. Single-id lookups
    /// convert it into [`CatalogError::Fetch`] before returning.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A request to the remote service failed.
    ///
    /// Covers timeouts, network failures, non-404 error statuses and response
    /// bodies that could not be decoded. The string is already human-readable.
    #[error("{0}")]
    Fetch(String),

    /// Reading from or writing to durable storage failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configured or derived URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// Returns the message the presentation layer should display.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Fetch(message) => message.clone(),
            other => other.to_string(),
        }
    }

    /// Converts a not-found error into a fetch error, leaving others untouched.
    ///
    /// Used by single-resource lookups, where a missing id is a real failure.
    #[must_use]
    pub fn into_fetch(self) -> Self {
        match self {
            Self::NotFound(_) => Self::Fetch("Request failed with status code 404".to_string()),
            other => other,
        }
    }
}

/// A specialized `Result` type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_becomes_fetch_for_single_lookups() {
        let err = CatalogError::NotFound("/character/9999".to_string()).into_fetch();
        assert!(matches!(err, CatalogError::Fetch(_)));
        assert_eq!(err.user_message(), "Request failed with status code 404");
    }

    #[test]
    fn other_errors_keep_their_variant() {
        let err = CatalogError::Storage("disk full".to_string()).into_fetch();
        assert!(matches!(err, CatalogError::Storage(_)));
        assert_eq!(err.user_message(), "Storage error: disk full");
    }
}
