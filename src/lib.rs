//! Multiverse Catalog: state, persistence and data-fetching core for browsing
//! the Rick and Morty character catalog.
//!
//! The crate provides:
//! - An HTTP adapter for the remote catalog that normalizes its quirks
//! - Observable filter, favorites and playback stores
//! - Persistence of favorites, filters and playback across restarts
//! - Fetch coordinators that never let a stale response overwrite a newer one

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Presentation (outside this crate)                  │  ← Renders FetchState
//! └─────────────────────────────────────────────────────┘
//!                        │ Event
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Stores
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Coordinators  │   │ Storage Layer │   │ Client        │
//! │ (coordinator/)│   │ (storage/)    │   │ (client/)     │
//! │ - Keyed fetch │   │ - JSON file   │   │ - reqwest     │
//! │ - Supersede   │   │ - Snapshots   │   │ - Normalizing │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Character, episode, filters (domain/)            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - JSON log lines, rotating file                    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Stores, event handler and the [`App`] runtime
//! - [`client`]: Remote catalog trait and HTTP implementation
//! - [`coordinator`]: Keyed fetch coordinators with observable state
//! - [`domain`]: Core domain types (characters, episodes, filters, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`storage`]: Key-value persistence of application state
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! Configuration is read from a TOML file:
//!
//! ```toml
//! base_url = "https://rickandmortyapi.com/api"
//! request_timeout_secs = 10
//! search_debounce_ms = 500
//! storage_path = "/home/me/.local/share/multiverse-catalog/storage.json"
//! trace_level = "debug"
//! ```
//!
//! or from a string map handed over by a host shell ([`Config::from_map`]).
//!
//! # Examples
//!
//! ```no_run
//! use multiverse_catalog::{initialize, Config, Event, FilterPatch};
//!
//! # async fn run() -> multiverse_catalog::Result<()> {
//! let mut app = initialize(&Config::default())?;
//! app.start();
//!
//! app.dispatch(&Event::SetFilters(FilterPatch::name("rick")))?;
//!
//! let mut list = app.characters().subscribe();
//! list.changed().await.ok();
//! let state = list.borrow().clone();
//! if let Some(page) = state.data {
//!     println!("{} characters", page.info.count);
//! }
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod client;
pub mod coordinator;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;

pub use app::{handle_event, Action, App, AppState, Event, View};
pub use client::{CatalogApi, HttpCatalogClient};
pub use coordinator::FetchState;
pub use domain::{CatalogError, Character, CharacterFilters, Episode, FilterPatch, Page, Result};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Runtime configuration.
///
/// # Example
///
/// ```toml
/// base_url = "http://localhost:8080/api"
/// request_timeout_secs = 5
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the remote catalog API.
    ///
    /// Default: `"https://rickandmortyapi.com/api"`
    pub base_url: String,

    /// Ceiling for every remote request, in seconds. Default: 10
    pub request_timeout_secs: u64,

    /// Quiet period before search text is committed, in milliseconds.
    ///
    /// A presentation setting; the stores commit whatever they are given.
    /// Default: 500
    pub search_debounce_ms: u64,

    /// File holding persisted favorites, filters and playback preferences.
    ///
    /// Default: `storage.json` in the platform data directory.
    pub storage_path: PathBuf,

    /// Tracing level for the log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: client::http::DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            search_debounce_ms: DEFAULT_DEBOUNCE_MS,
            storage_path: infrastructure::default_storage_path(),
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// Missing keys keep their defaults. Numeric values that do not parse (or
    /// are zero) fall back to the default as well.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use multiverse_catalog::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("request_timeout_secs".to_string(), "3".to_string());
    /// map.insert("search_debounce_ms".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.request_timeout_secs, 3);
    /// assert_eq!(config.search_debounce_ms, 500);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let number = |key: &str, fallback: u64| {
            config
                .get(key)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(fallback)
        };

        Self {
            base_url: config
                .get("base_url")
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map_or(defaults.base_url, String::from),
            request_timeout_secs: number("request_timeout_secs", defaults.request_timeout_secs),
            search_debounce_ms: number("search_debounce_ms", defaults.search_debounce_ms),
            storage_path: config
                .get("storage_path")
                .filter(|s| !s.trim().is_empty())
                .map_or(defaults.storage_path, PathBuf::from),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] if the text is not valid TOML or a
    /// field has the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: Self =
            toml::from_str(text).map_err(|e| CatalogError::Config(format!("invalid configuration: {e}")))?;

        let defaults = Self::default();
        if config.request_timeout_secs == 0 {
            config.request_timeout_secs = defaults.request_timeout_secs;
        }
        if config.search_debounce_ms == 0 {
            config.search_debounce_ms = defaults.search_debounce_ms;
        }
        Ok(config)
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub const fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

/// Initializes logging and builds an [`App`] from configuration.
///
/// The returned app has already rehydrated persisted state; call
/// [`App::start`] from within a tokio runtime to issue the first fetch.
///
/// # Errors
///
/// Returns an error if the configured base URL is invalid or the HTTP client
/// cannot be built.
pub fn initialize(config: &Config) -> Result<App<HttpCatalogClient>> {
    observability::init_tracing(config);
    tracing::debug!(base_url = %config.base_url, storage = ?config.storage_path, "initializing catalog");
    App::from_config(config)
}
