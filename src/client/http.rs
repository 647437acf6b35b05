//! HTTP implementation of [`CatalogApi`] built on `reqwest`.

use super::response::{join_ids, OneOrMany};
use super::CatalogApi;
use crate::domain::{CatalogError, Character, CharacterFilters, Episode, Page, Result};
use crate::Config;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::Instrument;
use url::Url;

/// Public endpoint of the catalog service.
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Ceiling applied to every request unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Catalog client speaking HTTP/JSON to the remote service.
///
/// Cheap to clone; clones share the underlying connection pool.
///
/// # Examples
///
/// ```no_run
/// use multiverse_catalog::client::{CatalogApi, HttpCatalogClient};
/// use multiverse_catalog::domain::CharacterFilters;
///
/// # async fn run() -> multiverse_catalog::Result<()> {
/// let client = HttpCatalogClient::new("https://rickandmortyapi.com/api", std::time::Duration::from_secs(10))?;
/// let page = client.list_characters(&CharacterFilters::default()).await?;
/// println!("{} characters", page.info.count);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    http: reqwest::Client,
    /// Always ends with `/` so relative joins append instead of replacing.
    base_url: Url,
    timeout: Duration,
}

impl HttpCatalogClient {
    /// Creates a client for the given base URL and per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse or the HTTP client
    /// cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Config(format!("failed to build HTTP client: {e}")))?;

        tracing::debug!(base_url = %base_url, timeout_ms = timeout.as_millis(), "catalog client created");

        Ok(Self {
            http,
            base_url,
            timeout,
        })
    }

    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// See [`HttpCatalogClient::new`].
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.base_url, config.request_timeout())
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Performs a GET and decodes the JSON body.
    ///
    /// A 404 becomes [`CatalogError::NotFound`]; every other failure becomes
    /// [`CatalogError::Fetch`] with a message fit for display.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let span = tracing::debug_span!("catalog_get", path = %url.path(), query = url.query().unwrap_or(""));

        async move {
            let response = self
                .http
                .get(url.clone())
                .send()
                .await
                .map_err(|e| self.describe(&e))?;

            let status = response.status();
            if status == StatusCode::NOT_FOUND {
                tracing::debug!("resource not found");
                return Err(CatalogError::NotFound(url.path().to_string()));
            }
            if !status.is_success() {
                tracing::debug!(status = status.as_u16(), "request failed");
                return Err(CatalogError::Fetch(format!(
                    "Request failed with status code {}",
                    status.as_u16()
                )));
            }

            let body = response.json::<T>().await.map_err(|e| self.describe(&e))?;
            tracing::debug!(status = status.as_u16(), "request succeeded");
            Ok(body)
        }
        .instrument(span)
        .await
    }

    /// Translates a transport error into a user-facing fetch error.
    fn describe(&self, err: &reqwest::Error) -> CatalogError {
        if err.is_timeout() {
            tracing::debug!(error = %err, "request timed out");
            CatalogError::Fetch(format!("timeout of {}ms exceeded", self.timeout.as_millis()))
        } else if err.is_decode() {
            tracing::debug!(error = %err, "response body could not be decoded");
            CatalogError::Fetch(format!("Unexpected response from catalog: {err}"))
        } else {
            tracing::debug!(error = %err, "network failure");
            CatalogError::Fetch(format!("Network Error: {err}"))
        }
    }

    async fn list<T: DeserializeOwned>(&self, url: Url) -> Result<Page<T>> {
        match self.get_json::<Page<T>>(url).await {
            Ok(page) => Ok(page),
            Err(CatalogError::NotFound(path)) => {
                tracing::debug!(path = %path, "no matches, returning empty page");
                Ok(Page::empty())
            }
            Err(e) => Err(e),
        }
    }

    async fn one<T: DeserializeOwned>(&self, resource: &str, id: u32) -> Result<T> {
        let url = self.endpoint(&format!("{resource}/{id}"))?;
        self.get_json(url).await.map_err(CatalogError::into_fetch)
    }

    async fn many<T: DeserializeOwned>(&self, resource: &str, ids: &[u32]) -> Result<Vec<T>> {
        if ids.is_empty() {
            tracing::debug!(resource, "no ids requested, skipping request");
            return Ok(Vec::new());
        }

        let url = self.endpoint(&format!("{resource}/{}", join_ids(ids)))?;
        match self.get_json::<OneOrMany<T>>(url).await {
            Ok(body) => Ok(body.into_vec()),
            Err(CatalogError::NotFound(_)) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn list_characters(&self, filters: &CharacterFilters) -> Result<Page<Character>> {
        let mut url = self.endpoint("character")?;
        url.query_pairs_mut().extend_pairs(filters.query_pairs());
        self.list(url).await
    }

    async fn get_character(&self, id: u32) -> Result<Character> {
        self.one("character", id).await
    }

    async fn get_characters_by_ids(&self, ids: &[u32]) -> Result<Vec<Character>> {
        self.many("character", ids).await
    }

    async fn list_episodes(&self, page: u32) -> Result<Page<Episode>> {
        let mut url = self.endpoint("episode")?;
        url.query_pairs_mut().append_pair("page", &page.max(1).to_string());
        self.list(url).await
    }

    async fn get_episode(&self, id: u32) -> Result<Episode> {
        self.one("episode", id).await
    }

    async fn get_episodes_by_ids(&self, ids: &[u32]) -> Result<Vec<Episode>> {
        self.many("episode", ids).await
    }
}
