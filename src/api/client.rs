//! PokeAPI client
//!
//! Fetches raw response bodies through the expiring cache and decodes them
//! into the typed records in [`crate::models`].

use bytes::Bytes;
use reqwest::Client;
use tracing::{debug, warn};

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// Client for the PokeAPI REST endpoints.
///
/// Every request goes through the response cache first. Only successful
/// bodies are cached; failures are handed straight back to the caller.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    cache: Cache,
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client rooted at `base_url` (which must end in `/`).
    pub fn new(base_url: impl Into<String>, cache: Cache) -> Self {
        Self::with_client(Client::new(), base_url, cache)
    }

    /// Creates a client with a custom HTTP client
    pub fn with_client(http: Client, base_url: impl Into<String>, cache: Cache) -> Self {
        Self {
            http,
            cache,
            base_url: base_url.into(),
        }
    }

    /// Creates a client and its cache from configuration.
    ///
    /// Must be called from within a tokio runtime, since the cache starts
    /// its reaper immediately.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.base_url.clone(), Cache::new(config.cache_ttl))
    }

    /// The response cache backing this client.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the first page of the location area listing.
    pub fn first_page_url(&self) -> String {
        format!("{}location-area/", self.base_url)
    }

    /// GETs `url`, answering from the cache when a fresh body is stored.
    ///
    /// The lock is only held inside the cache calls, never across the
    /// network request.
    ///
    /// # Returns
    /// * `Ok(Bytes)` - The full response body
    /// * `Err(PokedexError::Transport)` - The request could not be completed
    /// * `Err(PokedexError::RemoteStatus)` - The server answered with a non-success status
    pub async fn fetch(&self, url: &str) -> Result<Bytes> {
        if let Some(body) = self.cache.get(url) {
            debug!(url, "cache hit");
            return Ok(body);
        }

        debug!(url, "cache miss, requesting");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, %status, "PokeAPI request failed");
            return Err(PokedexError::RemoteStatus {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        self.cache.add(url, body.clone());
        Ok(body)
    }

    /// Fetches one page of the location area listing.
    pub async fn location_areas(&self, url: &str) -> Result<LocationAreaPage> {
        let body = self.fetch(url).await?;
        LocationAreaPage::from_slice(&body)
    }

    /// Fetches a single location area by name.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let url = format!("{}location-area/{}", self.base_url, name);
        let body = self.fetch(&url).await?;
        LocationArea::from_slice(&body)
    }

    /// Fetches a single creature by name.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}pokemon/{}", self.base_url, name);
        let body = self.fetch(&url).await?;
        Pokemon::from_slice(&body)
    }
}
