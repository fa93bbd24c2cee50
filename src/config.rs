//! Configuration Module
//!
//! Handles loading the Pokedex settings from environment variables and
//! command-line overrides.

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_TTL_SECS;
use crate::cli::Cli;

/// PokeAPI v2 root; endpoint paths are appended to it.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";

/// Runtime configuration.
///
/// All values can be configured via environment variables with sensible
/// defaults, then overridden by command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How long a cached response stays fresh; also the reaper's sweep period
    pub cache_ttl: Duration,
    /// PokeAPI root URL, always ending in `/`
    pub base_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_TTL` - Cache time-to-live in seconds (default: 60, zero is ignored)
    /// - `POKEDEX_BASE_URL` - PokeAPI root URL (default: https://pokeapi.co/api/v2/)
    pub fn from_env() -> Self {
        let cache_ttl = env::var("POKEDEX_CACHE_TTL")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TTL_SECS);

        let base_url = env::var("POKEDEX_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            cache_ttl: Duration::from_secs(cache_ttl),
            base_url: normalize_base_url(&base_url),
        }
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn apply_cli(mut self, cli: &Cli) -> Self {
        if let Some(secs) = cli.cache_ttl.filter(|secs| *secs > 0) {
            self.cache_ttl = Duration::from_secs(secs);
        }
        if let Some(url) = cli.base_url.as_deref() {
            self.base_url = normalize_base_url(url);
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(DEFAULT_TTL_SECS),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Trims whitespace and guarantees a trailing slash.
fn normalize_base_url(url: &str) -> String {
    let url = url.trim();
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}
