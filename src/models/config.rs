//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP fetch behavior settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Persistence settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Listing page selectors
    #[serde(default)]
    pub listing: ListingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.fetch.url.trim().is_empty() {
            return Err(AppError::validation("fetch.url is empty"));
        }
        Url::parse(&self.fetch.url)
            .map_err(|e| AppError::validation(format!("fetch.url is not a valid URL: {e}")))?;
        if self.fetch.user_agent.trim().is_empty() {
            return Err(AppError::validation("fetch.user_agent is empty"));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(AppError::validation("fetch.timeout_secs must be > 0"));
        }
        if self.store.path.trim().is_empty() {
            return Err(AppError::validation("store.path is empty"));
        }
        if self.listing.row_selector.trim().is_empty() {
            return Err(AppError::validation("listing.row_selector is empty"));
        }
        if self.listing.link_selector.trim().is_empty() {
            return Err(AppError::validation("listing.link_selector is empty"));
        }
        Ok(())
    }
}

/// HTTP client and fetch behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Listing page to fetch
    #[serde(default = "defaults::url")]
    pub url: String,

    /// User-Agent header for HTTP requests; the council site degrades
    /// requests that do not present a browser identity
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: defaults::url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the SQLite database file
    #[serde(default = "defaults::store_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: defaults::store_path(),
        }
    }
}

/// Listing page selector settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// CSS selector matching one node per listing entry
    #[serde(default = "defaults::row_selector")]
    pub row_selector: String,

    /// CSS selector for the anchor carrying the listing text, within a row
    #[serde(default = "defaults::link_selector")]
    pub link_selector: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            row_selector: defaults::row_selector(),
            link_selector: defaults::link_selector(),
        }
    }
}

/// Default values for configuration fields.
mod defaults {
    pub fn url() -> String {
        "https://www.circularhead.tas.gov.au/council-services/development/planning".to_string()
    }

    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36"
            .to_string()
    }

    pub fn timeout() -> u64 {
        30
    }

    pub fn store_path() -> String {
        "data.sqlite".to_string()
    }

    pub fn row_selector() -> String {
        "li.link-listing__no-icon".to_string()
    }

    pub fn link_selector() -> String {
        "a".to_string()
    }
}
