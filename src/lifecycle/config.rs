//! Settings for reaching the products collection.

use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:3001/products";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

pub const API_URL_VAR: &str = "CATALOG_API_URL";
pub const TIMEOUT_VAR: &str = "CATALOG_TIMEOUT_SECS";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a whole number of seconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

/// Where the store finds its remote collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// URL of the collection; items live at `{api_url}/{id}`.
    pub api_url: String,
    /// Applied to each request as a whole.
    pub request_timeout: Duration,
    /// Capacity of the store's intent channel.
    pub channel_capacity: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl CatalogConfig {
    /// Defaults overridden by `CATALOG_API_URL` and `CATALOG_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup(API_URL_VAR) {
            let url = url.trim();
            if url.is_empty() {
                return Err(ConfigError::Empty { var: API_URL_VAR });
            }
            config.api_url = url.to_string();
        }
        if let Some(value) = lookup(TIMEOUT_VAR) {
            let secs = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout {
                    var: TIMEOUT_VAR,
                    value: value.clone(),
                })?;
            config.request_timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
