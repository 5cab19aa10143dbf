//! # Configuration
//!
//! Where the remote collections live and how deep each store's mailbox is.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DASHBOARD_API_BASE` | `https://fakestoreapi.com` |
//! | `DASHBOARD_MAILBOX` | `32` |

use reqwest::Url;
use std::env;
use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "https://fakestoreapi.com";
pub const DEFAULT_MAILBOX: usize = 32;

const API_BASE_VAR: &str = "DASHBOARD_API_BASE";
const MAILBOX_VAR: &str = "DASHBOARD_MAILBOX";

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid API base URL {value:?}: {reason}")]
    InvalidUrl { value: String, reason: String },

    #[error("Invalid mailbox size {0:?}: expected a positive integer")]
    InvalidMailbox(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Root of the REST API; collections hang off it (`{api_base}/products`).
    pub api_base: Url,
    /// Request channel capacity of each store.
    pub mailbox: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            // A literal that always parses
            api_base: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
            mailbox: DEFAULT_MAILBOX,
        }
    }
}

impl DashboardConfig {
    /// Reads the environment, keeping defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(base) = lookup(API_BASE_VAR) {
            config.api_base = parse_base(&base)?;
        }
        if let Some(mailbox) = lookup(MAILBOX_VAR) {
            config.mailbox = match mailbox.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => return Err(ConfigError::InvalidMailbox(mailbox)),
            };
        }
        Ok(config)
    }

    pub fn with_api_base(mut self, base: &str) -> Result<Self, ConfigError> {
        self.api_base = parse_base(base)?;
        Ok(self)
    }

    pub fn products_url(&self) -> Url {
        self.collection_url("products")
    }

    pub fn users_url(&self) -> Url {
        self.collection_url("users")
    }

    fn collection_url(&self, collection: &str) -> Url {
        let mut url = self.api_base.clone();
        // parse_base guarantees a base that can carry path segments
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(collection);
        }
        url
    }
}

fn parse_base(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl {
            value: value.to_string(),
            reason: "URL cannot be a base".to_string(),
        });
    }
    Ok(url)
}
