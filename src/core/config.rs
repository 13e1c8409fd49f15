//! Connection settings for the Live Client Data API

use std::time::Duration;

use reqwest::Url;

use crate::error::{LiveClientError, Result};
use crate::{BASE_URL_ENV_VAR, TIMEOUT_ENV_VAR};

/// Origin and base path served by the game client.
pub const DEFAULT_BASE_URL: &str = "https://127.0.0.1:2999/liveclientdata";

/// Per-request timeout. The game client answers locally, so anything
/// slower than this means it is not running or still loading.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveClientConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl Default for LiveClientConfig {
    fn default() -> Self {
        Self {
            base_url: parse_base_url(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl LiveClientConfig {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout,
        })
    }

    /// Resolve settings from explicit values, then the environment, then defaults.
    ///
    /// `LIVECLIENTDATA_URL` overrides the origin and `LIVECLIENTDATA_TIMEOUT_MS`
    /// the timeout, unless a value is passed in directly.
    pub fn resolve(base_url: Option<String>, timeout_ms: Option<u64>) -> Result<Self> {
        let base_url = base_url
            .or_else(|| std::env::var(BASE_URL_ENV_VAR).ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match timeout_ms {
            Some(ms) => Duration::from_millis(ms),
            None => match std::env::var(TIMEOUT_ENV_VAR) {
                Ok(raw) => Duration::from_millis(raw.trim().parse().map_err(|_| {
                    LiveClientError::InvalidTimeout {
                        env_var: TIMEOUT_ENV_VAR.to_string(),
                        value: raw.clone(),
                    }
                })?),
                Err(_) => DEFAULT_TIMEOUT,
            },
        };

        Self::new(&base_url, timeout)
    }
}

/// Parse a base URL and make sure endpoint segments can be appended to it.
fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| LiveClientError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(LiveClientError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: "URL cannot carry path segments".to_string(),
        });
    }

    Ok(url)
}
