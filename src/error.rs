//! Error types for the Live Client Data client

use reqwest::StatusCode;
use thiserror::Error;

use crate::live::types::ApiError;


pub type Result<T> = std::result::Result<T, LiveClientError>;

#[derive(Error, Debug)]
pub enum LiveClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The game client answered with a non-200 status.
    ///
    /// `message` is the `message` field of the decoded error body, or empty
    /// when the body could not be decoded.
    #[error("Live client API returned {status}: {message}")]
    Api {
        status: StatusCode,
        message: String,
        details: Option<ApiError>,
    },

    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid timeout in {env_var}: {value}")]
    InvalidTimeout { env_var: String, value: String },

    #[error("Endpoint {endpoint} needs a summoner name")]
    MissingSummonerName { endpoint: String },
}

impl LiveClientError {
    /// Upstream error message, for failures caused by a non-200 response.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            LiveClientError::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// HTTP status attached to the failure, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            LiveClientError::Api { status, .. } => Some(*status),
            LiveClientError::Http(err) => err.status(),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, LiveClientError::Http(err) if err.is_timeout())
    }
}
