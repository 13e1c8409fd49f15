//! HTTP transport for the Live Client Data API.

use log::{debug, trace};
use reqwest::{header::ACCEPT, Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::core::{build_http_client, LiveClientConfig};
use crate::error::{LiveClientError, Result};
use crate::live::types::ApiError;


/// Client for the API served by a running game on `127.0.0.1:2999`.
///
/// Holds no mutable state; clones share the underlying connection pool and
/// can be used from several tasks at once.
#[derive(Debug, Clone)]
pub struct LiveClient {
    config: LiveClientConfig,
    http: Client,
}

impl LiveClient {
    /// Client for the default local origin, trusting only the Riot Games CA.
    pub fn new() -> Result<Self> {
        Self::with_config(LiveClientConfig::default())
    }

    pub fn with_config(config: LiveClientConfig) -> Result<Self> {
        let http = build_http_client(&config)?;
        Ok(Self { config, http })
    }

    /// Replace the underlying HTTP client.
    ///
    /// The replacement is used as-is: its own timeout and trust settings
    /// apply instead of the ones built from the config.
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn config(&self) -> &LiveClientConfig {
        &self.config
    }

    /// Full request URL for `endpoint` with `query` form-encoded in order.
    pub fn build_url(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LiveClientError::InvalidBaseUrl {
                url: self.config.base_url.to_string(),
                reason: "URL cannot carry path segments".to_string(),
            })?
            .pop_if_empty()
            .push(endpoint);

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Issue a GET and hand back the response if the game answered 200.
    ///
    /// Any other status is turned into [`LiveClientError::Api`], carrying the
    /// upstream error message when the body decodes.
    pub async fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Response> {
        let url = self.build_url(endpoint, query)?;
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::OK {
            return Ok(response);
        }

        debug!("{} answered {}", endpoint, status);
        Err(api_error(status, response).await)
    }

    /// [`LiveClient::get`] followed by decoding the body as `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let body = self.get(endpoint, query).await?.bytes().await?;
        trace!("{} returned {} bytes", endpoint, body.len());
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Build the failure for a non-200 response. A body that does not decode
/// still yields a failure, just with an empty message.
async fn api_error(status: StatusCode, response: Response) -> LiveClientError {
    let decoded = match response.bytes().await {
        Ok(body) => serde_json::from_slice::<ApiError>(&body).map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };

    match decoded {
        Ok(details) => LiveClientError::Api {
            status,
            message: details.message.clone(),
            details: Some(details),
        },
        Err(reason) => {
            debug!("could not decode error body: {}", reason);
            LiveClientError::Api {
                status,
                message: String::new(),
                details: None,
            }
        }
    }
}
