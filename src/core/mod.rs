//! Core utilities for the Live Client Data client
//!
//! - `config`: origin and timeout settings
//! - `tls`: the embedded certificate authority and pinned HTTP client

pub mod config;
pub mod tls;

// Re-export commonly used items for convenience
pub use config::{LiveClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use tls::{build_http_client, RIOT_GAMES_CA_PEM};
