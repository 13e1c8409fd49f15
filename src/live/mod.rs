//! Live Client Data API: transport, endpoints and records.

pub mod endpoints;
pub mod event_kind;
pub mod http;
pub mod types;

pub use endpoints::{Endpoint, SUMMONER_NAME_PARAM};
pub use event_kind::EventKind;
pub use http::LiveClient;
