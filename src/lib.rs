//! League of Legends Live Client Data API client
//!
//! A read-only client for the HTTPS API a running game serves on
//! `https://127.0.0.1:2999/liveclientdata`, with typed records for players,
//! abilities, runes, items, scores and match events.
//!
//! ## Features
//!
//! - **Pinned TLS**: trusts the Riot Games root certificate and nothing else
//! - **Typed records**: every endpoint decodes into its own serde struct
//! - **Tolerant decoding**: missing fields default, unknown fields are ignored
//! - **Upstream errors**: non-200 responses surface the game's error message
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use liveclientdata::LiveClient;
//!
//! # async fn example() -> liveclientdata::Result<()> {
//! let client = LiveClient::new()?;
//!
//! let game = client.game_stats().await?;
//! println!("{} on {} at {:.0}s", game.game_mode, game.map_name, game.game_time);
//!
//! let me = client.active_player_name().await?;
//! let scores = client.player_scores(&me).await?;
//! println!("{}/{}/{}", scores.kills, scores.deaths, scores.assists);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! The command line tool and [`LiveClientConfig::resolve`] read overrides from
//! the environment:
//! ```bash
//! export LIVECLIENTDATA_URL=https://127.0.0.1:2999/liveclientdata
//! export LIVECLIENTDATA_TIMEOUT_MS=1000
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod live;

// Re-export commonly used types
pub use crate::core::{LiveClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{LiveClientError, Result};
pub use live::types::{
    Abilities, Ability, ActivePlayer, AllGameData, ApiError, ChampionStats, Event, Events,
    FullRunes, GameData, Item, Player, Rune, Runes, Scores, SummonerSpell, SummonerSpells,
};
pub use live::{Endpoint, EventKind, LiveClient};

pub const BASE_URL_ENV_VAR: &str = "LIVECLIENTDATA_URL";
pub const TIMEOUT_ENV_VAR: &str = "LIVECLIENTDATA_TIMEOUT_MS";
