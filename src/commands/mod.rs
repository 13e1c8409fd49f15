//! Command implementations for the Live Client Data CLI

use log::debug;
use serde_json::Value;

use crate::{cli::Commands, Endpoint, LiveClient, LiveClientError, Result};

#[cfg(test)]
mod tests;

/// Fetch one endpoint and return the decoded record as JSON, in the
/// upstream key format.
///
/// Endpoints that take a summoner name fail with
/// [`LiveClientError::MissingSummonerName`] before any request when none is given.
pub async fn fetch_endpoint(
    client: &LiveClient,
    endpoint: Endpoint,
    summoner_name: Option<&str>,
) -> Result<Value> {
    let name = match summoner_name {
        Some(name) => name,
        None if endpoint.needs_summoner() => {
            return Err(LiveClientError::MissingSummonerName {
                endpoint: endpoint.to_string(),
            })
        }
        None => "",
    };

    let value = match endpoint {
        Endpoint::AllGameData => serde_json::to_value(client.all_game_data().await?)?,
        Endpoint::ActivePlayer => serde_json::to_value(client.active_player().await?)?,
        Endpoint::ActivePlayerName => Value::String(client.active_player_name().await?),
        Endpoint::ActivePlayerAbilities => {
            serde_json::to_value(client.active_player_abilities().await?)?
        }
        Endpoint::ActivePlayerRunes => serde_json::to_value(client.active_player_runes().await?)?,
        Endpoint::PlayerList => serde_json::to_value(client.player_list().await?)?,
        Endpoint::PlayerScores => serde_json::to_value(client.player_scores(name).await?)?,
        Endpoint::PlayerSummonerSpells => {
            serde_json::to_value(client.player_summoner_spells(name).await?)?
        }
        Endpoint::PlayerMainRunes => serde_json::to_value(client.player_main_runes(name).await?)?,
        Endpoint::PlayerItems => serde_json::to_value(client.player_items(name).await?)?,
        Endpoint::EventData => serde_json::to_value(client.event_data().await?)?,
        Endpoint::GameStats => serde_json::to_value(client.game_stats().await?)?,
    };
    Ok(value)
}

pub fn render(value: &Value, compact: bool) -> Result<String> {
    if compact {
        Ok(serde_json::to_string(value)?)
    } else {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

/// Handle a parsed command and return the text to print.
pub async fn handle_command(
    client: &LiveClient,
    command: &Commands,
    compact: bool,
) -> Result<String> {
    let endpoint = command.endpoint();
    debug!("running {} against {}", endpoint, client.config().base_url);

    let value = fetch_endpoint(client, endpoint, command.summoner_name()).await?;
    render(&value, compact)
}
