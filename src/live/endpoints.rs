//! One method per Live Client Data endpoint.

use std::fmt;

use crate::error::Result;
use crate::live::http::LiveClient;
use crate::live::types::{
    Abilities, ActivePlayer, AllGameData, Event, Events, FullRunes, GameData, Item, Player, Runes,
    Scores, SummonerSpells,
};

/// Query parameter naming the player for the per-player endpoints.
pub const SUMMONER_NAME_PARAM: &str = "summonerName";

/// Endpoints exposed under `/liveclientdata`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    AllGameData,
    ActivePlayer,
    ActivePlayerName,
    ActivePlayerAbilities,
    ActivePlayerRunes,
    PlayerList,
    PlayerScores,
    PlayerSummonerSpells,
    PlayerMainRunes,
    PlayerItems,
    EventData,
    GameStats,
}

impl Endpoint {
    pub const ALL: [Endpoint; 12] = [
        Endpoint::AllGameData,
        Endpoint::ActivePlayer,
        Endpoint::ActivePlayerName,
        Endpoint::ActivePlayerAbilities,
        Endpoint::ActivePlayerRunes,
        Endpoint::PlayerList,
        Endpoint::PlayerScores,
        Endpoint::PlayerSummonerSpells,
        Endpoint::PlayerMainRunes,
        Endpoint::PlayerItems,
        Endpoint::EventData,
        Endpoint::GameStats,
    ];

    /// Path segment appended to the base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::AllGameData => "allgamedata",
            Endpoint::ActivePlayer => "activeplayer",
            Endpoint::ActivePlayerName => "activeplayername",
            Endpoint::ActivePlayerAbilities => "activeplayerabilities",
            Endpoint::ActivePlayerRunes => "activeplayerrunes",
            Endpoint::PlayerList => "playerlist",
            Endpoint::PlayerScores => "playerscores",
            Endpoint::PlayerSummonerSpells => "playersummonerspells",
            Endpoint::PlayerMainRunes => "playermainrunes",
            Endpoint::PlayerItems => "playeritems",
            Endpoint::EventData => "eventdata",
            Endpoint::GameStats => "gamestats",
        }
    }

    /// Whether the endpoint requires a `summonerName` query parameter.
    pub fn needs_summoner(&self) -> bool {
        matches!(
            self,
            Endpoint::PlayerScores
                | Endpoint::PlayerSummonerSpells
                | Endpoint::PlayerMainRunes
                | Endpoint::PlayerItems
        )
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl LiveClient {
    /// Everything at once: active player, all players, events and game data.
    pub async fn all_game_data(&self) -> Result<AllGameData> {
        self.get_json(Endpoint::AllGameData.path(), &[]).await
    }

    /// Full detail for the locally controlled player.
    pub async fn active_player(&self) -> Result<ActivePlayer> {
        self.get_json(Endpoint::ActivePlayer.path(), &[]).await
    }

    pub async fn active_player_name(&self) -> Result<String> {
        self.get_json(Endpoint::ActivePlayerName.path(), &[]).await
    }

    pub async fn active_player_abilities(&self) -> Result<Abilities> {
        self.get_json(Endpoint::ActivePlayerAbilities.path(), &[]).await
    }

    /// The active player's complete rune page.
    pub async fn active_player_runes(&self) -> Result<FullRunes> {
        self.get_json(Endpoint::ActivePlayerRunes.path(), &[]).await
    }

    /// All players in the game, in the order the game client lists them.
    pub async fn player_list(&self) -> Result<Vec<Player>> {
        self.get_json(Endpoint::PlayerList.path(), &[]).await
    }

    pub async fn player_scores(&self, summoner_name: &str) -> Result<Scores> {
        self.get_player_json(Endpoint::PlayerScores, summoner_name).await
    }

    pub async fn player_summoner_spells(&self, summoner_name: &str) -> Result<SummonerSpells> {
        self.get_player_json(Endpoint::PlayerSummonerSpells, summoner_name).await
    }

    /// Keystone and rune trees of any player.
    pub async fn player_main_runes(&self, summoner_name: &str) -> Result<Runes> {
        self.get_player_json(Endpoint::PlayerMainRunes, summoner_name).await
    }

    pub async fn player_items(&self, summoner_name: &str) -> Result<Vec<Item>> {
        self.get_player_json(Endpoint::PlayerItems, summoner_name).await
    }

    /// Events so far, oldest first.
    pub async fn event_data(&self) -> Result<Vec<Event>> {
        let events: Events = self.get_json(Endpoint::EventData.path(), &[]).await?;
        Ok(events.events)
    }

    pub async fn game_stats(&self) -> Result<GameData> {
        self.get_json(Endpoint::GameStats.path(), &[]).await
    }

    async fn get_player_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        summoner_name: &str,
    ) -> Result<T> {
        self.get_json(endpoint.path(), &[(SUMMONER_NAME_PARAM, summoner_name)]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_endpoint_paths_are_unique() {
        let paths: HashSet<_> = Endpoint::ALL.iter().map(Endpoint::path).collect();
        assert_eq!(paths.len(), Endpoint::ALL.len());
    }

    #[test]
    fn test_summoner_endpoints() {
        let with_name: Vec<_> = Endpoint::ALL
            .iter()
            .filter(|e| e.needs_summoner())
            .map(Endpoint::path)
            .collect();
        assert_eq!(
            with_name,
            vec!["playerscores", "playersummonerspells", "playermainrunes", "playeritems"]
        );
    }

    #[test]
    fn test_endpoint_display() {
        assert_eq!(Endpoint::EventData.to_string(), "eventdata");
        assert_eq!(Endpoint::GameStats.to_string(), "gamestats");
    }
}
