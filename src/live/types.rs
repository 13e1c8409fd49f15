//! Records returned by the Live Client Data API.
//!
//! Every record is `#[serde(default)]`: the game client leaves fields out
//! depending on game mode and patch, and a missing field decodes to its
//! zero value instead of failing, and so does an explicit `null`. Unknown
//! fields are ignored.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::event_kind::EventKind;


/// Treat an explicit `null` like a missing field.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Error body returned alongside any non-200 status.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiError {
    #[serde(rename = "errorCode", deserialize_with = "null_default")]
    pub error_code: String,
    #[serde(rename = "httpStatus", deserialize_with = "null_default")]
    pub http_status: u16,
    /// Undocumented upstream; kept as raw JSON.
    #[serde(rename = "implementationDetails")]
    pub implementation_details: Value,
    #[serde(deserialize_with = "null_default")]
    pub message: String,
}

/// Everything the API knows about the running game (`/allgamedata`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AllGameData {
    #[serde(rename = "activePlayer", deserialize_with = "null_default")]
    pub active_player: ActivePlayer,
    #[serde(rename = "allPlayers", deserialize_with = "null_default")]
    pub all_players: Vec<Player>,
    #[serde(deserialize_with = "null_default")]
    pub events: Events,
    #[serde(rename = "gameData", deserialize_with = "null_default")]
    pub game_data: GameData,
}

impl AllGameData {
    /// The `allPlayers` entry belonging to the locally controlled player.
    pub fn active_player_record(&self) -> Option<&Player> {
        let name = &self.active_player.summoner_name;
        if name.is_empty() {
            return None;
        }
        self.all_players.iter().find(|p| &p.summoner_name == name)
    }
}

/// The locally controlled player, with full stat and ability detail.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ActivePlayer {
    #[serde(deserialize_with = "null_default")]
    pub abilities: Abilities,
    #[serde(rename = "championStats", deserialize_with = "null_default")]
    pub champion_stats: ChampionStats,
    #[serde(rename = "currentGold", deserialize_with = "null_default")]
    pub current_gold: f64,
    #[serde(rename = "fullRunes", deserialize_with = "null_default")]
    pub full_runes: FullRunes,
    #[serde(deserialize_with = "null_default")]
    pub level: u32,
    #[serde(rename = "summonerName", deserialize_with = "null_default")]
    pub summoner_name: String,
    #[serde(rename = "riotId", skip_serializing_if = "Option::is_none")]
    pub riot_id: Option<String>,
    #[serde(rename = "riotIdGameName", skip_serializing_if = "Option::is_none")]
    pub riot_id_game_name: Option<String>,
    #[serde(rename = "riotIdTagLine", skip_serializing_if = "Option::is_none")]
    pub riot_id_tag_line: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Abilities {
    #[serde(rename = "Q", deserialize_with = "null_default")]
    pub q: Ability,
    #[serde(rename = "W", deserialize_with = "null_default")]
    pub w: Ability,
    #[serde(rename = "E", deserialize_with = "null_default")]
    pub e: Ability,
    #[serde(rename = "R", deserialize_with = "null_default")]
    pub r: Ability,
    #[serde(rename = "Passive", deserialize_with = "null_default")]
    pub passive: Ability,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Ability {
    /// Absent for the passive and for abilities not yet learned.
    #[serde(rename = "abilityLevel", skip_serializing_if = "Option::is_none")]
    pub ability_level: Option<u8>,
    #[serde(rename = "displayName", deserialize_with = "null_default")]
    pub display_name: String,
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(rename = "rawDescription", deserialize_with = "null_default")]
    pub raw_description: String,
    #[serde(rename = "rawDisplayName", deserialize_with = "null_default")]
    pub raw_display_name: String,
}

/// Live combat stats of the active player's champion.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChampionStats {
    #[serde(deserialize_with = "null_default")]
    pub ability_haste: f64,
    #[serde(deserialize_with = "null_default")]
    pub ability_power: f64,
    #[serde(deserialize_with = "null_default")]
    pub armor: f64,
    #[serde(deserialize_with = "null_default")]
    pub armor_penetration_flat: f64,
    #[serde(deserialize_with = "null_default")]
    pub armor_penetration_percent: f64,
    #[serde(deserialize_with = "null_default")]
    pub attack_damage: f64,
    #[serde(deserialize_with = "null_default")]
    pub attack_range: f64,
    #[serde(deserialize_with = "null_default")]
    pub attack_speed: f64,
    #[serde(deserialize_with = "null_default")]
    pub bonus_armor_penetration_percent: f64,
    #[serde(deserialize_with = "null_default")]
    pub bonus_magic_penetration_percent: f64,
    #[serde(deserialize_with = "null_default")]
    pub crit_chance: f64,
    #[serde(deserialize_with = "null_default")]
    pub crit_damage: f64,
    #[serde(deserialize_with = "null_default")]
    pub current_health: f64,
    #[serde(deserialize_with = "null_default")]
    pub health_regen_rate: f64,
    #[serde(deserialize_with = "null_default")]
    pub life_steal: f64,
    #[serde(deserialize_with = "null_default")]
    pub magic_lethality: f64,
    #[serde(deserialize_with = "null_default")]
    pub magic_penetration_flat: f64,
    #[serde(deserialize_with = "null_default")]
    pub magic_penetration_percent: f64,
    #[serde(deserialize_with = "null_default")]
    pub magic_resist: f64,
    #[serde(deserialize_with = "null_default")]
    pub max_health: f64,
    #[serde(deserialize_with = "null_default")]
    pub move_speed: f64,
    #[serde(deserialize_with = "null_default")]
    pub physical_lethality: f64,
    #[serde(deserialize_with = "null_default")]
    pub resource_max: f64,
    #[serde(deserialize_with = "null_default")]
    pub resource_regen_rate: f64,
    /// `MANA`, `ENERGY`, `NONE`, ...
    #[serde(deserialize_with = "null_default")]
    pub resource_type: String,
    #[serde(deserialize_with = "null_default")]
    pub resource_value: f64,
    #[serde(deserialize_with = "null_default")]
    pub spell_vamp: f64,
    #[serde(deserialize_with = "null_default")]
    pub tenacity: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Rune {
    #[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub id: u32,
    #[serde(rename = "rawDescription", deserialize_with = "null_default")]
    pub raw_description: String,
    #[serde(rename = "rawDisplayName", skip_serializing_if = "Option::is_none")]
    pub raw_display_name: Option<String>,
}

/// Complete rune page; only exposed for the active player.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FullRunes {
    #[serde(rename = "generalRunes", deserialize_with = "null_default")]
    pub general_runes: Vec<Rune>,
    #[serde(deserialize_with = "null_default")]
    pub keystone: Rune,
    #[serde(rename = "primaryRuneTree", deserialize_with = "null_default")]
    pub primary_rune_tree: Rune,
    #[serde(rename = "secondaryRuneTree", deserialize_with = "null_default")]
    pub secondary_rune_tree: Rune,
    #[serde(rename = "statRunes", deserialize_with = "null_default")]
    pub stat_runes: Vec<Rune>,
}

/// Keystone and trees, available for every player.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Runes {
    #[serde(deserialize_with = "null_default")]
    pub keystone: Rune,
    #[serde(rename = "primaryRuneTree", deserialize_with = "null_default")]
    pub primary_rune_tree: Rune,
    #[serde(rename = "secondaryRuneTree", deserialize_with = "null_default")]
    pub secondary_rune_tree: Rune,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Player {
    #[serde(rename = "championName", deserialize_with = "null_default")]
    pub champion_name: String,
    #[serde(rename = "isBot", deserialize_with = "null_default")]
    pub is_bot: bool,
    #[serde(rename = "isDead", deserialize_with = "null_default")]
    pub is_dead: bool,
    #[serde(deserialize_with = "null_default")]
    pub items: Vec<Item>,
    #[serde(deserialize_with = "null_default")]
    pub level: u32,
    #[serde(deserialize_with = "null_default")]
    pub position: String,
    #[serde(rename = "rawChampionName", deserialize_with = "null_default")]
    pub raw_champion_name: String,
    #[serde(rename = "respawnTimer", deserialize_with = "null_default")]
    pub respawn_timer: f64,
    #[serde(deserialize_with = "null_default")]
    pub runes: Runes,
    #[serde(deserialize_with = "null_default")]
    pub scores: Scores,
    #[serde(rename = "skinID", deserialize_with = "null_default")]
    pub skin_id: u32,
    #[serde(rename = "summonerName", deserialize_with = "null_default")]
    pub summoner_name: String,
    #[serde(rename = "summonerSpells", deserialize_with = "null_default")]
    pub summoner_spells: SummonerSpells,
    /// `ORDER` (blue side) or `CHAOS` (red side).
    #[serde(deserialize_with = "null_default")]
    pub team: String,
    #[serde(rename = "riotId", skip_serializing_if = "Option::is_none")]
    pub riot_id: Option<String>,
    #[serde(rename = "riotIdGameName", skip_serializing_if = "Option::is_none")]
    pub riot_id_game_name: Option<String>,
    #[serde(rename = "riotIdTagLine", skip_serializing_if = "Option::is_none")]
    pub riot_id_tag_line: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Item {
    #[serde(rename = "canUse", deserialize_with = "null_default")]
    pub can_use: bool,
    #[serde(deserialize_with = "null_default")]
    pub consumable: bool,
    #[serde(deserialize_with = "null_default")]
    pub count: u32,
    #[serde(rename = "displayName", deserialize_with = "null_default")]
    pub display_name: String,
    #[serde(rename = "itemID", deserialize_with = "null_default")]
    pub item_id: u32,
    #[serde(deserialize_with = "null_default")]
    pub price: u32,
    #[serde(rename = "rawDescription", deserialize_with = "null_default")]
    pub raw_description: String,
    #[serde(rename = "rawDisplayName", deserialize_with = "null_default")]
    pub raw_display_name: String,
    #[serde(deserialize_with = "null_default")]
    pub slot: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Scores {
    #[serde(deserialize_with = "null_default")]
    pub assists: u32,
    #[serde(rename = "creepScore", deserialize_with = "null_default")]
    pub creep_score: u32,
    #[serde(deserialize_with = "null_default")]
    pub deaths: u32,
    #[serde(deserialize_with = "null_default")]
    pub kills: u32,
    #[serde(rename = "wardScore", deserialize_with = "null_default")]
    pub ward_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SummonerSpell {
    #[serde(rename = "displayName", deserialize_with = "null_default")]
    pub display_name: String,
    #[serde(rename = "rawDescription", deserialize_with = "null_default")]
    pub raw_description: String,
    #[serde(rename = "rawDisplayName", deserialize_with = "null_default")]
    pub raw_display_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SummonerSpells {
    #[serde(rename = "summonerSpellOne", deserialize_with = "null_default")]
    pub summoner_spell_one: SummonerSpell,
    #[serde(rename = "summonerSpellTwo", deserialize_with = "null_default")]
    pub summoner_spell_two: SummonerSpell,
}

/// Envelope used by `/eventdata` and the `events` key of `/allgamedata`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Events {
    #[serde(rename = "Events", deserialize_with = "null_default")]
    pub events: Vec<Event>,
}

/// A single match occurrence.
///
/// Which optional fields are present depends on `event_name`: a
/// `ChampionKill` carries killer, victim and assisters, a `DragonKill`
/// carries the dragon type and whether it was stolen, and so on.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Event {
    #[serde(rename = "EventID", deserialize_with = "null_default")]
    pub event_id: u32,
    #[serde(rename = "EventName", deserialize_with = "null_default")]
    pub event_name: String,
    /// Seconds since game start.
    #[serde(rename = "EventTime", deserialize_with = "null_default")]
    pub event_time: f64,
    #[serde(rename = "Assisters", skip_serializing_if = "Option::is_none")]
    pub assisters: Option<Vec<String>>,
    #[serde(rename = "DragonType", skip_serializing_if = "Option::is_none")]
    pub dragon_type: Option<String>,
    #[serde(rename = "KillerName", skip_serializing_if = "Option::is_none")]
    pub killer_name: Option<String>,
    #[serde(rename = "Recipient", skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    /// `"True"` or `"False"`; see [`Event::was_stolen`].
    #[serde(rename = "Stolen", skip_serializing_if = "Option::is_none")]
    pub stolen: Option<String>,
    #[serde(rename = "TurretKilled", skip_serializing_if = "Option::is_none")]
    pub turret_killed: Option<String>,
    #[serde(rename = "VictimName", skip_serializing_if = "Option::is_none")]
    pub victim_name: Option<String>,
    #[serde(rename = "InhibKilled", skip_serializing_if = "Option::is_none")]
    pub inhib_killed: Option<String>,
    #[serde(rename = "Acer", skip_serializing_if = "Option::is_none")]
    pub acer: Option<String>,
    #[serde(rename = "AcingTeam", skip_serializing_if = "Option::is_none")]
    pub acing_team: Option<String>,
    #[serde(rename = "KillStreak", skip_serializing_if = "Option::is_none")]
    pub kill_streak: Option<u32>,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        EventKind::from_name(&self.event_name)
    }

    /// Whether an objective was stolen. `None` for events without a `Stolen` field.
    pub fn was_stolen(&self) -> Option<bool> {
        self.stolen
            .as_deref()
            .map(|s| s.eq_ignore_ascii_case("true"))
    }
}

/// Basic data about the game (`/gamestats`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameData {
    #[serde(rename = "gameMode", deserialize_with = "null_default")]
    pub game_mode: String,
    /// Seconds since game start.
    #[serde(rename = "gameTime", deserialize_with = "null_default")]
    pub game_time: f64,
    #[serde(rename = "mapName", deserialize_with = "null_default")]
    pub map_name: String,
    #[serde(rename = "mapNumber", deserialize_with = "null_default")]
    pub map_number: u32,
    #[serde(rename = "mapTerrain", deserialize_with = "null_default")]
    pub map_terrain: String,
}
