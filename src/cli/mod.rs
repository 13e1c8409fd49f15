//! CLI argument definitions and parsing.

use clap::{Args, Parser, Subcommand};

use crate::live::Endpoint;

/// Connection overrides shared by every command
#[derive(Debug, Args)]
pub struct ConnectionArgs {
    /// Base URL of the API (or set `LIVECLIENTDATA_URL` env var).
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds (or set `LIVECLIENTDATA_TIMEOUT_MS` env var).
    #[clap(long, global = true)]
    pub timeout_ms: Option<u64>,
}

/// Player selector for the per-player endpoints
#[derive(Debug, Args)]
pub struct SummonerArg {
    /// Summoner name (or Riot ID, `Name#TAG`) as listed by `player-list`.
    #[clap(long, short = 'n')]
    pub summoner_name: String,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Everything at once: active player, all players, events and game data
    AllGameData,

    /// Full detail for the locally controlled player
    ActivePlayer,

    /// Name of the locally controlled player
    ActivePlayerName,

    /// Abilities of the locally controlled player
    ActivePlayerAbilities,

    /// Complete rune page of the locally controlled player
    ActivePlayerRunes,

    /// All players in the game
    PlayerList,

    /// Kills, deaths, assists, creep score and ward score of a player
    PlayerScores {
        #[clap(flatten)]
        summoner: SummonerArg,
    },

    /// Summoner spells of a player
    PlayerSummonerSpells {
        #[clap(flatten)]
        summoner: SummonerArg,
    },

    /// Keystone and rune trees of a player
    PlayerMainRunes {
        #[clap(flatten)]
        summoner: SummonerArg,
    },

    /// Items of a player
    PlayerItems {
        #[clap(flatten)]
        summoner: SummonerArg,
    },

    /// Events that have happened so far
    Events,

    /// Game mode, map and elapsed time
    GameStats,
}

impl Commands {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Commands::AllGameData => Endpoint::AllGameData,
            Commands::ActivePlayer => Endpoint::ActivePlayer,
            Commands::ActivePlayerName => Endpoint::ActivePlayerName,
            Commands::ActivePlayerAbilities => Endpoint::ActivePlayerAbilities,
            Commands::ActivePlayerRunes => Endpoint::ActivePlayerRunes,
            Commands::PlayerList => Endpoint::PlayerList,
            Commands::PlayerScores { .. } => Endpoint::PlayerScores,
            Commands::PlayerSummonerSpells { .. } => Endpoint::PlayerSummonerSpells,
            Commands::PlayerMainRunes { .. } => Endpoint::PlayerMainRunes,
            Commands::PlayerItems { .. } => Endpoint::PlayerItems,
            Commands::Events => Endpoint::EventData,
            Commands::GameStats => Endpoint::GameStats,
        }
    }

    pub fn summoner_name(&self) -> Option<&str> {
        match self {
            Commands::PlayerScores { summoner }
            | Commands::PlayerSummonerSpells { summoner }
            | Commands::PlayerMainRunes { summoner }
            | Commands::PlayerItems { summoner } => Some(&summoner.summoner_name),
            _ => None,
        }
    }
}

#[derive(Debug, Parser)]
#[clap(
    name = "liveclientdata",
    about = "Query the League of Legends Live Client Data API"
)]
pub struct LiveCli {
    #[clap(flatten)]
    pub connection: ConnectionArgs,

    /// Log request URLs and response statuses to stderr.
    #[clap(long, global = true)]
    pub debug: bool,

    /// Print JSON on a single line instead of pretty-printed.
    #[clap(long, global = true)]
    pub compact: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_command() {
        let cli = LiveCli::try_parse_from(["liveclientdata", "game-stats"]).unwrap();
        assert!(matches!(cli.command, Commands::GameStats));
        assert!(!cli.debug);
        assert!(!cli.compact);
        assert_eq!(cli.connection.base_url, None);
    }

    #[test]
    fn test_parse_summoner_command() {
        let cli = LiveCli::try_parse_from([
            "liveclientdata",
            "player-items",
            "-n",
            "Riot Tuxedo",
        ])
        .unwrap();
        assert_eq!(cli.command.endpoint(), Endpoint::PlayerItems);
        assert_eq!(cli.command.summoner_name(), Some("Riot Tuxedo"));
    }

    #[test]
    fn test_summoner_name_is_required() {
        let result = LiveCli::try_parse_from(["liveclientdata", "player-scores"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = LiveCli::try_parse_from([
            "liveclientdata",
            "events",
            "--compact",
            "--timeout-ms",
            "250",
            "--base-url",
            "http://localhost:9000/liveclientdata",
        ])
        .unwrap();
        assert!(cli.compact);
        assert_eq!(cli.connection.timeout_ms, Some(250));
        assert_eq!(
            cli.connection.base_url.as_deref(),
            Some("http://localhost:9000/liveclientdata")
        );
        assert_eq!(cli.command.endpoint(), Endpoint::EventData);
    }

    #[test]
    fn test_every_endpoint_has_a_command() {
        let names = [
            "all-game-data",
            "active-player",
            "active-player-name",
            "active-player-abilities",
            "active-player-runes",
            "player-list",
            "player-scores",
            "player-summoner-spells",
            "player-main-runes",
            "player-items",
            "events",
            "game-stats",
        ];
        let mut endpoints = Vec::new();
        for name in names {
            let mut args = vec!["liveclientdata", name];
            if name.starts_with("player-") && name != "player-list" {
                args.extend(["-n", "x"]);
            }
            endpoints.push(LiveCli::try_parse_from(args).unwrap().command.endpoint());
        }
        assert_eq!(endpoints, Endpoint::ALL.to_vec());
    }
}
