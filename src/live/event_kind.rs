//! Typed view over the `EventName` of a match event.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Kinds of events reported by `/eventdata`.
///
/// Names this crate does not know about are kept verbatim in
/// [`EventKind::Other`], so parsing never fails.
///
/// # Examples
///
/// ```rust
/// use liveclientdata::EventKind;
///
/// let kind: EventKind = "DragonKill".parse().unwrap();
/// assert_eq!(kind, EventKind::DragonKill);
/// assert!(kind.is_objective());
/// assert_eq!(EventKind::from_name("Brand New").to_string(), "Brand New");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    GameStart,
    MinionsSpawning,
    FirstBrick,
    FirstBlood,
    TurretKilled,
    InhibKilled,
    InhibRespawningSoon,
    InhibRespawned,
    DragonKill,
    HeraldKill,
    BaronKill,
    ChampionKill,
    Multikill,
    Ace,
    GameEnd,
    Other(String),
}

impl EventKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "GameStart" => EventKind::GameStart,
            "MinionsSpawning" => EventKind::MinionsSpawning,
            "FirstBrick" => EventKind::FirstBrick,
            "FirstBlood" => EventKind::FirstBlood,
            "TurretKilled" => EventKind::TurretKilled,
            "InhibKilled" => EventKind::InhibKilled,
            "InhibRespawningSoon" => EventKind::InhibRespawningSoon,
            "InhibRespawned" => EventKind::InhibRespawned,
            "DragonKill" => EventKind::DragonKill,
            "HeraldKill" => EventKind::HeraldKill,
            "BaronKill" => EventKind::BaronKill,
            "ChampionKill" => EventKind::ChampionKill,
            "Multikill" => EventKind::Multikill,
            "Ace" => EventKind::Ace,
            "GameEnd" => EventKind::GameEnd,
            other => EventKind::Other(other.to_string()),
        }
    }

    /// The `EventName` string as sent by the game client.
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::GameStart => "GameStart",
            EventKind::MinionsSpawning => "MinionsSpawning",
            EventKind::FirstBrick => "FirstBrick",
            EventKind::FirstBlood => "FirstBlood",
            EventKind::TurretKilled => "TurretKilled",
            EventKind::InhibKilled => "InhibKilled",
            EventKind::InhibRespawningSoon => "InhibRespawningSoon",
            EventKind::InhibRespawned => "InhibRespawned",
            EventKind::DragonKill => "DragonKill",
            EventKind::HeraldKill => "HeraldKill",
            EventKind::BaronKill => "BaronKill",
            EventKind::ChampionKill => "ChampionKill",
            EventKind::Multikill => "Multikill",
            EventKind::Ace => "Ace",
            EventKind::GameEnd => "GameEnd",
            EventKind::Other(name) => name,
        }
    }

    /// Epic monsters and structures.
    pub fn is_objective(&self) -> bool {
        matches!(
            self,
            EventKind::FirstBrick
                | EventKind::TurretKilled
                | EventKind::InhibKilled
                | EventKind::DragonKill
                | EventKind::HeraldKill
                | EventKind::BaronKill
        )
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(EventKind::from_name(s))
    }
}
