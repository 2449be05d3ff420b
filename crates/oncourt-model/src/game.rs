//! Typed input record for a single game.
//!
//! These types are produced once at the ingest boundary and read-only
//! afterwards. Anything the engine derives (minutes in seconds, starter
//! flags, substitution events) lives in its own types, never here.

use serde::{Deserialize, Serialize};

use crate::ids::{GameId, PersonId, TeamId};

/// A fully decoded game: two rosters and the ordered play-by-play log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_id: GameId,
    pub home: TeamRecord,
    pub away: TeamRecord,
    pub actions: Vec<Action>,
}

/// One team's slice of the decoded record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team_id: TeamId,
    pub name: Option<String>,
    pub players: Vec<PlayerRecord>,
}

/// A player's box-score entry as decoded at the input boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub person_id: PersonId,
    pub first_name: String,
    pub family_name: String,
    pub display_name: Option<String>,
    pub jersey: Option<String>,
    pub position: Option<String>,
    /// Box-score minutes in `"MM:SS"` form, when recorded.
    pub minutes: Option<String>,
}

/// One play-by-play log entry.
///
/// `action_number` is unique and increases through the log; `clock` is the
/// countdown clock in `PT{mm}M{ss.ss}S` form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    pub action_number: u64,
    pub period: u32,
    pub clock: String,
    pub team_id: Option<TeamId>,
    pub person_id: Option<PersonId>,
    pub player_name: Option<String>,
    pub action_type: String,
    pub description: String,
}

/// A roster entry enriched with derived minutes and the nominal-starter flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PersonId,
    pub first_name: String,
    pub family_name: String,
    pub display_name: String,
    pub jersey: Option<String>,
    pub position: Option<String>,
    pub team_id: TeamId,
    /// Flagged for the top five by recorded minutes among players with a
    /// known position. Used only as a fallback when substitution-based
    /// inference cannot produce a starting five.
    pub is_starter: bool,
    /// Recorded box-score minutes, converted to whole seconds.
    pub seconds_played: u32,
}

impl Player {
    /// `"{first} {family}"`, the form substitution descriptions usually use.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.family_name)
    }
}
