//! Derived event types: substitutions, quarter boundaries, and per-quarter
//! player classifications.

use serde::{Deserialize, Serialize};

use crate::ids::{GameId, PersonId, TeamId};

/// Direction of a player's first substitution within a quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubDirection {
    In,
    Out,
}

/// Whether a player began a quarter on court, on the bench, or played it
/// through without any substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuarterStatus {
    Started,
    Benched,
    PlayedFull,
}

/// One resolved substitution from the play-by-play log.
///
/// The sequence handed to callers is ordered by `(period, elapsed_seconds)`
/// with ties broken by input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionEvent {
    pub game_id: GameId,
    pub action_number: u64,
    pub period: u32,
    pub clock: String,
    pub elapsed_seconds: f64,
    pub team_id: TeamId,
    pub player_out: PersonId,
    pub player_out_name: String,
    pub player_in: PersonId,
    pub player_in_name: String,
    pub description: String,
}

/// First and last action number observed for a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterBoundary {
    pub period: u32,
    pub first_action_number: u64,
    pub last_action_number: u64,
}

/// Classification of one player's presence in one quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerQuarterStatus {
    pub player_id: PersonId,
    pub period: u32,
    pub first_sub: Option<SubDirection>,
    pub first_sub_action: Option<u64>,
    /// Count of on-court actions (shots, rebounds, fouls, ...) attributed to
    /// the player in this quarter.
    pub on_court_actions: u64,
    pub status: QuarterStatus,
}
