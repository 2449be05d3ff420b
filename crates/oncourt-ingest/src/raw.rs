//! Serde shapes for the raw decoded game record.
//!
//! Every field is optional here; requiredness is enforced once, in
//! [`crate::decode`], so missing data fails fast with a structural error
//! instead of propagating `None` through the engine. Aliases accept both the
//! camelCase spellings of live play-by-play feeds and snake_case exports.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawGame {
    #[serde(alias = "gameId")]
    pub game_id: Option<String>,
    #[serde(alias = "homeTeam")]
    pub home_team: Option<RawTeam>,
    #[serde(alias = "awayTeam")]
    pub away_team: Option<RawTeam>,
    pub actions: Option<Vec<RawAction>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTeam {
    #[serde(alias = "teamId")]
    pub team_id: Option<i64>,
    #[serde(alias = "teamName")]
    pub team_name: Option<String>,
    pub players: Option<Vec<RawPlayer>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPlayer {
    #[serde(alias = "personId")]
    pub person_id: Option<i64>,
    #[serde(alias = "firstName")]
    pub first_name: Option<String>,
    #[serde(alias = "familyName")]
    pub family_name: Option<String>,
    #[serde(alias = "name", alias = "displayName")]
    pub display_name: Option<String>,
    #[serde(alias = "jerseyNum", alias = "jersey")]
    pub jersey_num: Option<String>,
    pub position: Option<String>,
    pub statistics: Option<RawStatistics>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawStatistics {
    /// Box-score minutes in `"MM:SS"` form.
    pub minutes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawAction {
    #[serde(alias = "actionNumber")]
    pub action_number: Option<u64>,
    pub period: Option<u32>,
    pub clock: Option<String>,
    #[serde(alias = "teamId")]
    pub team_id: Option<i64>,
    #[serde(alias = "personId")]
    pub person_id: Option<i64>,
    #[serde(alias = "playerName")]
    pub player_name: Option<String>,
    #[serde(alias = "actionType")]
    pub action_type: Option<String>,
    pub description: Option<String>,
}
