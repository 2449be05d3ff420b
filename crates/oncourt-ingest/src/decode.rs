//! Conversion from the raw serde shapes into the typed [`GameRecord`].

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use oncourt_model::{Action, GameId, GameRecord, PersonId, PlayerRecord, TeamId, TeamRecord};

use crate::error::{IngestError, Result};
use crate::raw::{RawAction, RawGame, RawPlayer, RawTeam};

/// Game id used when the feed omits one. Only ever a labelling concern; the
/// engine itself never branches on the game id.
const UNKNOWN_GAME_ID: &str = "unknown";

/// Reads and decodes a game record from a JSON file.
pub fn read_game(path: &Path) -> Result<GameRecord> {
    let text = fs::read_to_string(path)?;
    let raw: RawGame = serde_json::from_str(&text)?;
    from_raw(raw)
}

/// Decodes a game record from an already-parsed JSON value.
pub fn decode_game(value: &serde_json::Value) -> Result<GameRecord> {
    let raw: RawGame = RawGame::deserialize(value)?;
    from_raw(raw)
}

/// Validates the raw record and converts it into a [`GameRecord`], failing
/// fast when a required top-level field is absent.
pub fn from_raw(raw: RawGame) -> Result<GameRecord> {
    let game_id = GameId::new(raw.game_id.unwrap_or_else(|| UNKNOWN_GAME_ID.to_string()))?;
    let home = convert_team(raw.home_team, "home")?;
    let away = convert_team(raw.away_team, "away")?;
    if home.team_id == away.team_id {
        return Err(IngestError::Structural(format!(
            "home and away share team id {}",
            home.team_id
        )));
    }
    let raw_actions = raw
        .actions
        .ok_or_else(|| IngestError::Structural("action log is missing".to_string()))?;
    let mut actions = Vec::with_capacity(raw_actions.len());
    let mut skipped = 0usize;
    for raw_action in raw_actions {
        match convert_action(raw_action) {
            Some(action) => actions.push(action),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(game = %game_id, skipped, "skipped malformed action rows");
    }
    Ok(GameRecord {
        game_id,
        home,
        away,
        actions,
    })
}

fn convert_team(raw: Option<RawTeam>, side: &str) -> Result<TeamRecord> {
    let raw =
        raw.ok_or_else(|| IngestError::Structural(format!("{side} team block is missing")))?;
    let team_id = raw
        .team_id
        .ok_or_else(|| IngestError::Structural(format!("{side} team id is missing")))?;
    let raw_players = raw
        .players
        .ok_or_else(|| IngestError::Structural(format!("{side} player array is missing")))?;
    if raw_players.is_empty() {
        return Err(IngestError::Structural(format!(
            "{side} player array is empty"
        )));
    }
    let players = raw_players
        .into_iter()
        .map(|player| convert_player(player, side))
        .collect::<Result<Vec<_>>>()?;
    Ok(TeamRecord {
        team_id: TeamId::new(team_id),
        name: raw.team_name,
        players,
    })
}

fn convert_player(raw: RawPlayer, side: &str) -> Result<PlayerRecord> {
    let person_id = raw
        .person_id
        .ok_or_else(|| IngestError::Structural(format!("{side} roster entry without person id")))?;
    Ok(PlayerRecord {
        person_id: PersonId::new(person_id),
        first_name: raw.first_name.unwrap_or_default(),
        family_name: raw.family_name.unwrap_or_default(),
        display_name: raw.display_name,
        jersey: raw.jersey_num,
        position: raw.position.filter(|position| !position.trim().is_empty()),
        minutes: raw.statistics.and_then(|statistics| statistics.minutes),
    })
}

/// Converts one raw action row. Rows without an action number, period, or
/// clock cannot be placed on the time axis and are skipped.
fn convert_action(raw: RawAction) -> Option<Action> {
    let action_number = raw.action_number?;
    let period = raw.period?;
    let clock = raw.clock?;
    Some(Action {
        action_number,
        period,
        clock,
        team_id: raw.team_id.map(TeamId::new),
        person_id: raw.person_id.map(PersonId::new),
        player_name: raw.player_name,
        action_type: raw.action_type.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
    })
}
