//! Point queries against a built timeline.

use serde::Serialize;

use oncourt_model::{LineupState, PersonId, TeamId};

use crate::clock::{self, ClockParseError};
use crate::roster::Roster;

/// One on-court player with their resolved display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourtPlayer {
    pub id: PersonId,
    pub display_name: String,
}

/// Answer to a point query: who was on court at the requested instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OnCourt {
    pub period: u32,
    pub clock: String,
    pub elapsed_seconds: f64,
    pub home_team: TeamId,
    pub away_team: TeamId,
    pub home_players: Vec<CourtPlayer>,
    pub away_players: Vec<CourtPlayer>,
}

/// Returns the lineup in effect at `(period, clock)`: the most recent
/// snapshot at or before that instant, defaulting to the first snapshot for
/// instants before tip-off. `None` only for an empty timeline.
///
/// Linear scan; timelines hold tens to low hundreds of snapshots and point
/// queries are not issued at high frequency.
pub fn players_on_court(
    states: &[LineupState],
    roster: &Roster,
    period: u32,
    clock: &str,
) -> Result<Option<OnCourt>, ClockParseError> {
    let target = clock::elapsed_seconds(period, clock)?;
    let Some(first) = states.first() else {
        return Ok(None);
    };
    let mut current = first;
    for state in states {
        if state.elapsed_seconds <= target {
            current = state;
        }
    }
    Ok(Some(on_court(current, roster)))
}

fn on_court(state: &LineupState, roster: &Roster) -> OnCourt {
    let named = |ids: &[PersonId; 5]| {
        ids.iter()
            .map(|&id| CourtPlayer {
                id,
                display_name: roster.display_name(id),
            })
            .collect()
    };
    OnCourt {
        period: state.period,
        clock: state.clock.clone(),
        elapsed_seconds: state.elapsed_seconds,
        home_team: state.home_team,
        away_team: state.away_team,
        home_players: named(&state.home_players),
        away_players: named(&state.away_players),
    }
}
