//! Per-quarter player classification from substitution direction.
//!
//! No roster-per-quarter field exists in the feed, so the *direction* of a
//! player's first substitution in a quarter is the only signal for whether
//! they began it on court: subbed OUT first means they started, subbed IN
//! first means they began on the bench. Players with no substitution at all
//! either played the whole quarter (they left on-court traces) or sat it out.

use std::collections::BTreeMap;

use oncourt_model::{
    Action, GameRecord, PersonId, PlayerQuarterStatus, QuarterBoundary, QuarterStatus,
    SubDirection, SubstitutionEvent,
};

use crate::roster::Roster;

/// Action types that prove a player was on the floor.
pub const ON_COURT_ACTION_TYPES: &[&str] = &[
    "Made Shot",
    "Missed Shot",
    "Rebound",
    "Foul",
    "Free Throw",
    "Turnover",
    "Jump Ball",
    "Assist",
    "Block",
    "Steal",
];

const REGULATION_PERIODS: u32 = 4;

/// Classifies every (player, regulation period) pair with a recorded
/// boundary.
pub fn classify_quarters(
    game: &GameRecord,
    roster: &Roster,
    substitutions: &[SubstitutionEvent],
    boundaries: &BTreeMap<u32, QuarterBoundary>,
) -> BTreeMap<(u32, PersonId), PlayerQuarterStatus> {
    let on_court_counts = count_on_court_actions(&game.actions);
    let mut patterns = BTreeMap::new();
    for &period in boundaries.keys().filter(|&&period| period <= REGULATION_PERIODS) {
        for player in roster.players.values() {
            let status = classify_player_quarter(
                player.id,
                period,
                substitutions,
                &on_court_counts,
            );
            patterns.insert((period, player.id), status);
        }
    }
    patterns
}

fn classify_player_quarter(
    player_id: PersonId,
    period: u32,
    substitutions: &[SubstitutionEvent],
    on_court_counts: &BTreeMap<(u32, PersonId), u64>,
) -> PlayerQuarterStatus {
    let first_in = substitutions
        .iter()
        .filter(|event| event.period == period && event.player_in == player_id)
        .map(|event| event.action_number)
        .min();
    let first_out = substitutions
        .iter()
        .filter(|event| event.period == period && event.player_out == player_id)
        .map(|event| event.action_number)
        .min();

    let (first_sub, first_sub_action) = match (first_in, first_out) {
        (Some(in_action), Some(out_action)) => {
            if out_action < in_action {
                (Some(SubDirection::Out), Some(out_action))
            } else {
                (Some(SubDirection::In), Some(in_action))
            }
        }
        (Some(in_action), None) => (Some(SubDirection::In), Some(in_action)),
        (None, Some(out_action)) => (Some(SubDirection::Out), Some(out_action)),
        (None, None) => (None, None),
    };

    let on_court_actions = on_court_counts
        .get(&(period, player_id))
        .copied()
        .unwrap_or(0);

    let status = match first_sub {
        // Subbed out before ever coming in: was on court at quarter start.
        Some(SubDirection::Out) => QuarterStatus::Started,
        // Entered from the bench.
        Some(SubDirection::In) => QuarterStatus::Benched,
        None if on_court_actions > 0 => QuarterStatus::PlayedFull,
        None => QuarterStatus::Benched,
    };

    PlayerQuarterStatus {
        player_id,
        period,
        first_sub,
        first_sub_action,
        on_court_actions,
        status,
    }
}

fn count_on_court_actions(actions: &[Action]) -> BTreeMap<(u32, PersonId), u64> {
    let mut counts: BTreeMap<(u32, PersonId), u64> = BTreeMap::new();
    for action in actions {
        let Some(person_id) = action.person_id else {
            continue;
        };
        if !ON_COURT_ACTION_TYPES.contains(&action.action_type.as_str()) {
            continue;
        }
        *counts.entry((action.period, person_id)).or_insert(0) += 1;
    }
    counts
}
