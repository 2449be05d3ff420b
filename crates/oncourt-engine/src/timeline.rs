//! Lineup timeline construction by substitution replay.
//!
//! Each quarter starts from the inferred starting five and replays that
//! quarter's substitutions in chronological order, emitting a snapshot after
//! every event. Home and away are updated independently: a usable inference
//! for one team never depends on the other.

use std::collections::BTreeMap;

use tracing::debug;

use oncourt_model::{
    GameRecord, IssueKind, LineupState, PersonId, PlayerQuarterStatus, QuarterBoundary,
    SubstitutionEvent, TeamId, TrackReport,
};

use crate::clock;
use crate::error::{Result, TrackError};
use crate::inference;
use crate::roster::Roster;

/// Replays the game and returns the ordered snapshot sequence.
pub fn build_timeline(
    game: &GameRecord,
    roster: &Roster,
    substitutions: &[SubstitutionEvent],
    patterns: &BTreeMap<(u32, PersonId), PlayerQuarterStatus>,
    boundaries: &BTreeMap<u32, QuarterBoundary>,
    report: &mut TrackReport,
) -> Result<Vec<LineupState>> {
    let mut states = Vec::new();
    let mut home_five: Vec<PersonId> = Vec::new();
    let mut away_five: Vec<PersonId> = Vec::new();

    for (index, &period) in boundaries.keys().enumerate() {
        if index == 0 {
            home_five = initial_five(roster, roster.home_team, period, patterns, report);
            away_five = initial_five(roster, roster.away_team, period, patterns, report);
        } else {
            refresh_five(roster, roster.home_team, period, patterns, &mut home_five);
            refresh_five(roster, roster.away_team, period, patterns, &mut away_five);
        }
        emit(
            &mut states,
            game,
            roster,
            period,
            clock::period_start_clock(period).to_string(),
            clock::period_start_elapsed(period),
            &home_five,
            &away_five,
        )?;

        for event in substitutions.iter().filter(|event| event.period == period) {
            apply_substitution(event, roster, &mut home_five, &mut away_five, report);
            // A snapshot is emitted whether or not the event changed anything,
            // so callers can line snapshots up with the substitution list.
            emit(
                &mut states,
                game,
                roster,
                period,
                event.clock.clone(),
                event.elapsed_seconds,
                &home_five,
                &away_five,
            )?;
        }
    }
    debug!(snapshots = states.len(), "replayed lineup timeline");
    Ok(states)
}

/// First-period lineup: the inferred five, or the nominal starters when the
/// inference comes up short.
fn initial_five(
    roster: &Roster,
    team: TeamId,
    period: u32,
    patterns: &BTreeMap<(u32, PersonId), PlayerQuarterStatus>,
    report: &mut TrackReport,
) -> Vec<PersonId> {
    let inferred = inference::starting_five(roster, team, period, patterns);
    if inferred.len() == 5 {
        return inferred;
    }
    report.push_warning(
        IssueKind::ShortLineup,
        Some(period),
        None,
        format!(
            "inference produced {} players for team {team}; using nominal starters",
            inferred.len()
        ),
    );
    roster.nominal_starters(team)
}

/// Quarter-boundary refresh: replace the carried-over five only when the new
/// period's inference yields a full lineup.
fn refresh_five(
    roster: &Roster,
    team: TeamId,
    period: u32,
    patterns: &BTreeMap<(u32, PersonId), PlayerQuarterStatus>,
    five: &mut Vec<PersonId>,
) {
    let inferred = inference::starting_five(roster, team, period, patterns);
    if inferred.len() == 5 {
        *five = inferred;
    }
}

fn apply_substitution(
    event: &SubstitutionEvent,
    roster: &Roster,
    home_five: &mut [PersonId],
    away_five: &mut [PersonId],
    report: &mut TrackReport,
) {
    let five: &mut [PersonId] = if event.team_id == roster.home_team {
        home_five
    } else if event.team_id == roster.away_team {
        away_five
    } else {
        report.push_warning(
            IssueKind::SubOutNotOnCourt,
            Some(event.period),
            Some(event.action_number),
            format!("substitution for unknown team {}", event.team_id),
        );
        return;
    };
    match five.iter().position(|&id| id == event.player_out) {
        Some(slot) => five[slot] = event.player_in,
        None => report.push_warning(
            IssueKind::SubOutNotOnCourt,
            Some(event.period),
            Some(event.action_number),
            format!(
                "{} was not on court to be substituted by {}",
                event.player_out_name, event.player_in_name
            ),
        ),
    }
}

#[allow(clippy::too_many_arguments)]
fn emit(
    states: &mut Vec<LineupState>,
    game: &GameRecord,
    roster: &Roster,
    period: u32,
    clock: String,
    elapsed_seconds: f64,
    home_five: &[PersonId],
    away_five: &[PersonId],
) -> Result<()> {
    let state = LineupState {
        game_id: game.game_id.clone(),
        period,
        clock,
        elapsed_seconds,
        home_team: roster.home_team,
        away_team: roster.away_team,
        home_players: to_five(home_five, "home", elapsed_seconds)?,
        away_players: to_five(away_five, "away", elapsed_seconds)?,
    };
    state
        .check_invariants()
        .map_err(|error| TrackError::Lineup(error.to_string()))?;
    for (team, side) in [
        (roster.home_team, &state.home_players),
        (roster.away_team, &state.away_players),
    ] {
        for &id in side {
            match roster.get(id) {
                Some(player) if player.team_id == team => {}
                _ => {
                    return Err(TrackError::Lineup(format!(
                        "player {id} is not on team {team}'s roster"
                    )));
                }
            }
        }
    }
    states.push(state);
    Ok(())
}

fn to_five(five: &[PersonId], side: &str, elapsed_seconds: f64) -> Result<[PersonId; 5]> {
    <[PersonId; 5]>::try_from(five.to_vec()).map_err(|_| {
        TrackError::Lineup(format!(
            "{side} side has {} players at elapsed {elapsed_seconds}",
            five.len()
        ))
    })
}
