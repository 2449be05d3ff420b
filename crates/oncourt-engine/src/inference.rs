//! Starting-five derivation per quarter.

use std::collections::BTreeMap;

use oncourt_model::{PersonId, Player, PlayerQuarterStatus, QuarterStatus, TeamId};

use crate::roster::Roster;

/// Seconds of recorded playing time above which a bench player is preferred
/// when backfilling a short lineup.
const ROTATION_SECONDS: u32 = 300;

/// Derives a team's starting five for one period.
///
/// Candidates are the players classified as having been on court at the
/// quarter start (`Started` or `PlayedFull`), ranked by on-court action count
/// descending: more recorded actions means higher confidence the
/// classification is real. When substitution data is too sparse to produce
/// five (blowouts, short rotations), the lineup is backfilled from the roster
/// by total game minutes and truncated to exactly five.
pub fn starting_five(
    roster: &Roster,
    team: TeamId,
    period: u32,
    patterns: &BTreeMap<(u32, PersonId), PlayerQuarterStatus>,
) -> Vec<PersonId> {
    let mut candidates: Vec<&PlayerQuarterStatus> = roster
        .team_players(team)
        .filter_map(|player| patterns.get(&(period, player.id)))
        .filter(|status| {
            matches!(
                status.status,
                QuarterStatus::Started | QuarterStatus::PlayedFull
            )
        })
        .collect();
    candidates.sort_by(|a, b| {
        b.on_court_actions
            .cmp(&a.on_court_actions)
            .then(a.player_id.cmp(&b.player_id))
    });

    let mut five: Vec<PersonId> = candidates
        .iter()
        .take(5)
        .map(|status| status.player_id)
        .collect();
    if five.len() < 5 {
        backfill_by_minutes(roster, team, &mut five);
    }
    five.truncate(5);
    five
}

/// Fills a short lineup from the roster by total game minutes, preferring
/// rotation players with more than five recorded minutes.
fn backfill_by_minutes(roster: &Roster, team: TeamId, five: &mut Vec<PersonId>) {
    let mut bench: Vec<&Player> = roster
        .team_players(team)
        .filter(|player| !five.contains(&player.id))
        .collect();
    bench.sort_by(|a, b| {
        b.seconds_played
            .cmp(&a.seconds_played)
            .then(a.id.cmp(&b.id))
    });
    for player in bench
        .iter()
        .filter(|player| player.seconds_played > ROTATION_SECONDS)
    {
        if five.len() >= 5 {
            return;
        }
        five.push(player.id);
    }
    for player in bench
        .iter()
        .filter(|player| player.seconds_played <= ROTATION_SECONDS)
    {
        if five.len() >= 5 {
            return;
        }
        five.push(player.id);
    }
}
