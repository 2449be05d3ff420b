//! Substitution extraction from the action log.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use oncourt_model::{GameRecord, IssueKind, SubstitutionEvent, TrackReport};

use crate::clock;
use crate::resolve;
use crate::roster::Roster;

const SUBSTITUTION_ACTION_TYPE: &str = "Substitution";

/// `SUB: <incoming> FOR <outgoing>` as written in substitution descriptions.
static SUB_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"SUB:\s*(.+?)\s+FOR\s+(.+)").expect("sub pattern compiles"));

/// Extracts typed substitution events from the action log.
///
/// The outgoing player comes straight from the action's person id; the
/// incoming player exists only as free text in the description and is
/// resolved against the acting team's roster. Events whose incoming name
/// cannot be resolved are dropped with an `UnresolvedSubstitution` warning:
/// one missing transition degrades the timeline, it never aborts the game.
///
/// The returned events are sorted by `(period, elapsed_seconds)`; ties keep
/// input order.
pub fn parse_substitutions(
    game: &GameRecord,
    roster: &Roster,
    report: &mut TrackReport,
) -> Vec<SubstitutionEvent> {
    let mut events = Vec::new();
    for action in &game.actions {
        if action.action_type != SUBSTITUTION_ACTION_TYPE {
            continue;
        }
        let context = (Some(action.period), Some(action.action_number));
        let Some(team_id) = action.team_id else {
            report.push_warning(
                IssueKind::UnresolvedSubstitution,
                context.0,
                context.1,
                "substitution action without a team id",
            );
            continue;
        };
        let Some(player_out) = action.person_id else {
            report.push_warning(
                IssueKind::UnresolvedSubstitution,
                context.0,
                context.1,
                "substitution action without an outgoing person id",
            );
            continue;
        };
        let Some(captures) = SUB_PATTERN.captures(&action.description) else {
            report.push_warning(
                IssueKind::UnresolvedSubstitution,
                context.0,
                context.1,
                format!("description {:?} does not match SUB pattern", action.description),
            );
            continue;
        };
        let incoming_name = captures[1].trim().to_string();
        let outgoing_name = captures[2].trim().to_string();
        let Some(player_in) = resolve::resolve(roster, &incoming_name, team_id, true) else {
            report.push_warning(
                IssueKind::UnresolvedSubstitution,
                context.0,
                context.1,
                format!("could not resolve incoming player {incoming_name:?}"),
            );
            continue;
        };
        let elapsed_seconds = match clock::elapsed_seconds(action.period, &action.clock) {
            Ok(elapsed) => elapsed,
            Err(error) => {
                report.push_warning(
                    IssueKind::BadClock,
                    context.0,
                    context.1,
                    error.to_string(),
                );
                // Remaining time defaults to zero when the clock is unreadable.
                clock::period_start_elapsed(action.period) + clock::period_length(action.period)
            }
        };
        events.push(SubstitutionEvent {
            game_id: game.game_id.clone(),
            action_number: action.action_number,
            period: action.period,
            clock: action.clock.clone(),
            elapsed_seconds,
            team_id,
            player_out,
            player_out_name: action
                .player_name
                .clone()
                .unwrap_or_else(|| outgoing_name.clone()),
            player_in,
            player_in_name: incoming_name,
            description: action.description.clone(),
        });
    }
    events.sort_by(|a, b| {
        a.period
            .cmp(&b.period)
            .then(a.elapsed_seconds.total_cmp(&b.elapsed_seconds))
    });
    debug!(events = events.len(), "extracted substitution events");
    events
}
