//! Single-game tracking façade.

use serde::Serialize;

use tracing::info;

use oncourt_model::{GameRecord, LineupState, SubstitutionEvent, TrackReport};

use crate::boundaries;
use crate::clock::ClockParseError;
use crate::error::Result;
use crate::query::{self, OnCourt};
use crate::quarters;
use crate::roster::Roster;
use crate::subs;
use crate::timeline;

/// Everything the engine produces for one game.
///
/// Built fresh per call and never mutated afterwards; reruns on identical
/// input produce identical output.
#[derive(Debug, Clone, Serialize)]
pub struct TrackOutcome {
    pub lineups: Vec<LineupState>,
    pub substitutions: Vec<SubstitutionEvent>,
    pub roster: Roster,
    pub report: TrackReport,
}

impl TrackOutcome {
    /// Who was on court at `(period, clock)`. See [`query::players_on_court`].
    pub fn players_on_court(
        &self,
        period: u32,
        clock: &str,
    ) -> std::result::Result<Option<OnCourt>, ClockParseError> {
        query::players_on_court(&self.lineups, &self.roster, period, clock)
    }
}

/// Runs the full inference pipeline over one decoded game record.
///
/// Pure computation: no I/O, no shared state, bounded by the length of the
/// action log. Recovered data problems land in the outcome's report;
/// only structural roster problems and lineup-invariant violations abort.
pub fn track_game(game: &GameRecord) -> Result<TrackOutcome> {
    let mut report = TrackReport::new(game.game_id.clone());
    let roster = Roster::build(game, &mut report)?;
    let boundaries = boundaries::scan(&game.actions);
    let substitutions = subs::parse_substitutions(game, &roster, &mut report);
    let patterns = quarters::classify_quarters(game, &roster, &substitutions, &boundaries);
    let lineups = timeline::build_timeline(
        game,
        &roster,
        &substitutions,
        &patterns,
        &boundaries,
        &mut report,
    )?;
    info!(
        game = %game.game_id,
        snapshots = lineups.len(),
        substitutions = substitutions.len(),
        warnings = report.warning_count(),
        "tracked game"
    );
    Ok(TrackOutcome {
        lineups,
        substitutions,
        roster,
        report,
    })
}
