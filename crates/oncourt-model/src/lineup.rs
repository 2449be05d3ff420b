//! Lineup snapshots and their invariants.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::ids::{GameId, PersonId, TeamId};

/// The five-a-side on-court state at a specific elapsed time.
///
/// Snapshots form an append-only sequence with non-decreasing
/// `elapsed_seconds`; each one must satisfy [`LineupState::check_invariants`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupState {
    pub game_id: GameId,
    pub period: u32,
    pub clock: String,
    pub elapsed_seconds: f64,
    pub home_team: TeamId,
    pub away_team: TeamId,
    pub home_players: [PersonId; 5],
    pub away_players: [PersonId; 5],
}

impl LineupState {
    /// Checks that each side carries five distinct players and the two sides
    /// are disjoint.
    ///
    /// A violation is a programming-bug signal in the replay logic, not a
    /// data-quality condition, so it is reported as an error rather than a
    /// diagnostic.
    pub fn check_invariants(&self) -> Result<(), ModelError> {
        let home: BTreeSet<PersonId> = self.home_players.iter().copied().collect();
        let away: BTreeSet<PersonId> = self.away_players.iter().copied().collect();
        if home.len() != 5 {
            return Err(ModelError::LineupInvariant(format!(
                "home side has {} distinct players at elapsed {}",
                home.len(),
                self.elapsed_seconds
            )));
        }
        if away.len() != 5 {
            return Err(ModelError::LineupInvariant(format!(
                "away side has {} distinct players at elapsed {}",
                away.len(),
                self.elapsed_seconds
            )));
        }
        if let Some(shared) = home.intersection(&away).next() {
            return Err(ModelError::LineupInvariant(format!(
                "player {shared} appears on both sides at elapsed {}",
                self.elapsed_seconds
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: [i64; 5]) -> [PersonId; 5] {
        values.map(PersonId::new)
    }

    fn state(home: [i64; 5], away: [i64; 5]) -> LineupState {
        LineupState {
            game_id: GameId::new("TEST").expect("valid id"),
            period: 1,
            clock: "PT12M00.00S".to_string(),
            elapsed_seconds: 0.0,
            home_team: TeamId::new(1),
            away_team: TeamId::new(2),
            home_players: ids(home),
            away_players: ids(away),
        }
    }

    #[test]
    fn accepts_disjoint_fives() {
        let state = state([1, 2, 3, 4, 5], [6, 7, 8, 9, 10]);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn rejects_duplicate_within_side() {
        let state = state([1, 2, 3, 4, 4], [6, 7, 8, 9, 10]);
        assert!(state.check_invariants().is_err());
    }

    #[test]
    fn rejects_player_on_both_sides() {
        let state = state([1, 2, 3, 4, 5], [5, 7, 8, 9, 10]);
        assert!(state.check_invariants().is_err());
    }
}
