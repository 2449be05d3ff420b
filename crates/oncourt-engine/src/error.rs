use thiserror::Error;

use crate::clock::ClockParseError;

#[derive(Debug, Error)]
pub enum TrackError {
    /// The roster cannot be built (a player id appears on both teams).
    #[error("roster error: {0}")]
    Roster(String),
    /// An emitted lineup snapshot would violate the five-distinct/disjoint
    /// invariant. This signals a bug in the replay logic, never a
    /// data-quality condition, so it is raised instead of being emitted.
    #[error("lineup invariant violated: {0}")]
    Lineup(String),
    #[error(transparent)]
    Clock(#[from] ClockParseError),
}

pub type Result<T> = std::result::Result<T, TrackError>;
