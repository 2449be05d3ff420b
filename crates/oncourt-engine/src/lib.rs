//! Lineup inference engine.
//!
//! Reconstructs, for a single basketball game, which five players per team
//! were on the court at every moment, from a raw play-by-play action log and
//! end-of-game box-score statistics. Official starting-lineup data disagrees
//! with what substitution sequences imply, so starting fives are inferred per
//! quarter from substitution direction and on-court action presence, then
//! evolved by replaying substitutions.
//!
//! The engine consumes one decoded [`oncourt_model::GameRecord`] and produces
//! an ordered snapshot sequence, a substitution list, and a diagnostics
//! report. Acquisition, persistence, and presentation live in other crates.

pub mod boundaries;
pub mod clock;
pub mod error;
pub mod inference;
pub mod quarters;
pub mod query;
pub mod resolve;
pub mod roster;
pub mod subs;
pub mod timeline;
pub mod tracker;

pub use clock::ClockParseError;
pub use error::{Result, TrackError};
pub use query::{CourtPlayer, OnCourt};
pub use roster::Roster;
pub use tracker::{TrackOutcome, track_game};
