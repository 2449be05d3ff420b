pub mod error;
pub mod events;
pub mod game;
pub mod ids;
pub mod lineup;
pub mod report;

pub use error::{ModelError, Result};
pub use events::{
    PlayerQuarterStatus, QuarterBoundary, QuarterStatus, SubDirection, SubstitutionEvent,
};
pub use game::{Action, GameRecord, Player, PlayerRecord, TeamRecord};
pub use ids::{GameId, PersonId, TeamId};
pub use lineup::LineupState;
pub use report::{IssueKind, IssueSeverity, TrackIssue, TrackReport};
