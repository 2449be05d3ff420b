//! Data-quality diagnostics surfaced to callers.
//!
//! Recovered problems (a dropped substitution, an unparseable clock) are
//! collected here instead of being printed to a log stream, so callers can
//! decide severity for themselves.

use serde::{Deserialize, Serialize};

use crate::ids::GameId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// What kind of data problem was recovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A substitution's incoming name could not be matched to the roster;
    /// the event was dropped.
    UnresolvedSubstitution,
    /// A substitution's outgoing player was not in the current five; the
    /// event left the lineup unchanged.
    SubOutNotOnCourt,
    /// A countdown clock did not match the PT grammar and was defaulted.
    BadClock,
    /// A box-score minutes string did not parse and was treated as zero.
    BadMinutes,
    /// Quarter inference produced fewer than five players for a team and the
    /// nominal starters were used instead.
    ShortLineup,
}

/// A single recovered data problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackIssue {
    pub kind: IssueKind,
    pub severity: IssueSeverity,
    pub period: Option<u32>,
    pub action_number: Option<u64>,
    pub message: String,
}

/// All diagnostics for a single tracked game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackReport {
    #[serde(rename = "game")]
    pub game_id: GameId,
    pub issues: Vec<TrackIssue>,
}

impl TrackReport {
    pub fn new(game_id: GameId) -> Self {
        Self {
            game_id,
            issues: Vec::new(),
        }
    }

    pub fn push_warning(
        &mut self,
        kind: IssueKind,
        period: Option<u32>,
        action_number: Option<u64>,
        message: impl Into<String>,
    ) {
        self.issues.push(TrackIssue {
            kind,
            severity: IssueSeverity::Warning,
            period,
            action_number,
            message: message.into(),
        });
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Count of issues of one kind, regardless of severity.
    pub fn count_of(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|issue| issue.kind == kind).count()
    }
}
