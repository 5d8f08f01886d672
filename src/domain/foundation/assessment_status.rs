//! AssessmentStatus enum for tracking the lifecycle of an assessment attempt.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of an assessment attempt.
///
/// `NotStarted -> InProgress -> Completed`. Completed is terminal; a retake
/// is a new attempt, not a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl AssessmentStatus {
    /// Returns true if answers can be recorded.
    pub fn accepts_answers(&self) -> bool {
        matches!(self, AssessmentStatus::InProgress)
    }
}

impl StateMachine for AssessmentStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use AssessmentStatus::*;
        matches!((self, target), (NotStarted, InProgress) | (InProgress, Completed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AssessmentStatus::*;
        match self {
            NotStarted => vec![InProgress],
            InProgress => vec![Completed],
            Completed => vec![],
        }
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssessmentStatus::NotStarted => "Not Started",
            AssessmentStatus::InProgress => "In Progress",
            AssessmentStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}
