//! Finalized assessment outcome.

use serde::{Deserialize, Serialize};

use super::response::Response;
use crate::domain::foundation::{AssessmentId, SessionId, Timestamp, UserId};
use crate::domain::leadership::{LeadershipFamily, LeadershipType};
use crate::domain::scoring::{ScoreAggregator, ScoreBreakdown};

/// Scores plus classification for one completed attempt.
///
/// Immutable once created; a retake yields a new result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub id: AssessmentId,
    pub session_id: SessionId,
    pub user_id: UserId,
    pub scores: ScoreBreakdown,
    pub leadership_family: LeadershipFamily,
    pub leadership_type: LeadershipType,
    pub completed_at: Timestamp,
}

impl AssessmentResult {
    /// Aggregates and classifies a response log.
    pub fn calculate(session_id: SessionId, user_id: UserId, responses: &[Response]) -> Self {
        let scores = ScoreAggregator::aggregate(responses);
        let leadership_family = LeadershipFamily::classify(&scores);
        let leadership_type = LeadershipType::classify(&scores, leadership_family);

        Self {
            id: AssessmentId::new(),
            session_id,
            user_id,
            scores,
            leadership_family,
            leadership_type,
            completed_at: Timestamp::now(),
        }
    }
}
