//! Resume checkpoint for an in-flight session.

use serde::{Deserialize, Serialize};

use super::session::AssessmentSession;
use crate::domain::foundation::{AssessmentStatus, Timestamp, UserId};

/// Snapshot written after each mutation of an in-progress session.
///
/// Best effort only; the live session is authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCheckpoint {
    pub session: AssessmentSession,
    pub saved_at: Timestamp,
}

impl SessionCheckpoint {
    pub fn new(session: AssessmentSession) -> Self {
        Self {
            session,
            saved_at: Timestamp::now(),
        }
    }

    /// Owner the checkpoint is keyed by.
    pub fn user_id(&self) -> Option<&UserId> {
        self.session.user_id()
    }

    /// Only in-progress snapshots are worth restoring.
    pub fn is_resumable(&self) -> bool {
        self.session.status() == AssessmentStatus::InProgress
    }
}
