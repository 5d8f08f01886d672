//! SaveAssessmentHandler - Persists a finalized result.
//!
//! Saving is best effort: a failed write is reported in the outcome so the
//! caller can show the result anyway, never as an `Err`.

use std::sync::Arc;

use crate::domain::assessment::{AssessmentResult, Response};
use crate::domain::foundation::{AssessmentId, OrganizationId};
use crate::ports::{AssessmentRecord, AssessmentRepository};

/// Command to persist a completed assessment.
#[derive(Debug, Clone)]
pub struct SaveAssessmentCommand {
    pub result: AssessmentResult,
    /// Organization the respondent was invited through, if any.
    pub organization_id: Option<OrganizationId>,
    /// Raw response log to archive alongside the scores.
    pub responses: Option<Vec<Response>>,
}

/// What happened to a save attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveAssessmentOutcome {
    pub success: bool,
    pub assessment_id: Option<AssessmentId>,
    pub error: Option<String>,
    /// Set after a successful save that consumed an organization context;
    /// the caller should drop whatever pending invitation state it holds.
    pub clear_pending_organization: bool,
}

impl SaveAssessmentOutcome {
    fn saved(id: AssessmentId, had_organization: bool) -> Self {
        Self {
            success: true,
            assessment_id: Some(id),
            error: None,
            clear_pending_organization: had_organization,
        }
    }

    fn failed(error: String) -> Self {
        Self {
            success: false,
            assessment_id: None,
            error: Some(error),
            clear_pending_organization: false,
        }
    }
}

/// Handler for persisting assessment results.
pub struct SaveAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl SaveAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SaveAssessmentCommand) -> SaveAssessmentOutcome {
        let had_organization = cmd.organization_id.is_some();
        let record = AssessmentRecord::from_result(&cmd.result, cmd.organization_id, cmd.responses);

        match self.repository.save(&record).await {
            Ok(id) => {
                tracing::info!(
                    assessment_id = %id,
                    user_id = %record.user_id,
                    leadership_family = %record.leadership_family,
                    leadership_type = %record.leadership_type,
                    "Assessment result saved"
                );
                SaveAssessmentOutcome::saved(id, had_organization)
            }
            Err(e) => {
                tracing::warn!(
                    user_id = %record.user_id,
                    error = %e,
                    "Failed to save assessment result"
                );
                SaveAssessmentOutcome::failed(e.to_string())
            }
        }
    }
}
