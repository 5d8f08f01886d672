//! Assessment repository port.
//!
//! Durable storage for finalized results. Records are append-only: a retake
//! produces a new record rather than editing an old one.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::assessment::{AssessmentResult, Response};
use crate::domain::foundation::{AssessmentId, DomainError, OrganizationId, Timestamp, UserId};
use crate::domain::leadership::{LeadershipFamily, LeadershipType};
use crate::domain::scoring::ScoreTotals;

/// Flattened, storable form of an assessment result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: AssessmentId,
    pub user_id: UserId,
    pub organization_id: Option<OrganizationId>,
    /// Raw per-metric totals in canonical order.
    pub scores: ScoreTotals,
    pub leadership_family: LeadershipFamily,
    pub leadership_type: LeadershipType,
    pub responses: Option<Vec<Response>>,
    pub completed_at: Timestamp,
}

impl AssessmentRecord {
    /// Builds a record from a result, keeping the result's id.
    pub fn from_result(
        result: &AssessmentResult,
        organization_id: Option<OrganizationId>,
        responses: Option<Vec<Response>>,
    ) -> Self {
        Self {
            id: result.id,
            user_id: result.user_id.clone(),
            organization_id,
            scores: result.scores.totals(),
            leadership_family: result.leadership_family,
            leadership_type: result.leadership_type,
            responses,
            completed_at: result.completed_at,
        }
    }
}

/// Repository port for finalized assessments.
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Persist a record and return its id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, record: &AssessmentRecord) -> Result<AssessmentId, DomainError>;

    /// Find a record by id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, DomainError>;

    /// All records for a user, newest `completed_at` first.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<AssessmentRecord>, DomainError>;

    /// All records filed under an organization, newest first.
    async fn find_by_organization(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Vec<AssessmentRecord>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{AssessmentSession, UserProfile};
    use crate::domain::catalog::ChoiceLetter;

    #[test]
    fn assessment_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AssessmentRepository) {}
    }

    #[test]
    fn record_flattens_breakdown_into_canonical_totals() {
        let user = UserProfile::register("r@example.com", "R", "S").unwrap();
        let mut session = AssessmentSession::for_user(user);
        session.start();
        session.answer("scenario-1", ChoiceLetter::C).unwrap();
        session.complete();
        let result = session.calculate_result().unwrap();

        let org = OrganizationId::new();
        let record = AssessmentRecord::from_result(&result, Some(org), None);

        assert_eq!(record.id, result.id);
        assert_eq!(record.organization_id, Some(org));
        assert_eq!(
            record.scores.as_array(),
            &[4, 4, 2, 4, 3, 4, 0, 3, 4, 4, 4, 4, 4]
        );
        assert_eq!(record.leadership_type, LeadershipType::Mentor);
    }
}
