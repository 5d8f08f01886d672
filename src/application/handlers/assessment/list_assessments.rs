//! Query handlers for stored assessments.

use std::sync::Arc;

use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, OrganizationId, UserId};
use crate::ports::{AssessmentRecord, AssessmentRepository};

/// Query for a user's assessment history.
#[derive(Debug, Clone)]
pub struct ListUserAssessmentsQuery {
    pub user_id: UserId,
}

/// Query for every assessment filed under an organization.
#[derive(Debug, Clone)]
pub struct ListOrganizationAssessmentsQuery {
    pub organization_id: OrganizationId,
}

/// Handler for listing assessments, newest first.
pub struct ListAssessmentsHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl ListAssessmentsHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    /// Fetches one stored assessment.
    ///
    /// # Errors
    ///
    /// `AssessmentNotFound` if no record has this id.
    pub async fn get(&self, id: &AssessmentId) -> Result<AssessmentRecord, DomainError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::AssessmentNotFound,
                format!("Assessment {} not found", id),
            )
            .with_detail("assessment_id", id.to_string())
        })
    }

    pub async fn for_user(
        &self,
        query: ListUserAssessmentsQuery,
    ) -> Result<Vec<AssessmentRecord>, DomainError> {
        self.repository.find_by_user(&query.user_id).await
    }

    pub async fn for_organization(
        &self,
        query: ListOrganizationAssessmentsQuery,
    ) -> Result<Vec<AssessmentRecord>, DomainError> {
        self.repository
            .find_by_organization(&query.organization_id)
            .await
    }

    /// Most recent assessment for a user, if any.
    pub async fn latest_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<AssessmentRecord>, DomainError> {
        Ok(self.repository.find_by_user(user_id).await?.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryAssessmentRepository;
    use crate::domain::foundation::Timestamp;
    use crate::domain::leadership::{LeadershipFamily, LeadershipType};
    use crate::domain::scoring::ScoreTotals;
    use chrono::{Duration, Utc};

    fn record(user: &str, org: Option<OrganizationId>, hours_ago: i64) -> AssessmentRecord {
        AssessmentRecord {
            id: AssessmentId::new(),
            user_id: UserId::new(user).unwrap(),
            organization_id: org,
            scores: ScoreTotals::zero(),
            leadership_family: LeadershipFamily::Drivers,
            leadership_type: LeadershipType::Catalyst,
            responses: None,
            completed_at: Timestamp::from_datetime(Utc::now() - Duration::hours(hours_ago)),
        }
    }

    #[tokio::test]
    async fn latest_for_user_picks_newest() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let old = record("u", None, 48);
        let new = record("u", None, 1);
        repo.save(&old).await.unwrap();
        repo.save(&new).await.unwrap();
        let handler = ListAssessmentsHandler::new(repo);

        let latest = handler
            .latest_for_user(&UserId::new("u").unwrap())
            .await
            .unwrap();

        assert_eq!(latest.map(|r| r.id), Some(new.id));
    }

    #[tokio::test]
    async fn lists_by_organization() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let org = OrganizationId::new();
        repo.save(&record("a", Some(org), 2)).await.unwrap();
        repo.save(&record("b", None, 1)).await.unwrap();
        let handler = ListAssessmentsHandler::new(repo);

        let found = handler
            .for_organization(ListOrganizationAssessmentsQuery {
                organization_id: org,
            })
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].user_id.as_str(), "a");
    }

    #[tokio::test]
    async fn get_returns_stored_record() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let stored = record("u", None, 3);
        repo.save(&stored).await.unwrap();
        let handler = ListAssessmentsHandler::new(repo);

        let found = handler.get(&stored.id).await.unwrap();
        assert_eq!(found.id, stored.id);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let handler = ListAssessmentsHandler::new(Arc::new(InMemoryAssessmentRepository::new()));
        let id = AssessmentId::new();

        let err = handler.get(&id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AssessmentNotFound);
        assert_eq!(err.details.get("assessment_id"), Some(&id.to_string()));
    }

    #[tokio::test]
    async fn unknown_user_has_no_history() {
        let handler = ListAssessmentsHandler::new(Arc::new(InMemoryAssessmentRepository::new()));
        let found = handler
            .for_user(ListUserAssessmentsQuery {
                user_id: UserId::new("ghost").unwrap(),
            })
            .await
            .unwrap();
        assert!(found.is_empty());
    }
}
