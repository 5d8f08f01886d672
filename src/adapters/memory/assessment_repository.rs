//! In-memory implementation of AssessmentRepository.
//!
//! Useful for tests and for hosts without a database.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{AssessmentId, DomainError, OrganizationId, UserId};
use crate::ports::{AssessmentRecord, AssessmentRepository};

/// In-memory assessment storage
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssessmentRepository {
    records: Arc<RwLock<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl InMemoryAssessmentRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all records (test helper)
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }

    /// Number of stored records
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    async fn find_where<F>(&self, predicate: F) -> Vec<AssessmentRecord>
    where
        F: Fn(&AssessmentRecord) -> bool,
    {
        let records = self.records.read().await;
        let mut matches: Vec<AssessmentRecord> =
            records.values().filter(|r| predicate(r)).cloned().collect();
        matches.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        matches
    }
}

#[async_trait]
impl AssessmentRepository for InMemoryAssessmentRepository {
    async fn save(&self, record: &AssessmentRecord) -> Result<AssessmentId, DomainError> {
        self.records
            .write()
            .await
            .insert(record.id, record.clone());
        Ok(record.id)
    }

    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, DomainError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<AssessmentRecord>, DomainError> {
        Ok(self.find_where(|r| &r.user_id == user_id).await)
    }

    async fn find_by_organization(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Vec<AssessmentRecord>, DomainError> {
        Ok(self
            .find_where(|r| r.organization_id.as_ref() == Some(organization_id))
            .await)
    }
}
