//! PostgreSQL implementation of AssessmentRepository.
//!
//! Persists finalized assessment records to the `assessments` table.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{PgPool, Row};

use crate::domain::assessment::Response;
use crate::domain::foundation::{
    AssessmentId, DomainError, ErrorCode, OrganizationId, Timestamp, UserId,
};
use crate::domain::leadership::{LeadershipFamily, LeadershipType};
use crate::domain::scoring::{ScoreTotals, METRIC_COUNT};
use crate::ports::{AssessmentRecord, AssessmentRepository};

const SELECT_COLUMNS: &str = r#"
    SELECT id, user_id, organization_id, scores, leadership_family,
           leadership_type, responses, completed_at
    FROM assessments
"#;

/// PostgreSQL implementation of AssessmentRepository.
#[derive(Clone)]
pub struct PostgresAssessmentRepository {
    pool: PgPool,
}

impl PostgresAssessmentRepository {
    /// Creates a new PostgresAssessmentRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssessmentRepository for PostgresAssessmentRepository {
    async fn save(&self, record: &AssessmentRecord) -> Result<AssessmentId, DomainError> {
        let scores: Vec<i32> = record
            .scores
            .as_array()
            .iter()
            .map(|&total| total as i32)
            .collect();

        sqlx::query(
            r#"
            INSERT INTO assessments (
                id, user_id, organization_id, scores, leadership_family,
                leadership_type, responses, completed_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.user_id.as_str())
        .bind(record.organization_id.map(|org| *org.as_uuid()))
        .bind(&scores)
        .bind(record.leadership_family.code())
        .bind(record.leadership_type.code())
        .bind(record.responses.as_ref().map(Json))
        .bind(record.completed_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert assessment", e))?;

        tracing::info!(
            assessment_id = %record.id,
            user_id = %record.user_id,
            leadership_type = %record.leadership_type,
            "Assessment saved"
        );

        Ok(record.id)
    }

    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch assessment", e))?;

        row.map(row_to_record).transpose()
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<AssessmentRecord>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE user_id = $1 ORDER BY completed_at DESC",
            SELECT_COLUMNS
        ))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch assessments by user", e))?;

        rows.into_iter().map(row_to_record).collect()
    }

    async fn find_by_organization(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Vec<AssessmentRecord>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE organization_id = $1 ORDER BY completed_at DESC",
            SELECT_COLUMNS
        ))
        .bind(organization_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch assessments by organization", e))?;

        rows.into_iter().map(row_to_record).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn db_error(context: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, err))
}

fn column<'r, T>(row: &'r sqlx::postgres::PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| db_error(&format!("Failed to get {}", name), e))
}

/// Rebuilds canonical totals from an `INTEGER[]` column.
fn scores_from_column(raw: Vec<i32>) -> Result<ScoreTotals, DomainError> {
    if raw.len() != METRIC_COUNT {
        return Err(db_error(
            "Invalid scores",
            format!("expected {} entries, got {}", METRIC_COUNT, raw.len()),
        ));
    }
    let mut totals = [0u32; METRIC_COUNT];
    for (slot, value) in totals.iter_mut().zip(raw) {
        *slot = u32::try_from(value).map_err(|_| db_error("Invalid scores", "negative total"))?;
    }
    Ok(ScoreTotals::from_array(totals))
}

fn row_to_record(row: sqlx::postgres::PgRow) -> Result<AssessmentRecord, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let user_id: String = column(&row, "user_id")?;
    let organization_id: Option<uuid::Uuid> = column(&row, "organization_id")?;
    let scores: Vec<i32> = column(&row, "scores")?;
    let family: String = column(&row, "leadership_family")?;
    let leadership_type: String = column(&row, "leadership_type")?;
    let responses: Option<Json<Vec<Response>>> = column(&row, "responses")?;
    let completed_at: chrono::DateTime<chrono::Utc> = column(&row, "completed_at")?;

    Ok(AssessmentRecord {
        id: AssessmentId::from_uuid(id),
        user_id: UserId::new(user_id).map_err(|e| db_error("Invalid user_id", e))?,
        organization_id: organization_id.map(OrganizationId::from_uuid),
        scores: scores_from_column(scores)?,
        leadership_family: LeadershipFamily::from_code(&family)
            .ok_or_else(|| db_error("Invalid leadership_family", &family))?,
        leadership_type: LeadershipType::from_code(&leadership_type)
            .ok_or_else(|| db_error("Invalid leadership_type", &leadership_type))?,
        responses: responses.map(|Json(responses)| responses),
        completed_at: Timestamp::from_datetime(completed_at),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_from_column_restores_canonical_order() {
        let raw: Vec<i32> = (0..13).collect();
        let totals = scores_from_column(raw).unwrap();
        assert_eq!(totals.as_array()[12], 12);
    }

    #[test]
    fn scores_from_column_rejects_wrong_length() {
        let err = scores_from_column(vec![1, 2, 3]).unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }

    #[test]
    fn scores_from_column_rejects_negative_totals() {
        let mut raw = vec![0; 13];
        raw[4] = -1;
        assert!(scores_from_column(raw).is_err());
    }

    #[test]
    fn stored_codes_parse_back() {
        for family in LeadershipFamily::ALL {
            assert_eq!(LeadershipFamily::from_code(family.code()), Some(family));
        }
        for leadership_type in LeadershipType::ALL {
            assert_eq!(
                LeadershipType::from_code(leadership_type.code()),
                Some(leadership_type)
            );
        }
    }
}
