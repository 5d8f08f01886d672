//! Respondent profile supplied before an assessment can start.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::{Timestamp, UserId, ValidationError};

/// A registered respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub company: Option<String>,
    pub role: Option<String>,
    pub created_at: Timestamp,
}

impl UserProfile {
    /// Registers a new profile with a generated id.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if email or either name is blank
    /// - `InvalidFormat` if the email has no `@`
    pub fn register(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let id = UserId::new(Uuid::new_v4().to_string())?;
        Self::with_id(id, email, first_name, last_name)
    }

    /// Builds a profile for an existing user id.
    pub fn with_id(
        id: UserId,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let email = required("email", email.into())?;
        if !email.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing '@'"));
        }

        Ok(Self {
            id,
            email,
            first_name: required("first_name", first_name.into())?,
            last_name: required("last_name", last_name.into())?,
            company: None,
            role: None,
            created_at: Timestamp::now(),
        })
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

fn required(field: &str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_generates_id_and_trims() {
        let profile = UserProfile::register(" ada@example.com ", "Ada", " Lovelace")
            .unwrap()
            .with_company("Analytical Engines")
            .with_role("Director");

        assert!(!profile.id.as_str().is_empty());
        assert_eq!(profile.email, "ada@example.com");
        assert_eq!(profile.full_name(), "Ada Lovelace");
        assert_eq!(profile.company.as_deref(), Some("Analytical Engines"));
    }

    #[test]
    fn rejects_blank_names() {
        assert_eq!(
            UserProfile::register("a@b.co", "  ", "X").unwrap_err(),
            ValidationError::empty_field("first_name")
        );
    }

    #[test]
    fn rejects_email_without_at() {
        assert!(matches!(
            UserProfile::register("nobody", "A", "B").unwrap_err(),
            ValidationError::InvalidFormat { .. }
        ));
    }

    #[test]
    fn serializes_camel_case() {
        let profile = UserProfile::register("a@b.co", "A", "B").unwrap();
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["firstName"], "A");
        assert!(json["company"].is_null());
    }
}
