//! Command and query handlers.

pub mod assessment;

pub use assessment::{
    AssessmentRunner, ListAssessmentsHandler, ListOrganizationAssessmentsQuery,
    ListUserAssessmentsQuery, SaveAssessmentCommand, SaveAssessmentHandler,
    SaveAssessmentOutcome,
};
