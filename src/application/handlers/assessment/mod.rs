//! Assessment command and query handlers.

mod list_assessments;
mod runner;
mod save_assessment;

pub use list_assessments::{
    ListAssessmentsHandler, ListOrganizationAssessmentsQuery, ListUserAssessmentsQuery,
};
pub use runner::AssessmentRunner;
pub use save_assessment::{SaveAssessmentCommand, SaveAssessmentHandler, SaveAssessmentOutcome};
