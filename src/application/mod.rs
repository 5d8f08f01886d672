//! Application layer - Commands, Queries, and Handlers.
//!
//! Drives the assessment domain and coordinates it with the checkpoint and
//! repository ports.

pub mod handlers;

pub use handlers::{
    AssessmentRunner, ListAssessmentsHandler, ListOrganizationAssessmentsQuery,
    ListUserAssessmentsQuery, SaveAssessmentCommand, SaveAssessmentHandler,
    SaveAssessmentOutcome,
};
