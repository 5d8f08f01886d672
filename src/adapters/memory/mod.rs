//! In-memory repository adapters.

mod assessment_repository;

pub use assessment_repository::InMemoryAssessmentRepository;
