//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresAssessmentRepository` - Append-only store of finalized results
//! - `connect_pool` - Pool setup plus optional embedded migrations

mod assessment_repository;
mod pool;

pub use assessment_repository::PostgresAssessmentRepository;
pub use pool::connect_pool;
