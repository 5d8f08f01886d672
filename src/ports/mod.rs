//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CheckpointStore` - Resumable snapshots of in-progress sessions
//! - `AssessmentRepository` - Durable storage of finalized results

mod assessment_repository;
mod checkpoint_store;

pub use assessment_repository::{AssessmentRecord, AssessmentRepository};
pub use checkpoint_store::{CheckpointStore, StorageError};
