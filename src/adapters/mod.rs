//! Adapters - Implementations of the ports.
//!
//! - `storage` - Checkpoint stores (file and in-memory)
//! - `memory` - In-memory repositories
//! - `postgres` - PostgreSQL repositories

pub mod memory;
pub mod postgres;
pub mod storage;

pub use memory::InMemoryAssessmentRepository;
pub use postgres::{connect_pool, PostgresAssessmentRepository};
pub use storage::{checkpoint_store_from_config, FileCheckpointStore, InMemoryCheckpointStore};
