//! Storage Adapters
//!
//! Implementations of the CheckpointStore port for resumable sessions.
//!
//! ## Available Adapters
//!
//! - **FileCheckpointStore** - One YAML file per user on disk
//! - **InMemoryCheckpointStore** - Process-local map (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileCheckpointStore, InMemoryCheckpointStore};
//!
//! // Durable across restarts
//! let store = FileCheckpointStore::new("./data/checkpoints");
//!
//! // Testing
//! let store = InMemoryCheckpointStore::new();
//!
//! // From configuration
//! let store = checkpoint_store_from_config(&config.storage);
//! ```

mod file_checkpoint_store;
mod in_memory_checkpoint_store;

pub use file_checkpoint_store::FileCheckpointStore;
pub use in_memory_checkpoint_store::InMemoryCheckpointStore;

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};
use crate::ports::CheckpointStore;

/// Builds the checkpoint store selected by configuration.
pub fn checkpoint_store_from_config(config: &StorageConfig) -> Arc<dyn CheckpointStore> {
    match config.backend {
        StorageBackend::Memory => Arc::new(InMemoryCheckpointStore::new()),
        StorageBackend::File => Arc::new(FileCheckpointStore::new(&config.checkpoint_dir)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_config_selects_file_backend() {
        let temp_dir = TempDir::new().unwrap();
        let config = StorageConfig {
            backend: StorageBackend::File,
            checkpoint_dir: temp_dir.path().to_path_buf(),
        };
        let store = checkpoint_store_from_config(&config);
        let user_id = UserId::new("nobody").unwrap();
        assert!(store.load(&user_id).await.unwrap().is_none());
    }
}
