//! In-Memory Checkpoint Store Adapter
//!
//! Keeps checkpoints in a process-local map. Useful for testing and
//! single-process hosts.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::SessionCheckpoint;
use crate::domain::foundation::UserId;
use crate::ports::{CheckpointStore, StorageError};

/// In-memory storage for session checkpoints
#[derive(Debug, Clone, Default)]
pub struct InMemoryCheckpointStore {
    checkpoints: Arc<RwLock<HashMap<UserId, SessionCheckpoint>>>,
}

impl InMemoryCheckpointStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored checkpoints
    pub async fn len(&self) -> usize {
        self.checkpoints.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.checkpoints.read().await.is_empty()
    }
}

#[async_trait]
impl CheckpointStore for InMemoryCheckpointStore {
    async fn save(&self, checkpoint: &SessionCheckpoint) -> Result<(), StorageError> {
        let user_id = checkpoint.user_id().ok_or(StorageError::MissingOwner)?.clone();
        self.checkpoints
            .write()
            .await
            .insert(user_id, checkpoint.clone());
        Ok(())
    }

    async fn load(&self, user_id: &UserId) -> Result<Option<SessionCheckpoint>, StorageError> {
        Ok(self.checkpoints.read().await.get(user_id).cloned())
    }

    async fn clear(&self, user_id: &UserId) -> Result<(), StorageError> {
        self.checkpoints.write().await.remove(user_id);
        Ok(())
    }
}
