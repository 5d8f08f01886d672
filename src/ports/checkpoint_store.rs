//! Checkpoint Store Port - resumable snapshots of in-progress sessions.
//!
//! Keyed by user: each user has at most one live checkpoint, and writing a
//! new one replaces the old.

use async_trait::async_trait;

use crate::domain::assessment::SessionCheckpoint;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};

/// Errors that can occur during checkpoint storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Checkpoint has no owning user")]
    MissingOwner,

    #[error("Failed to serialize checkpoint: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize checkpoint: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Port for persisting and loading session checkpoints
#[async_trait]
pub trait CheckpointStore: Send + Sync {
    /// Save a checkpoint under its session's user, replacing any existing one.
    ///
    /// # Errors
    /// Returns `StorageError::MissingOwner` if the session has no user
    async fn save(&self, checkpoint: &SessionCheckpoint) -> Result<(), StorageError>;

    /// Load the checkpoint for a user.
    ///
    /// Returns `None` if the user has no checkpoint.
    async fn load(&self, user_id: &UserId) -> Result<Option<SessionCheckpoint>, StorageError>;

    /// Remove the checkpoint for a user. Missing checkpoints are not an error.
    async fn clear(&self, user_id: &UserId) -> Result<(), StorageError>;

    /// Check whether a checkpoint exists.
    async fn exists(&self, user_id: &UserId) -> Result<bool, StorageError> {
        Ok(self.load(user_id).await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkpoint_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn CheckpointStore) {}
    }

    #[test]
    fn storage_error_maps_to_storage_code() {
        let err: DomainError = StorageError::IoError("disk full".to_string()).into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(err.message.contains("disk full"));
    }
}
