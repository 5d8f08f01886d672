//! File-based Checkpoint Store Adapter
//!
//! Stores one YAML checkpoint per user under a base directory.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::domain::assessment::SessionCheckpoint;
use crate::domain::foundation::UserId;
use crate::ports::{CheckpointStore, StorageError};

/// File-based storage for session checkpoints
#[derive(Debug, Clone)]
pub struct FileCheckpointStore {
    base_path: PathBuf,
}

impl FileCheckpointStore {
    /// Create a new file store with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let store = FileCheckpointStore::new("./data/checkpoints");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the checkpoint file path for a user
    fn checkpoint_path(&self, user_id: &UserId) -> PathBuf {
        self.base_path
            .join(format!("{}.yaml", file_stem(user_id.as_str())))
    }

    /// Ensure the base directory exists
    async fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))
    }
}

/// Escapes a user id into a safe file stem.
///
/// ASCII alphanumerics, `-` and `_` pass through; every other byte becomes
/// `%XX`, so distinct ids never share a file.
fn file_stem(id: &str) -> String {
    let mut stem = String::with_capacity(id.len());
    for byte in id.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            stem.push(byte as char);
        } else {
            stem.push_str(&format!("%{:02X}", byte));
        }
    }
    stem
}

#[async_trait]
impl CheckpointStore for FileCheckpointStore {
    async fn save(&self, checkpoint: &SessionCheckpoint) -> Result<(), StorageError> {
        let user_id = checkpoint.user_id().ok_or(StorageError::MissingOwner)?;
        self.ensure_dir().await?;

        let yaml = serde_yaml::to_string(checkpoint)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;

        let path = self.checkpoint_path(user_id);
        fs::write(&path, yaml)
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))?;

        debug!(user_id = %user_id, path = %path.display(), "Checkpoint written");
        Ok(())
    }

    async fn load(&self, user_id: &UserId) -> Result<Option<SessionCheckpoint>, StorageError> {
        let path = self.checkpoint_path(user_id);
        if !path.exists() {
            return Ok(None);
        }

        let yaml = fs::read_to_string(&path)
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))?;

        let checkpoint = serde_yaml::from_str(&yaml)
            .map_err(|e| StorageError::DeserializationFailed(e.to_string()))?;

        Ok(Some(checkpoint))
    }

    async fn clear(&self, user_id: &UserId) -> Result<(), StorageError> {
        let path = self.checkpoint_path(user_id);
        if path.exists() {
            fs::remove_file(&path)
                .await
                .map_err(|e| StorageError::IoError(e.to_string()))?;
        }
        Ok(())
    }

    async fn exists(&self, user_id: &UserId) -> Result<bool, StorageError> {
        Ok(self.checkpoint_path(user_id).exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{AssessmentSession, UserProfile};
    use crate::domain::catalog::ChoiceLetter;
    use tempfile::TempDir;

    fn in_progress_checkpoint() -> SessionCheckpoint {
        let user = UserProfile::register("cp@example.com", "Casey", "Park").unwrap();
        let mut session = AssessmentSession::for_user(user);
        session.start();
        session.answer("scenario-1", ChoiceLetter::A).unwrap();
        session.answer("scenario-2", ChoiceLetter::B).unwrap();
        session.go_to(2);
        SessionCheckpoint::new(session)
    }

    #[tokio::test]
    async fn test_file_store_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCheckpointStore::new(temp_dir.path());
        let checkpoint = in_progress_checkpoint();
        let user_id = checkpoint.user_id().unwrap().clone();

        store.save(&checkpoint).await.unwrap();
        let loaded = store.load(&user_id).await.unwrap().unwrap();

        assert_eq!(loaded.session, checkpoint.session);
        assert_eq!(loaded.session.current_scenario_index(), 2);
        assert_eq!(loaded.session.responses().len(), 2);
    }

    #[tokio::test]
    async fn test_file_store_load_missing_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCheckpointStore::new(temp_dir.path());
        let user_id = UserId::new("nobody").unwrap();

        assert!(store.load(&user_id).await.unwrap().is_none());
        assert!(!store.exists(&user_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_file_store_clear_removes_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCheckpointStore::new(temp_dir.path());
        let checkpoint = in_progress_checkpoint();
        let user_id = checkpoint.user_id().unwrap().clone();

        store.save(&checkpoint).await.unwrap();
        assert!(store.exists(&user_id).await.unwrap());

        store.clear(&user_id).await.unwrap();
        assert!(!store.exists(&user_id).await.unwrap());

        // clearing again is fine
        store.clear(&user_id).await.unwrap();
    }

    #[tokio::test]
    async fn test_file_store_creates_nested_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCheckpointStore::new(temp_dir.path().join("a").join("b"));
        store.save(&in_progress_checkpoint()).await.unwrap();
        assert!(temp_dir.path().join("a").join("b").exists());
    }

    #[tokio::test]
    async fn test_file_store_rejects_ownerless_checkpoint() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCheckpointStore::new(temp_dir.path());
        let result = store.save(&SessionCheckpoint::new(AssessmentSession::new())).await;
        assert!(matches!(result, Err(StorageError::MissingOwner)));
    }

    #[tokio::test]
    async fn test_file_store_reports_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCheckpointStore::new(temp_dir.path());
        let user_id = UserId::new("broken").unwrap();
        std::fs::write(temp_dir.path().join("broken.yaml"), "session: [").unwrap();

        let result = store.load(&user_id).await;
        assert!(matches!(result, Err(StorageError::DeserializationFailed(_))));
    }

    #[test]
    fn file_stem_escapes_unsafe_bytes() {
        assert_eq!(file_stem("user-42_x"), "user-42_x");
        assert_eq!(file_stem("../etc"), "%2E%2E%2Fetc");
        assert_ne!(file_stem("a/b"), file_stem("a_b"));
    }
}
