//! Checkpoint storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where in-progress session checkpoints are kept
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local; lost on restart
    #[default]
    Memory,
    /// One YAML file per user under `checkpoint_dir`
    File,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory for file checkpoints
    #[serde(default = "default_checkpoint_dir")]
    pub checkpoint_dir: PathBuf,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::File && self.checkpoint_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingCheckpointDir);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            checkpoint_dir: default_checkpoint_dir(),
        }
    }
}

fn default_checkpoint_dir() -> PathBuf {
    PathBuf::from("data/checkpoints")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_defaults_to_memory() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::Memory);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_backend_needs_directory() {
        let config = StorageConfig {
            backend: StorageBackend::File,
            checkpoint_dir: PathBuf::new(),
        };
        assert_eq!(config.validate(), Err(ValidationError::MissingCheckpointDir));
    }
}
