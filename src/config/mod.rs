//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `EQUIP360` prefix and
//! nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use equip360::config::{init_tracing, AppConfig};
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! init_tracing(&config.logging).expect("Tracing already initialised");
//! ```

mod database;
mod environment;
mod error;
mod logging;
mod storage;

pub use database::DatabaseConfig;
pub use environment::Environment;
pub use error::{ConfigError, ValidationError};
pub use logging::{init_tracing, LoggingConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// development setup with in-memory storage and no database.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub environment: Environment,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Checkpoint storage for in-progress sessions
    #[serde(default)]
    pub storage: StorageConfig,

    /// Results database; absent means results are kept in memory
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `EQUIP360` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `EQUIP360__STORAGE__BACKEND=file` -> `storage.backend = file`
    /// - `EQUIP360__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("EQUIP360")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any section is invalid, or if production
    /// runs without a database.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.storage.validate()?;
        match &self.database {
            Some(database) => database.validate()?,
            None if self.is_production() => {
                return Err(ValidationError::DatabaseRequiredInProduction)
            }
            None => {}
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
