//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DECISION_MATE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use decision_mate::config::AppConfig;
//!
//! let config = AppConfig::load_validated().expect("Invalid configuration");
//! println!("Storing preferences in {:?}", config.storage.backend);
//! ```

mod celebration;
mod error;
mod identity;
mod logging;
mod storage;

pub use celebration::{CelebrationConfig, SharingConfig};
pub use error::{ConfigError, ValidationError};
pub use identity::IdentityConfig;
pub use logging::LoggingConfig;
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Sign-in widget configuration
    #[serde(default)]
    pub identity: IdentityConfig,

    /// Local storage backend
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Confetti timing
    #[serde(default)]
    pub celebration: CelebrationConfig,

    /// Share message settings
    #[serde(default)]
    pub sharing: SharingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DECISION_MATE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DECISION_MATE__IDENTITY__CLIENT_ID=...` -> `identity.client_id = ...`
    /// - `DECISION_MATE__STORAGE__BACKEND=file` -> `storage.backend = file`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DECISION_MATE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step; startup should use this.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid. A
    /// missing identity client id is reported first.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.identity.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;
        self.celebration.validate()?;
        self.sharing.validate()?;
        Ok(())
    }
}
