//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `JUMPLIST_SYNC` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use jumplist_sync::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Recent sessions kept in {}", config.store.path.display());
//! ```

mod catalog;
mod error;
mod executable;
mod logging;
mod sink;
mod store;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use executable::ExecutableConfig;
pub use logging::LoggingConfig;
pub use sink::SinkConfig;
pub use store::StoreConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration rooted at `./data`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Recent session list persistence
    #[serde(default)]
    pub store: StoreConfig,

    /// Saved session lookup
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Jump list mirror
    #[serde(default)]
    pub sink: SinkConfig,

    /// Shortcut target resolution
    #[serde(default)]
    pub executable: ExecutableConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `JUMPLIST_SYNC` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `JUMPLIST_SYNC__STORE__PATH=/var/lib/term/recent.yaml` -> `store.path`
    /// - `JUMPLIST_SYNC__SINK__MAX_SLOTS=12` -> `sink.max_slots = 12`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("JUMPLIST_SYNC")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration and validate it in one step
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` if loading fails, or
    /// `ConfigError::ValidationFailed` if a value is out of range
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.store.validate()?;
        self.catalog.validate()?;
        self.sink.validate()?;
        self.executable.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
