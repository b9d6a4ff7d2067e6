//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Store retention must keep at least one session")]
    InvalidRetention,

    #[error("Sink must offer at least one slot")]
    InvalidMaxSlots,

    #[error("Executable file name must be a bare file name")]
    InvalidExecutableFileName,

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
