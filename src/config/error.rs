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
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("AI base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("Maximum report length must be between 1 and 1000000 characters")]
    InvalidReportLimit,

    #[error("Simulated delay must not exceed 10000 ms")]
    InvalidSimulatedDelay,

    #[error("Submission TTL and store capacity must be greater than zero")]
    InvalidSubmissionRetention,
}
