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
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid log filter '{0}'")]
    InvalidLogFilter(String),

    #[error("matrix.min_options must be at least 1")]
    MinOptionsZero,

    #[error("matrix.min_options ({min}) exceeds matrix.max_options ({max}) or the starting option count")]
    InvalidOptionBounds { min: usize, max: usize },

    #[error("matrix.axis_max must be a positive finite number")]
    InvalidAxisMax,

    #[error("signals.simulation_interval_frames must be at least 1")]
    InvalidSimulationInterval,

    #[error("signals.volatility_divisor must be a positive finite number")]
    InvalidVolatilityDivisor,

    #[error("Rejected by domain settings: {0}")]
    Domain(#[from] crate::domain::foundation::ValidationError),
}
