//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `DECISION_SIMS` prefix
//! and nested values are separated by double underscores. Every section is
//! optional and falls back to defaults.
//!
//! # Example
//!
//! ```no_run
//! use decision_sims::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//!
//! println!("Matrix holds up to {} options", config.matrix.max_options);
//! ```

mod error;
mod logging;
mod matrix;
mod signals;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use matrix::MatrixConfig;
pub use signals::SignalsConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Decision matrix capacity and scale
    #[serde(default)]
    pub matrix: MatrixConfig,

    /// Signal dashboard simulation tuning
    #[serde(default)]
    pub signals: SignalsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `DECISION_SIMS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Validates the result
    ///
    /// # Environment Variable Format
    ///
    /// - `DECISION_SIMS__MATRIX__MAX_OPTIONS=6` -> `matrix.max_options = 6`
    /// - `DECISION_SIMS__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// - `ConfigError::LoadError` if values cannot be parsed into expected types
    /// - `ConfigError::ValidationFailed` if a parsed value is out of bounds
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config: Self = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DECISION_SIMS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.matrix.validate()?;
        self.signals.validate()?;
        Ok(())
    }
}
