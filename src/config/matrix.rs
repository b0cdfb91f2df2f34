//! Decision matrix configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::tradeoff::MatrixLimits;

/// Decision matrix configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixConfig {
    /// Most options the matrix holds
    #[serde(default = "default_max_options")]
    pub max_options: usize,

    /// Fewest options removal may leave
    #[serde(default = "default_min_options")]
    pub min_options: usize,

    /// Upper end of both axes
    #[serde(default = "default_axis_max")]
    pub axis_max: f64,
}

impl MatrixConfig {
    /// Validate matrix configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_options == 0 {
            return Err(ValidationError::MinOptionsZero);
        }
        if self.min_options > self.max_options.min(MatrixLimits::STARTING_OPTIONS) {
            return Err(ValidationError::InvalidOptionBounds {
                min: self.min_options,
                max: self.max_options,
            });
        }
        if !self.axis_max.is_finite() || self.axis_max <= 0.0 {
            return Err(ValidationError::InvalidAxisMax);
        }
        Ok(())
    }

    /// Converts into domain limits.
    pub fn limits(&self) -> Result<MatrixLimits, ValidationError> {
        self.validate()?;
        Ok(MatrixLimits::new(
            self.max_options,
            self.min_options,
            self.axis_max,
        )?)
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            max_options: default_max_options(),
            min_options: default_min_options(),
            axis_max: default_axis_max(),
        }
    }
}

fn default_max_options() -> usize {
    MatrixLimits::DEFAULT_MAX_OPTIONS
}

fn default_min_options() -> usize {
    MatrixLimits::DEFAULT_MIN_OPTIONS
}

fn default_axis_max() -> f64 {
    MatrixLimits::DEFAULT_AXIS_MAX
}
