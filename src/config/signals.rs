//! Signal dashboard configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::signals::SimulationSettings;

/// Signal dashboard configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SignalsConfig {
    /// Frames between random-walk steps
    #[serde(default = "default_interval")]
    pub simulation_interval_frames: u32,

    /// A full-scale step moves a signal by range / divisor
    #[serde(default = "default_divisor")]
    pub volatility_divisor: f64,
}

impl SignalsConfig {
    /// Validate signal configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.simulation_interval_frames == 0 {
            return Err(ValidationError::InvalidSimulationInterval);
        }
        if !self.volatility_divisor.is_finite() || self.volatility_divisor <= 0.0 {
            return Err(ValidationError::InvalidVolatilityDivisor);
        }
        Ok(())
    }

    /// Converts into domain simulation settings.
    pub fn simulation(&self) -> Result<SimulationSettings, ValidationError> {
        self.validate()?;
        Ok(SimulationSettings::new(
            self.simulation_interval_frames,
            self.volatility_divisor,
        )?)
    }
}

impl Default for SignalsConfig {
    fn default() -> Self {
        Self {
            simulation_interval_frames: default_interval(),
            volatility_divisor: default_divisor(),
        }
    }
}

fn default_interval() -> u32 {
    SimulationSettings::DEFAULT_INTERVAL_FRAMES
}

fn default_divisor() -> f64 {
    SimulationSettings::DEFAULT_VOLATILITY_DIVISOR
}
