//! Monitored project-health signal.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

use crate::domain::foundation::{
    ensure_finite, ensure_not_blank, DomainError, SignalId, ValidationError,
};

/// What a signal tells us about the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalRole {
    /// Indicates the project is working.
    Success,
    /// Indicates the project should stop.
    Kill,
    /// Early indicator of future success or failure.
    Leading,
}

impl SignalRole {
    pub const ALL: [SignalRole; 3] = [SignalRole::Success, SignalRole::Kill, SignalRole::Leading];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            SignalRole::Success => "Success Signal",
            SignalRole::Kill => "Kill Signal",
            SignalRole::Leading => "Leading Indicator",
        }
    }
}

/// Traffic-light status of a single signal.
///
/// Ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalStatus {
    Red,
    Yellow,
    Green,
}

impl fmt::Display for SignalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SignalStatus::Red => "red",
            SignalStatus::Yellow => "yellow",
            SignalStatus::Green => "green",
        };
        write!(f, "{}", s)
    }
}

/// Bias applied to a signal's random-walk step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Drift {
    /// Unbiased step.
    Symmetric,
    /// Step is never negative (e.g. data staleness only grows).
    Rising,
    /// While the value is above `ceiling`, `pull` is subtracted from each step.
    PullDownAbove { ceiling: f64, pull: f64 },
}

impl Default for Drift {
    fn default() -> Self {
        Drift::Symmetric
    }
}

/// Gauge zone boundaries as fractions of the gauge sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaugeZones {
    pub red: (f64, f64),
    pub yellow: (f64, f64),
    pub green: (f64, f64),
}

/// A monitored numeric signal with red/yellow/green thresholds.
///
/// # Invariants
///
/// - `min < max`, all numbers finite
/// - `value` and `target` always lie in `[min, max]`
/// - thresholds lie in `[min, max]` and are ordered by polarity:
///   `green >= yellow` when higher is better, `green <= yellow` otherwise
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signal {
    id: SignalId,
    name: String,
    role: SignalRole,
    value: f64,
    target: f64,
    min: f64,
    max: f64,
    unit: String,
    green_threshold: f64,
    yellow_threshold: f64,
    higher_is_better: bool,
    drift: Drift,
}

impl Signal {
    /// Starts building a signal.
    pub fn builder(name: impl Into<String>, role: SignalRole) -> SignalBuilder {
        SignalBuilder::new(name, role)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SignalId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> SignalRole {
        self.role
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Declared `(min, max)` range.
    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn green_threshold(&self) -> f64 {
        self.green_threshold
    }

    pub fn yellow_threshold(&self) -> f64 {
        self.yellow_threshold
    }

    pub fn higher_is_better(&self) -> bool {
        self.higher_is_better
    }

    pub fn drift(&self) -> Drift {
        self.drift
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Sets the value, clamped into range. Returns the stored value.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the value is NaN or infinite
    pub fn set_value(&mut self, value: f64) -> Result<f64, DomainError> {
        let value = ensure_finite("value", value)?;
        self.value = self.clamp(value);
        Ok(self.value)
    }

    /// Stores a value already known to be finite, clamped into range.
    pub(crate) fn restore_value(&mut self, value: f64) {
        self.value = self.clamp(value);
    }

    /// Applies one random-walk step.
    ///
    /// `sample` is uniform in `[0, 1)`; the unbiased change is
    /// `(sample - 0.5) * (max - min) / volatility_divisor`.
    pub fn random_step(&mut self, sample: f64, volatility_divisor: f64) {
        let mut change = (sample - 0.5) * (self.max - self.min) / volatility_divisor;

        match self.drift {
            Drift::Symmetric => {}
            Drift::Rising => change = change.abs(),
            Drift::PullDownAbove { ceiling, pull } => {
                if self.value > ceiling {
                    change -= pull;
                }
            }
        }

        if change.is_finite() {
            self.value = self.clamp(self.value + change);
        }
    }

    fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Gauge geometry
    // ─────────────────────────────────────────────────────────────────────────

    /// Linear position of `x` within the range, clamped to `[0, 1]`.
    pub fn fraction_of(&self, x: f64) -> f64 {
        ((x - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    /// Position of the current value along the gauge, in `[0, 1]`.
    pub fn gauge_fraction(&self) -> f64 {
        self.fraction_of(self.value)
    }

    /// Needle angle in radians on a semicircular gauge: π at `min`, 0 at `max`.
    pub fn gauge_angle(&self) -> f64 {
        PI * (1.0 - self.gauge_fraction())
    }

    /// Red/yellow/green zone boundaries along the gauge.
    pub fn gauge_zones(&self) -> GaugeZones {
        let green = self.fraction_of(self.green_threshold);
        let yellow = self.fraction_of(self.yellow_threshold);

        if self.higher_is_better {
            GaugeZones {
                red: (0.0, yellow),
                yellow: (yellow, green),
                green: (green, 1.0),
            }
        } else {
            GaugeZones {
                green: (0.0, green),
                yellow: (green, yellow),
                red: (yellow, 1.0),
            }
        }
    }
}

/// Builder for [`Signal`]. Thresholds are required; everything else has a
/// default (range 0..100, value at `min`, target at `max`, higher is better).
#[derive(Debug, Clone)]
pub struct SignalBuilder {
    name: String,
    role: SignalRole,
    value: Option<f64>,
    target: Option<f64>,
    min: f64,
    max: f64,
    unit: String,
    thresholds: Option<(f64, f64)>,
    higher_is_better: bool,
    drift: Drift,
}

impl SignalBuilder {
    fn new(name: impl Into<String>, role: SignalRole) -> Self {
        Self {
            name: name.into(),
            role,
            value: None,
            target: None,
            min: 0.0,
            max: 100.0,
            unit: String::new(),
            thresholds: None,
            higher_is_better: true,
            drift: Drift::Symmetric,
        }
    }

    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn target(mut self, target: f64) -> Self {
        self.target = Some(target);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Sets the green and yellow thresholds.
    pub fn thresholds(mut self, green: f64, yellow: f64) -> Self {
        self.thresholds = Some((green, yellow));
        self
    }

    pub fn higher_is_better(mut self, higher_is_better: bool) -> Self {
        self.higher_is_better = higher_is_better;
        self
    }

    pub fn drift(mut self, drift: Drift) -> Self {
        self.drift = drift;
        self
    }

    /// Validates and builds the signal.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for a blank name, non-finite numbers, an empty
    ///   range, missing or out-of-range thresholds, or thresholds ordered
    ///   against the polarity
    pub fn build(self) -> Result<Signal, DomainError> {
        let name = ensure_not_blank("name", &self.name)?;
        let min = ensure_finite("min", self.min)?;
        let max = ensure_finite("max", self.max)?;
        if min >= max {
            return Err(ValidationError::invalid_format(
                "range",
                format!("min ({}) must be less than max ({})", min, max),
            )
            .into());
        }

        let (green, yellow) = self
            .thresholds
            .ok_or_else(|| ValidationError::empty_field("thresholds"))?;
        let green = Self::within_range("green_threshold", green, min, max)?;
        let yellow = Self::within_range("yellow_threshold", yellow, min, max)?;

        let consistent = if self.higher_is_better {
            green >= yellow
        } else {
            green <= yellow
        };
        if !consistent {
            return Err(DomainError::invalid_input(
                "thresholds",
                format!(
                    "Green threshold {} and yellow threshold {} are inconsistent with {} polarity",
                    green,
                    yellow,
                    if self.higher_is_better { "higher-is-better" } else { "lower-is-better" }
                ),
            ));
        }

        if let Drift::PullDownAbove { ceiling, pull } = self.drift {
            ensure_finite("drift.ceiling", ceiling)?;
            ensure_finite("drift.pull", pull)?;
            if pull < 0.0 {
                return Err(
                    ValidationError::out_of_range("drift.pull", 0.0, f64::MAX, pull).into(),
                );
            }
        }

        let value = ensure_finite("value", self.value.unwrap_or(min))?.clamp(min, max);
        let target = ensure_finite("target", self.target.unwrap_or(max))?.clamp(min, max);

        Ok(Signal {
            id: SignalId::new(),
            name,
            role: self.role,
            value,
            target,
            min,
            max,
            unit: self.unit,
            green_threshold: green,
            yellow_threshold: yellow,
            higher_is_better: self.higher_is_better,
            drift: self.drift,
        })
    }

    fn within_range(field: &str, x: f64, min: f64, max: f64) -> Result<f64, ValidationError> {
        let x = ensure_finite(field, x)?;
        if x < min || x > max {
            return Err(ValidationError::out_of_range(field, min, max, x));
        }
        Ok(x)
    }
}
