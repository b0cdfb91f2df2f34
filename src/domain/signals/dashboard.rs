//! Signal dashboard session - the monitored signal set with slider input and
//! an optional random-walk simulation.

use serde::Serialize;
use tracing::{debug, info};

use super::{Decision, Drift, Signal, SignalAggregator, SignalRole, SignalStatus, StatusCounts};
use crate::domain::foundation::{DomainError, ErrorCode, SignalId, ValidationError};
use crate::ports::{RandomSource, Recommender};

/// Tunables for the random-walk simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationSettings {
    interval_frames: u32,
    volatility_divisor: f64,
}

impl SimulationSettings {
    /// One simulation step every ten frames; a full-scale step is 1/50 of
    /// the signal's range.
    pub const DEFAULT_INTERVAL_FRAMES: u32 = 10;
    pub const DEFAULT_VOLATILITY_DIVISOR: f64 = 50.0;

    /// Creates validated settings.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the interval is zero or the divisor is not positive
    /// - `NotFinite` if the divisor is NaN or infinite
    pub fn new(interval_frames: u32, volatility_divisor: f64) -> Result<Self, ValidationError> {
        if interval_frames == 0 {
            return Err(ValidationError::out_of_range(
                "interval_frames",
                1.0,
                f64::from(u32::MAX),
                0.0,
            ));
        }
        if !volatility_divisor.is_finite() {
            return Err(ValidationError::not_finite("volatility_divisor"));
        }
        if volatility_divisor <= 0.0 {
            return Err(ValidationError::out_of_range(
                "volatility_divisor",
                f64::MIN_POSITIVE,
                f64::MAX,
                volatility_divisor,
            ));
        }
        Ok(Self {
            interval_frames,
            volatility_divisor,
        })
    }

    pub fn interval_frames(&self) -> u32 {
        self.interval_frames
    }

    pub fn volatility_divisor(&self) -> f64 {
        self.volatility_divisor
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            interval_frames: Self::DEFAULT_INTERVAL_FRAMES,
            volatility_divisor: Self::DEFAULT_VOLATILITY_DIVISOR,
        }
    }
}

/// The six project-health signals the dashboard starts with.
pub fn default_signals() -> Result<Vec<Signal>, DomainError> {
    Ok(vec![
        Signal::builder("Model Accuracy", SignalRole::Success)
            .range(0.0, 100.0)
            .value(82.0)
            .target(85.0)
            .unit("%")
            .thresholds(85.0, 70.0)
            .drift(Drift::PullDownAbove {
                ceiling: 80.0,
                pull: 0.1,
            })
            .build()?,
        Signal::builder("User Satisfaction", SignalRole::Success)
            .range(0.0, 5.0)
            .value(3.8)
            .target(4.0)
            .unit("/5")
            .thresholds(4.0, 3.0)
            .build()?,
        Signal::builder("Error Rate", SignalRole::Kill)
            .range(0.0, 15.0)
            .value(4.2)
            .target(5.0)
            .unit("%")
            .thresholds(3.0, 5.0)
            .higher_is_better(false)
            .build()?,
        Signal::builder("Cost Per Transaction", SignalRole::Kill)
            .range(0.0, 25.0)
            .value(8.5)
            .target(10.0)
            .unit("$")
            .thresholds(8.0, 10.0)
            .higher_is_better(false)
            .build()?,
        Signal::builder("Data Freshness", SignalRole::Leading)
            .range(0.0, 30.0)
            .value(3.0)
            .target(7.0)
            .unit(" days")
            .thresholds(5.0, 10.0)
            .higher_is_better(false)
            .drift(Drift::Rising)
            .build()?,
        Signal::builder("Team Velocity", SignalRole::Leading)
            .range(0.0, 50.0)
            .value(24.0)
            .target(20.0)
            .unit(" pts")
            .thresholds(25.0, 15.0)
            .build()?,
    ])
}

/// Dashboard session state.
///
/// # Invariants
///
/// - `initial_values[i]` is the reset value of `signals[i]`
/// - `frame` only advances while simulating
#[derive(Debug, Clone, Serialize)]
pub struct SignalDashboard {
    signals: Vec<Signal>,
    initial_values: Vec<f64>,
    simulating: bool,
    frame: u64,
    settings: SimulationSettings,
}

impl SignalDashboard {
    /// Creates a dashboard over the default signal set.
    pub fn new(settings: SimulationSettings) -> Result<Self, DomainError> {
        Ok(Self::from_signals(default_signals()?, settings))
    }

    /// Creates a dashboard over a custom signal set. Current values become
    /// the reset values.
    pub fn from_signals(signals: Vec<Signal>, settings: SimulationSettings) -> Self {
        let initial_values = signals.iter().map(Signal::value).collect();
        Self {
            signals,
            initial_values,
            simulating: false,
            frame: 0,
            settings,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    pub fn signal(&self, id: &SignalId) -> Option<&Signal> {
        self.signals.iter().find(|s| s.id() == id)
    }

    /// Signals with the given role, in dashboard order.
    pub fn signals_by_role(&self, role: SignalRole) -> impl Iterator<Item = &Signal> {
        self.signals.iter().filter(move |s| s.role() == role)
    }

    pub fn is_simulating(&self) -> bool {
        self.simulating
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Sets a signal's value from direct input, clamped into its range.
    /// Returns the stored value.
    ///
    /// # Errors
    ///
    /// - `SignalNotFound` if no signal has this id
    /// - `InvalidInput` if the value is NaN or infinite
    pub fn set_value(&mut self, id: &SignalId, value: f64) -> Result<f64, DomainError> {
        let signal = self
            .signals
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or_else(|| {
                DomainError::new(ErrorCode::SignalNotFound, format!("Signal not found: {}", id))
            })?;

        let stored = signal.set_value(value)?;
        debug!(signal = signal.name(), value = stored, "Signal value set");
        Ok(stored)
    }

    /// Starts or stops the simulation. Returns whether it is now running.
    pub fn toggle_simulation(&mut self) -> bool {
        self.simulating = !self.simulating;
        info!(simulating = self.simulating, "Signal simulation toggled");
        self.simulating
    }

    /// Advances one animation frame. While simulating, applies a random-walk
    /// step every `interval_frames` frames. Returns true if a step ran.
    pub fn on_frame<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.simulating {
            return false;
        }
        self.frame += 1;
        if self.frame % u64::from(self.settings.interval_frames) == 0 {
            self.simulate_step(rng);
            return true;
        }
        false
    }

    /// Applies one random-walk step to every signal.
    pub fn simulate_step<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let divisor = self.settings.volatility_divisor;
        for signal in &mut self.signals {
            signal.random_step(rng.next_unit(), divisor);
        }
        debug!(frame = self.frame, "Simulation step applied");
    }

    /// Restores initial values and stops the simulation.
    pub fn reset(&mut self) {
        for (signal, &initial) in self.signals.iter_mut().zip(&self.initial_values) {
            signal.restore_value(initial);
        }
        self.simulating = false;
        self.frame = 0;
        info!("Signal dashboard reset");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived state
    // ─────────────────────────────────────────────────────────────────────────

    /// Status of each signal, in dashboard order.
    pub fn statuses(&self) -> Vec<(SignalId, SignalStatus)> {
        self.signals
            .iter()
            .map(|s| (*s.id(), SignalAggregator::classify_status(s)))
            .collect()
    }

    pub fn status_counts(&self) -> StatusCounts {
        SignalAggregator::count_statuses(&self.signals)
    }

    pub fn decision(&self) -> Decision {
        SignalAggregator::aggregate(&self.signals)
    }
}

impl Recommender for SignalDashboard {
    type Recommendation = Decision;

    fn recommend(&self) -> Decision {
        self.decision()
    }
}
