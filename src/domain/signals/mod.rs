//! Signals Module - Success/kill/leading signal dashboard.
//!
//! Each signal is a bounded numeric value with red/yellow/green thresholds.
//! The statuses aggregate into a STOP / PIVOT / PERSIST verdict with a
//! confidence percentage.
//!
//! # Components
//!
//! - `Signal` / `SignalBuilder` - A validated, range-bounded signal
//! - `SignalAggregator` - Pure status classification and verdict rules
//! - `SignalDashboard` - The signal set with slider input and simulation

mod aggregator;
mod dashboard;
mod signal;

pub use aggregator::{Decision, SignalAggregator, StatusCounts, Verdict};
pub use dashboard::{default_signals, SignalDashboard, SimulationSettings};
pub use signal::{Drift, GaugeZones, Signal, SignalBuilder, SignalRole, SignalStatus};
