//! Signal Aggregator - traffic-light status per signal and a STOP / PIVOT /
//! PERSIST verdict over the whole set.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Signal, SignalRole, SignalStatus};
use crate::domain::foundation::Percentage;

/// Overall project verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Stop,
    Pivot,
    Persist,
}

impl Verdict {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Stop => "STOP",
            Verdict::Pivot => "PIVOT",
            Verdict::Persist => "PERSIST",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Tally of signal statuses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub green: u32,
    pub yellow: u32,
    pub red: u32,
    /// Red signals whose role is `kill`.
    pub kill_red: u32,
}

impl StatusCounts {
    /// Total number of signals counted.
    pub fn total(&self) -> u32 {
        self.green.saturating_add(self.yellow).saturating_add(self.red)
    }
}

/// A verdict with the aggregator's confidence in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub recommendation: Verdict,
    pub confidence: Percentage,
}

/// Classifies signals and aggregates them into a decision.
pub struct SignalAggregator;

impl SignalAggregator {
    /// Traffic-light status of one signal.
    ///
    /// Thresholds are inclusive: a value equal to the green threshold is green.
    pub fn classify_status(signal: &Signal) -> SignalStatus {
        let value = signal.value();
        let (green, yellow) = (signal.green_threshold(), signal.yellow_threshold());

        if signal.higher_is_better() {
            if value >= green {
                SignalStatus::Green
            } else if value >= yellow {
                SignalStatus::Yellow
            } else {
                SignalStatus::Red
            }
        } else if value <= green {
            SignalStatus::Green
        } else if value <= yellow {
            SignalStatus::Yellow
        } else {
            SignalStatus::Red
        }
    }

    /// Counts statuses across a signal set.
    pub fn count_statuses(signals: &[Signal]) -> StatusCounts {
        signals
            .iter()
            .fold(StatusCounts::default(), |mut counts, signal| {
                match Self::classify_status(signal) {
                    SignalStatus::Green => counts.green += 1,
                    SignalStatus::Yellow => counts.yellow += 1,
                    SignalStatus::Red => {
                        counts.red += 1;
                        if signal.role() == SignalRole::Kill {
                            counts.kill_red += 1;
                        }
                    }
                }
                counts
            })
    }

    /// Aggregates a signal set into a decision.
    pub fn aggregate(signals: &[Signal]) -> Decision {
        Self::decide(&Self::count_statuses(signals))
    }

    /// Applies the verdict rules to pre-computed counts.
    ///
    /// # Rules (first match wins)
    ///
    /// 1. `kill_red >= 2`, or `kill_red >= 1` and `red >= 3`: STOP,
    ///    `min(95, 70 + 10·kill_red + 5·red)`
    /// 2. `red >= 2`, or `red >= 1` and `yellow >= 2`: PIVOT,
    ///    `min(90, 60 + 10·red + 5·yellow)`
    /// 3. `green >= 4` and `red == 0`: PERSIST, `min(95, 70 + 5·green)`
    /// 4. otherwise PIVOT, `max(50, 70 − 5·yellow − 10·red)`
    pub fn decide(counts: &StatusCounts) -> Decision {
        let green = i64::from(counts.green);
        let yellow = i64::from(counts.yellow);
        let red = i64::from(counts.red);
        let kill_red = i64::from(counts.kill_red);

        let (recommendation, confidence) = if kill_red >= 2 || (kill_red >= 1 && red >= 3) {
            (Verdict::Stop, (70 + kill_red * 10 + red * 5).min(95))
        } else if red >= 2 || (red >= 1 && yellow >= 2) {
            (Verdict::Pivot, (60 + red * 10 + yellow * 5).min(90))
        } else if green >= 4 && red == 0 {
            (Verdict::Persist, (70 + green * 5).min(95))
        } else {
            (Verdict::Pivot, (70 - yellow * 5 - red * 10).max(50))
        };

        Decision {
            recommendation,
            confidence: Percentage::saturating_from(confidence),
        }
    }
}
