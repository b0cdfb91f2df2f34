//! The five LOOP framing steps.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode};

/// A step of the LOOP framing wizard, in order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum LoopStep {
    #[default]
    Outcome,
    Deconstruction,
    Alternatives,
    TradeOffs,
    Signals,
}

/// How a step indicator renders relative to the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Completed,
    Active,
    Pending,
}

impl LoopStep {
    pub const ALL: [LoopStep; 5] = [
        LoopStep::Outcome,
        LoopStep::Deconstruction,
        LoopStep::Alternatives,
        LoopStep::TradeOffs,
        LoopStep::Signals,
    ];

    /// One-based step number.
    pub fn number(&self) -> u8 {
        match self {
            LoopStep::Outcome => 1,
            LoopStep::Deconstruction => 2,
            LoopStep::Alternatives => 3,
            LoopStep::TradeOffs => 4,
            LoopStep::Signals => 5,
        }
    }

    /// Looks up a step by its one-based number.
    ///
    /// # Errors
    ///
    /// - `InvalidStep` outside `1..=5`
    pub fn from_number(number: u8) -> Result<LoopStep, DomainError> {
        usize::from(number)
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| {
                DomainError::new(ErrorCode::InvalidStep, format!("No step numbered {}", number))
                    .with_detail("step", number.to_string())
            })
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoopStep::Outcome => "OUTCOME",
            LoopStep::Deconstruction => "DECONSTRUCTION",
            LoopStep::Alternatives => "ALTERNATIVES",
            LoopStep::TradeOffs => "TRADE-OFFS",
            LoopStep::Signals => "SIGNALS",
        }
    }

    pub fn next(&self) -> Option<LoopStep> {
        Self::ALL.get(usize::from(self.number())).copied()
    }

    pub fn previous(&self) -> Option<LoopStep> {
        match self.number() {
            1 => None,
            n => Self::ALL.get(usize::from(n) - 2).copied(),
        }
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    /// Indicator state of `self` while `current` is the active step.
    pub fn state_relative_to(&self, current: LoopStep) -> StepState {
        match self.cmp(&current) {
            std::cmp::Ordering::Less => StepState::Completed,
            std::cmp::Ordering::Equal => StepState::Active,
            std::cmp::Ordering::Greater => StepState::Pending,
        }
    }
}

impl fmt::Display for LoopStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: {}", self.number(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_round_trip_and_reject_out_of_range() {
        for step in LoopStep::ALL {
            assert_eq!(LoopStep::from_number(step.number()).unwrap(), step);
        }
        assert_eq!(LoopStep::from_number(0).unwrap_err().code, ErrorCode::InvalidStep);
        assert_eq!(LoopStep::from_number(6).unwrap_err().code, ErrorCode::InvalidStep);
    }

    #[test]
    fn next_and_previous_stop_at_the_ends() {
        assert_eq!(LoopStep::Outcome.previous(), None);
        assert_eq!(LoopStep::Outcome.next(), Some(LoopStep::Deconstruction));
        assert_eq!(LoopStep::Signals.previous(), Some(LoopStep::TradeOffs));
        assert_eq!(LoopStep::Signals.next(), None);
        assert!(LoopStep::Signals.is_last());
    }

    #[test]
    fn indicator_states_follow_current_step() {
        let current = LoopStep::Alternatives;
        assert_eq!(LoopStep::Outcome.state_relative_to(current), StepState::Completed);
        assert_eq!(LoopStep::Alternatives.state_relative_to(current), StepState::Active);
        assert_eq!(LoopStep::Signals.state_relative_to(current), StepState::Pending);
    }

    #[test]
    fn display_includes_number_and_label() {
        assert_eq!(LoopStep::TradeOffs.to_string(), "Step 4: TRADE-OFFS");
    }
}
