//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A whole-number value between 0 and 100 inclusive.
///
/// Used for recommendation confidence and questionnaire progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// Creates a Percentage from a signed score, clamping into 0..=100.
    pub fn saturating_from(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    /// Creates a Percentage from a part of a whole, rounded down.
    ///
    /// A zero whole yields 0%.
    pub fn from_ratio(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let scaled = part.min(whole) * 100 / whole;
        Self(scaled as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_saturating_from_clamps_both_ends() {
        assert_eq!(Percentage::saturating_from(-20), Percentage::ZERO);
        assert_eq!(Percentage::saturating_from(85).value(), 85);
        assert_eq!(Percentage::saturating_from(140).value(), 100);
        assert_eq!(Percentage::saturating_from(i64::MAX).value(), 100);
    }

    #[test]
    fn percentage_from_ratio_rounds_down() {
        assert_eq!(Percentage::from_ratio(1, 4).value(), 25);
        assert_eq!(Percentage::from_ratio(1, 3).value(), 33);
        assert_eq!(Percentage::from_ratio(4, 4).value(), 100);
        assert_eq!(Percentage::from_ratio(0, 0), Percentage::ZERO);
    }

    #[test]
    fn percentage_displays_correctly() {
        assert_eq!(format!("{}", Percentage::from_ratio(3, 4)), "75%");
    }

    #[test]
    fn percentage_serializes_to_json() {
        let json = serde_json::to_string(&Percentage::saturating_from(42)).unwrap();
        assert_eq!(json, "42");
    }
}
