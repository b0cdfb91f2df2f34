//! Scripted random source.
//!
//! Replays a fixed sequence of samples, cycling when exhausted. Lets tests
//! and demos drive the signal random walk deterministically.
//!
//! # Example
//!
//! ```
//! use decision_sims::adapters::ScriptedRandom;
//! use decision_sims::ports::RandomSource;
//!
//! let mut rng = ScriptedRandom::new(vec![0.25, 0.75]);
//! assert_eq!(rng.next_unit(), 0.25);
//! assert_eq!(rng.next_unit(), 0.75);
//! assert_eq!(rng.next_unit(), 0.25);
//! ```

use crate::ports::RandomSource;

/// Below 1.0 so a scripted value never escapes the `[0, 1)` contract.
const MAX_SAMPLE: f64 = 1.0 - f64::EPSILON;

/// Replays scripted samples in order.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    samples: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Creates a source replaying `samples`. Values are clamped into
    /// `[0, 1)`; non-finite values become 0.5. An empty script always
    /// yields 0.5, the zero-change sample for a symmetric walk.
    pub fn new(samples: Vec<f64>) -> Self {
        let samples = samples
            .into_iter()
            .map(|s| if s.is_finite() { s.clamp(0.0, MAX_SAMPLE) } else { 0.5 })
            .collect();
        Self { samples, cursor: 0 }
    }

    /// Creates a source that always returns the same sample.
    pub fn constant(sample: f64) -> Self {
        Self::new(vec![sample])
    }

    /// Number of samples drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        if self.samples.is_empty() {
            self.cursor += 1;
            return 0.5;
        }
        let sample = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        sample
    }
}
