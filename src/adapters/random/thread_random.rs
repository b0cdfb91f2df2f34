//! Thread-local RNG adapter for the RandomSource port.

use crate::ports::RandomSource;

/// Draws samples from the `rand` crate's thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::random::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_in_unit_interval() {
        let mut rng = ThreadRandom::new();
        for _ in 0..1_000 {
            let sample = rng.next_unit();
            assert!((0.0..1.0).contains(&sample), "sample out of range: {}", sample);
        }
    }

    #[test]
    fn next_in_range_scales_samples() {
        let mut rng = ThreadRandom::new();
        for _ in 0..100 {
            let sample = rng.next_in_range(-0.5, 0.5);
            assert!((-0.5..0.5).contains(&sample));
        }
    }
}
