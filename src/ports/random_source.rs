//! RandomSource port - Uniform random numbers for simulations.
//!
//! The signal random walk draws from this port rather than a global RNG so
//! simulations can be replayed deterministically in tests.

/// Source of uniformly distributed samples.
pub trait RandomSource {
    /// Returns a sample in the half-open interval `[0.0, 1.0)`.
    fn next_unit(&mut self) -> f64;

    /// Returns a sample in `[low, high)`.
    fn next_in_range(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_unit()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}
