//! Adapters - Implementations of port interfaces.
//!
//! - `random` - `RandomSource` backed by the `rand` crate or by a fixed script

pub mod random;

pub use random::{ScriptedRandom, ThreadRandom};
