//! Random source adapters.
//!
//! - `ThreadRandom` - Thread-local RNG from the `rand` crate
//! - `ScriptedRandom` - Replays a fixed sequence, for tests and demos

mod scripted_random;
mod thread_random;

pub use scripted_random::ScriptedRandom;
pub use thread_random::ThreadRandom;
