//! Ports - Interfaces between the domain and the outside world.
//!
//! - `Recommender` - Capability of turning session state into a recommendation,
//!   consumed by whatever presentation layer renders the session
//! - `RandomSource` - Uniform samples for the signal random walk

mod random_source;
mod recommender;

pub use random_source::RandomSource;
pub use recommender::Recommender;
