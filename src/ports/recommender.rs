//! Recommender port - "given current state, produce a recommendation".
//!
//! Each interactive session implements this so a presentation layer can
//! render any of them without knowing which decision logic sits behind it.
//! The domain never depends on rendering types.

/// Capability of producing a recommendation from the current session state.
///
/// Implementations must be pure with respect to `&self`: calling
/// `recommend` twice without an intervening mutation yields equal results.
pub trait Recommender {
    /// What this session recommends.
    type Recommendation;

    /// Computes the recommendation for the current state.
    fn recommend(&self) -> Self::Recommendation;
}
