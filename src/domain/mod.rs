//! Domain layer containing decision logic and session state.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (value objects, IDs, errors)
//! - `questionnaire` - AI-vs-non-AI questionnaire classifier and answer session
//! - `signals` - Signal aggregator and project-health dashboard
//! - `tradeoff` - Pareto filter and pivot decision matrix
//! - `framing` - LOOP problem-framing workspace

pub mod foundation;
pub mod framing;
pub mod questionnaire;
pub mod signals;
pub mod tradeoff;
