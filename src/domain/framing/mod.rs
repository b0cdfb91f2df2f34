//! Framing Module - LOOP problem-framing workspace.
//!
//! Walks a problem through five steps: define the outcome, break it into
//! components, list alternatives, place them on an effort/impact grid, and
//! pick the signals to watch.

mod items;
mod samples;
mod step;
mod workspace;

pub use items::{
    Alternative, AlternativeTag, Component, Outcome, Placement, Priority, SignalDefinition,
};
pub use samples::{SampleProblem, SAMPLE_PROBLEMS};
pub use step::{LoopStep, StepState};
pub use workspace::{LoopWorkspace, TradeoffBoard, DEFAULT_X_LABEL, DEFAULT_Y_LABEL};
