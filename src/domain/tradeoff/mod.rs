//! Trade-off Module - Benefit/cost decision matrix with Pareto frontier.
//!
//! # Components
//!
//! - `Scored` / `ScoredOption` - Items with a benefit and a cost score
//! - `ParetoFilter` - Pure dominance and frontier computation
//! - `PivotMatrix` - Option set with add / remove / move / reset
//! - `Viewport` - Data-to-screen mapping and hit testing for the plot

mod matrix;
mod option;
mod pareto;
mod viewport;

pub use matrix::{BenefitAxis, CostAxis, MatrixLimits, PivotMatrix, Quadrant};
pub use option::{palette_color, PaletteColor, Scored, ScoredOption, PALETTE};
pub use pareto::{Dominated, ParetoFilter};
pub use viewport::Viewport;
