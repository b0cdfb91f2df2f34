//! Pivot decision matrix - options plotted by benefit against cost.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

use super::option::palette_color;
use super::{Dominated, ParetoFilter, ScoredOption};
use crate::domain::foundation::{
    ensure_finite, ensure_not_blank, DomainError, ErrorCode, OptionId, ValidationError,
};
use crate::ports::Recommender;

/// Benefit dimension shown on the horizontal axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenefitAxis {
    #[default]
    Impact,
    Value,
    Revenue,
    Roi,
}

impl BenefitAxis {
    pub const ALL: [BenefitAxis; 4] = [
        BenefitAxis::Impact,
        BenefitAxis::Value,
        BenefitAxis::Revenue,
        BenefitAxis::Roi,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BenefitAxis::Impact => "Impact",
            BenefitAxis::Value => "Value",
            BenefitAxis::Revenue => "Revenue",
            BenefitAxis::Roi => "ROI",
        }
    }
}

/// Cost dimension shown on the vertical axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostAxis {
    #[default]
    Effort,
    Cost,
    Risk,
    Time,
}

impl CostAxis {
    pub const ALL: [CostAxis; 4] = [CostAxis::Effort, CostAxis::Cost, CostAxis::Risk, CostAxis::Time];

    pub fn label(&self) -> &'static str {
        match self {
            CostAxis::Effort => "Effort",
            CostAxis::Cost => "Cost",
            CostAxis::Risk => "Risk",
            CostAxis::Time => "Time",
        }
    }
}

/// Matrix quadrant, split at the midpoint of each axis.
///
/// A score at or above the midpoint counts as high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quadrant {
    /// High benefit, low cost.
    QuickWins,
    /// High benefit, high cost.
    BigBets,
    /// Low benefit, low cost.
    LowPriority,
    /// Low benefit, high cost.
    MoneyPits,
}

impl Quadrant {
    /// Classifies a position against the axis midpoint.
    pub fn classify(benefit: f64, cost: f64, midpoint: f64) -> Quadrant {
        match (benefit >= midpoint, cost >= midpoint) {
            (true, false) => Quadrant::QuickWins,
            (true, true) => Quadrant::BigBets,
            (false, false) => Quadrant::LowPriority,
            (false, true) => Quadrant::MoneyPits,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::QuickWins => "QUICK WINS",
            Quadrant::BigBets => "BIG BETS",
            Quadrant::LowPriority => "LOW PRIORITY",
            Quadrant::MoneyPits => "MONEY PITS",
        }
    }

    /// Caption such as "High Impact, Low Effort".
    pub fn caption(&self, benefit: BenefitAxis, cost: CostAxis) -> String {
        let (b, c) = match self {
            Quadrant::QuickWins => ("High", "Low"),
            Quadrant::BigBets => ("High", "High"),
            Quadrant::LowPriority => ("Low", "Low"),
            Quadrant::MoneyPits => ("Low", "High"),
        };
        format!("{} {}, {} {}", b, benefit.label(), c, cost.label())
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Capacity and scale of the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatrixLimits {
    max_options: usize,
    min_options: usize,
    axis_max: f64,
}

impl MatrixLimits {
    pub const DEFAULT_MAX_OPTIONS: usize = 8;
    pub const DEFAULT_MIN_OPTIONS: usize = 2;
    pub const DEFAULT_AXIS_MAX: f64 = 10.0;

    /// Number of options a fresh or reset matrix starts with.
    pub const STARTING_OPTIONS: usize = DEFAULT_OPTIONS.len();

    /// Creates validated limits.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `min_options` is zero, exceeds `max_options` or
    ///   exceeds `STARTING_OPTIONS`, or `axis_max` is not positive
    /// - `NotFinite` if `axis_max` is NaN or infinite
    pub fn new(max_options: usize, min_options: usize, axis_max: f64) -> Result<Self, ValidationError> {
        let ceiling = max_options.min(Self::STARTING_OPTIONS);
        if min_options == 0 || min_options > ceiling {
            return Err(ValidationError::out_of_range(
                "min_options",
                1.0,
                ceiling as f64,
                min_options as f64,
            ));
        }
        let axis_max = ensure_finite("axis_max", axis_max)?;
        if axis_max <= 0.0 {
            return Err(ValidationError::out_of_range(
                "axis_max",
                f64::MIN_POSITIVE,
                f64::MAX,
                axis_max,
            ));
        }
        Ok(Self {
            max_options,
            min_options,
            axis_max,
        })
    }

    pub fn max_options(&self) -> usize {
        self.max_options
    }

    pub fn min_options(&self) -> usize {
        self.min_options
    }

    pub fn axis_max(&self) -> f64 {
        self.axis_max
    }

    /// Centre of each axis; new options start here.
    pub fn midpoint(&self) -> f64 {
        self.axis_max / 2.0
    }
}

impl Default for MatrixLimits {
    fn default() -> Self {
        Self {
            max_options: Self::DEFAULT_MAX_OPTIONS,
            min_options: Self::DEFAULT_MIN_OPTIONS,
            axis_max: Self::DEFAULT_AXIS_MAX,
        }
    }
}

/// Default options as `(name, benefit, cost)`.
const DEFAULT_OPTIONS: [(&str, f64, f64); 5] = [
    ("Keep Current", 3.0, 3.0),
    ("AI-Powered", 8.0, 7.0),
    ("Hybrid Human+AI", 7.0, 5.0),
    ("Rules-Based", 5.0, 2.0),
    ("Outsource", 6.0, 4.0),
];

/// Matrix session state.
///
/// # Invariants
///
/// - every option position lies in `[0, axis_max]` on both axes
/// - `options.len() <= max_options`
/// - removal never takes the count below `min_options`
#[derive(Debug, Clone, Serialize)]
pub struct PivotMatrix {
    options: Vec<ScoredOption>,
    benefit_axis: BenefitAxis,
    cost_axis: CostAxis,
    limits: MatrixLimits,
}

impl PivotMatrix {
    /// Creates a matrix holding the default options.
    pub fn new(limits: MatrixLimits) -> Self {
        Self {
            options: Self::default_options(&limits),
            benefit_axis: BenefitAxis::default(),
            cost_axis: CostAxis::default(),
            limits,
        }
    }

    /// Default options clamped to the axis and truncated to capacity.
    fn default_options(limits: &MatrixLimits) -> Vec<ScoredOption> {
        DEFAULT_OPTIONS
            .iter()
            .take(limits.max_options)
            .enumerate()
            .map(|(i, &(name, x, y))| {
                ScoredOption::new(
                    name,
                    x.min(limits.axis_max),
                    y.min(limits.axis_max),
                    palette_color(i).hex,
                )
            })
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn options(&self) -> &[ScoredOption] {
        &self.options
    }

    pub fn option(&self, id: &OptionId) -> Option<&ScoredOption> {
        self.options.iter().find(|o| o.id() == id)
    }

    pub fn limits(&self) -> &MatrixLimits {
        &self.limits
    }

    pub fn axes(&self) -> (BenefitAxis, CostAxis) {
        (self.benefit_axis, self.cost_axis)
    }

    /// Chart title such as "Impact vs Effort".
    pub fn title(&self) -> String {
        format!("{} vs {}", self.benefit_axis.label(), self.cost_axis.label())
    }

    /// Whether another option may be added.
    pub fn can_add(&self) -> bool {
        self.options.len() < self.limits.max_options
    }

    /// Whether an option may be removed.
    pub fn can_remove(&self) -> bool {
        self.options.len() > self.limits.min_options
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds an option at the centre of the matrix.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the name is blank
    /// - `CapacityExceeded` if the matrix is full
    pub fn add_option(&mut self, name: &str) -> Result<OptionId, DomainError> {
        let name = ensure_not_blank("name", name)?;
        if !self.can_add() {
            warn!(name = %name, max = self.limits.max_options, "Matrix is full");
            return Err(DomainError::new(
                ErrorCode::CapacityExceeded,
                format!("At most {} options allowed", self.limits.max_options),
            )
            .with_detail("max_options", self.limits.max_options.to_string()));
        }

        let centre = self.limits.midpoint();
        let option = ScoredOption::new(name, centre, centre, palette_color(self.options.len()).hex);
        let id = *option.id();
        info!(option_id = %id, name = option.name(), "Option added");
        self.options.push(option);
        Ok(id)
    }

    /// Removes an option.
    ///
    /// # Errors
    ///
    /// - `OptionNotFound` if no option has this id
    /// - `MinimumRequired` if removal would leave fewer than `min_options`
    pub fn remove_option(&mut self, id: &OptionId) -> Result<ScoredOption, DomainError> {
        let index = self.index_of(id)?;
        if !self.can_remove() {
            return Err(DomainError::new(
                ErrorCode::MinimumRequired,
                format!("At least {} options required", self.limits.min_options),
            )
            .with_detail("min_options", self.limits.min_options.to_string()));
        }

        let removed = self.options.remove(index);
        info!(option_id = %id, name = removed.name(), "Option removed");
        Ok(removed)
    }

    /// Moves an option, clamping into the axis range. Returns the stored
    /// position.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if a coordinate is NaN or infinite
    /// - `OptionNotFound` if no option has this id
    pub fn move_option(&mut self, id: &OptionId, x: f64, y: f64) -> Result<(f64, f64), DomainError> {
        let x = ensure_finite("x", x)?;
        let y = ensure_finite("y", y)?;
        let index = self.index_of(id)?;

        let axis_max = self.limits.axis_max;
        let (x, y) = (x.clamp(0.0, axis_max), y.clamp(0.0, axis_max));
        self.options[index].move_to(x, y);
        debug!(option_id = %id, x, y, "Option moved");
        Ok((x, y))
    }

    /// Restores the default options. Axis choices are kept.
    pub fn reset(&mut self) {
        self.options = Self::default_options(&self.limits);
        info!("Matrix reset to default options");
    }

    pub fn set_axes(&mut self, benefit: BenefitAxis, cost: CostAxis) {
        self.benefit_axis = benefit;
        self.cost_axis = cost;
        debug!(benefit = benefit.label(), cost = cost.label(), "Matrix axes changed");
    }

    fn index_of(&self, id: &OptionId) -> Result<usize, DomainError> {
        self.options
            .iter()
            .position(|o| o.id() == id)
            .ok_or_else(|| DomainError::new(ErrorCode::OptionNotFound, format!("Option not found: {}", id)))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Analysis
    // ─────────────────────────────────────────────────────────────────────────

    /// Non-dominated options in ascending benefit order.
    pub fn frontier(&self) -> Vec<&ScoredOption> {
        ParetoFilter::non_dominated(&self.options)
    }

    /// Dominated options, each with its first dominator.
    pub fn dominated(&self) -> Vec<Dominated<'_, ScoredOption>> {
        ParetoFilter::dominated_unchecked(&self.options)
    }

    pub fn quadrant_of(&self, id: &OptionId) -> Option<Quadrant> {
        self.option(id)
            .map(|o| Quadrant::classify(o.x(), o.y(), self.limits.midpoint()))
    }
}

impl Default for PivotMatrix {
    fn default() -> Self {
        Self::new(MatrixLimits::default())
    }
}

impl Recommender for PivotMatrix {
    type Recommendation = Vec<OptionId>;

    /// Ids of the frontier options.
    fn recommend(&self) -> Vec<OptionId> {
        self.frontier().into_iter().map(|o| *o.id()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_of(matrix: &PivotMatrix, name: &str) -> OptionId {
        *matrix.options().iter().find(|o| o.name() == name).unwrap().id()
    }

    fn names<'a>(options: impl IntoIterator<Item = &'a ScoredOption>) -> Vec<&'a str> {
        options.into_iter().map(ScoredOption::name).collect()
    }

    #[test]
    fn limits_reject_inconsistent_values() {
        assert!(MatrixLimits::new(8, 0, 10.0).is_err());
        assert!(MatrixLimits::new(2, 3, 10.0).is_err());
        assert!(MatrixLimits::new(8, 2, 0.0).is_err());
        assert!(MatrixLimits::new(8, 2, f64::INFINITY).is_err());
        assert!(MatrixLimits::new(8, 6, 10.0).is_err());
        assert!(MatrixLimits::new(4, 4, 5.0).is_ok());
        assert!(MatrixLimits::new(8, MatrixLimits::STARTING_OPTIONS, 10.0).is_ok());
    }

    #[test]
    fn new_matrix_has_default_options_and_colours() {
        let matrix = PivotMatrix::default();
        assert_eq!(
            names(matrix.options()),
            vec!["Keep Current", "AI-Powered", "Hybrid Human+AI", "Rules-Based", "Outsource"]
        );
        assert_eq!(matrix.options()[1].color(), "#9370DB");
        assert_eq!(matrix.title(), "Impact vs Effort");
    }

    #[test]
    fn default_frontier_excludes_keep_current() {
        let matrix = PivotMatrix::default();
        assert_eq!(
            names(matrix.frontier()),
            vec!["Rules-Based", "Outsource", "Hybrid Human+AI", "AI-Powered"]
        );

        let dominated = matrix.dominated();
        assert_eq!(dominated.len(), 1);
        assert_eq!(dominated[0].item.name(), "Keep Current");
        assert_eq!(dominated[0].dominated_by.name(), "Rules-Based");
    }

    #[test]
    fn add_option_trims_name_and_places_at_centre() {
        let mut matrix = PivotMatrix::default();
        let id = matrix.add_option("  Buy Vendor  ").unwrap();

        let option = matrix.option(&id).unwrap();
        assert_eq!(option.name(), "Buy Vendor");
        assert_eq!((option.x(), option.y()), (5.0, 5.0));
        assert_eq!(option.color(), "#FF7F50");
    }

    #[test]
    fn add_option_rejects_blank_name() {
        let mut matrix = PivotMatrix::default();
        let err = matrix.add_option("   ").unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(matrix.options().len(), 5);
    }

    #[test]
    fn add_option_enforces_capacity() {
        let mut matrix = PivotMatrix::default();
        matrix.add_option("Six").unwrap();
        matrix.add_option("Seven").unwrap();
        matrix.add_option("Eight").unwrap();
        assert!(!matrix.can_add());

        let err = matrix.add_option("Nine").unwrap_err();
        assert_eq!(err.code, ErrorCode::CapacityExceeded);
        assert_eq!(matrix.options().len(), 8);
    }

    #[test]
    fn remove_option_refused_at_minimum() {
        let mut matrix = PivotMatrix::default();
        for name in ["Keep Current", "AI-Powered", "Hybrid Human+AI"] {
            let id = id_of(&matrix, name);
            matrix.remove_option(&id).unwrap();
        }
        assert_eq!(matrix.options().len(), 2);

        let id = id_of(&matrix, "Outsource");
        let err = matrix.remove_option(&id).unwrap_err();
        assert_eq!(err.code, ErrorCode::MinimumRequired);
        assert_eq!(matrix.options().len(), 2);
    }

    #[test]
    fn remove_unknown_option_at_minimum_is_not_found() {
        let limits = MatrixLimits::new(8, 5, 10.0).unwrap();
        let mut matrix = PivotMatrix::new(limits);
        assert!(!matrix.can_remove());

        let err = matrix.remove_option(&OptionId::new()).unwrap_err();
        assert_eq!(err.code, ErrorCode::OptionNotFound);
        assert_eq!(matrix.options().len(), 5);
    }

    #[test]
    fn matrix_starts_at_or_above_its_floor() {
        for min in 1..=MatrixLimits::STARTING_OPTIONS {
            let matrix = PivotMatrix::new(MatrixLimits::new(8, min, 10.0).unwrap());
            assert!(matrix.options().len() >= matrix.limits().min_options());
        }
    }

    #[test]
    fn remove_option_keeps_other_ids_stable() {
        let mut matrix = PivotMatrix::default();
        let outsource = id_of(&matrix, "Outsource");
        let keep = id_of(&matrix, "Keep Current");

        matrix.remove_option(&keep).unwrap();
        assert_eq!(matrix.option(&outsource).unwrap().name(), "Outsource");

        let err = matrix.remove_option(&keep).unwrap_err();
        assert_eq!(err.code, ErrorCode::OptionNotFound);
    }

    #[test]
    fn move_option_clamps_into_axis_range() {
        let mut matrix = PivotMatrix::default();
        let id = id_of(&matrix, "Outsource");

        assert_eq!(matrix.move_option(&id, 12.0, -1.0).unwrap(), (10.0, 0.0));
        assert!(matrix.move_option(&id, f64::NAN, 1.0).unwrap_err().is_invalid_input());
        assert_eq!(
            matrix.move_option(&OptionId::new(), 1.0, 1.0).unwrap_err().code,
            ErrorCode::OptionNotFound
        );
    }

    #[test]
    fn reset_restores_defaults_but_keeps_axes() {
        let mut matrix = PivotMatrix::default();
        matrix.set_axes(BenefitAxis::Roi, CostAxis::Risk);
        matrix.add_option("Extra").unwrap();
        let id = id_of(&matrix, "AI-Powered");
        matrix.move_option(&id, 1.0, 1.0).unwrap();

        matrix.reset();
        assert_eq!(matrix.options().len(), 5);
        assert_eq!(matrix.options()[1].x(), 8.0);
        assert_eq!(matrix.title(), "ROI vs Risk");
    }

    #[test]
    fn quadrants_split_at_midpoint() {
        let matrix = PivotMatrix::default();
        let quadrant = |name| matrix.quadrant_of(&id_of(&matrix, name)).unwrap();

        assert_eq!(quadrant("Keep Current"), Quadrant::LowPriority);
        assert_eq!(quadrant("AI-Powered"), Quadrant::BigBets);
        assert_eq!(quadrant("Hybrid Human+AI"), Quadrant::BigBets);
        assert_eq!(quadrant("Rules-Based"), Quadrant::QuickWins);
        assert_eq!(quadrant("Outsource"), Quadrant::QuickWins);
        assert_eq!(Quadrant::classify(4.9, 5.0, 5.0), Quadrant::MoneyPits);
        assert_eq!(
            Quadrant::QuickWins.caption(BenefitAxis::Impact, CostAxis::Effort),
            "High Impact, Low Effort"
        );
    }

    #[test]
    fn small_limits_clamp_and_truncate_defaults() {
        let limits = MatrixLimits::new(3, 1, 5.0).unwrap();
        let matrix = PivotMatrix::new(limits);
        assert_eq!(matrix.options().len(), 3);
        assert_eq!((matrix.options()[1].x(), matrix.options()[1].y()), (5.0, 5.0));
    }

    #[test]
    fn recommend_returns_frontier_ids() {
        let matrix = PivotMatrix::default();
        let ids = matrix.recommend();
        assert_eq!(ids.len(), 4);
        assert!(!ids.contains(&id_of(&matrix, "Keep Current")));
    }
}
