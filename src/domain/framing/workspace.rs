//! LOOP framing workspace - the state of one framing session.

use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

use super::{
    Alternative, AlternativeTag, Component, LoopStep, Outcome, Placement, Priority,
    SampleProblem, SignalDefinition, StepState,
};
use crate::domain::foundation::{
    ensure_finite, ensure_not_blank, AlternativeId, ComponentId, DomainError, ErrorCode,
    SignalDefinitionId,
};
use crate::domain::signals::SignalRole;
use crate::domain::tradeoff::{ParetoFilter, Scored};

pub const DEFAULT_X_LABEL: &str = "Effort";
pub const DEFAULT_Y_LABEL: &str = "Impact";

/// Trade-off grid: axis labels and alternative placements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeoffBoard {
    x_label: String,
    y_label: String,
    placements: HashMap<AlternativeId, Placement>,
}

impl Default for TradeoffBoard {
    fn default() -> Self {
        Self {
            x_label: DEFAULT_X_LABEL.to_string(),
            y_label: DEFAULT_Y_LABEL.to_string(),
            placements: HashMap::new(),
        }
    }
}

impl TradeoffBoard {
    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }
}

/// An alternative paired with its placement.
struct Placed<'a> {
    alternative: &'a Alternative,
    placement: Placement,
}

impl Scored for Placed<'_> {
    fn benefit(&self) -> f64 {
        self.placement.benefit()
    }

    fn cost(&self) -> f64 {
        self.placement.cost()
    }
}

/// Framing session state.
///
/// # Invariants
///
/// - every placement key is the id of an existing alternative
/// - `selected`, when set, is the id of an existing alternative
/// - placement coordinates lie in `[0, 1]`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoopWorkspace {
    step: LoopStep,
    outcome: Outcome,
    components: Vec<Component>,
    alternatives: Vec<Alternative>,
    tradeoffs: TradeoffBoard,
    selected: Option<AlternativeId>,
    signals: Vec<SignalDefinition>,
}

impl LoopWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn current_step(&self) -> LoopStep {
        self.step
    }

    pub fn go_to(&mut self, step: LoopStep) {
        self.step = step;
        debug!(step = step.number(), "Moved to framing step");
    }

    /// Advances one step. Returns false on the last step.
    pub fn next(&mut self) -> bool {
        match self.step.next() {
            Some(step) => {
                self.go_to(step);
                true
            }
            None => false,
        }
    }

    /// Goes back one step. Returns false on the first step.
    pub fn previous(&mut self) -> bool {
        match self.step.previous() {
            Some(step) => {
                self.go_to(step);
                true
            }
            None => false,
        }
    }

    pub fn is_last(&self) -> bool {
        self.step.is_last()
    }

    /// Indicator state for every step, in order.
    pub fn indicators(&self) -> [(LoopStep, StepState); 5] {
        LoopStep::ALL.map(|s| (s, s.state_relative_to(self.step)))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Outcome
    // ─────────────────────────────────────────────────────────────────────────

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn set_outcome(&mut self, problem: impl Into<String>, desired: impl Into<String>) {
        self.outcome = Outcome {
            problem: problem.into(),
            desired: desired.into(),
        };
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Components
    // ─────────────────────────────────────────────────────────────────────────

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// # Errors
    ///
    /// - `InvalidInput` if the name is blank
    pub fn add_component(&mut self, name: &str, priority: Priority) -> Result<ComponentId, DomainError> {
        let name = ensure_not_blank("name", name)?;
        let id = ComponentId::new();
        debug!(component_id = %id, name = %name, priority = priority.code(), "Component added");
        self.components.push(Component { id, name, priority });
        Ok(id)
    }

    /// # Errors
    ///
    /// - `ComponentNotFound` if no component has this id
    pub fn remove_component(&mut self, id: &ComponentId) -> Result<Component, DomainError> {
        let index = self
            .components
            .iter()
            .position(|c| c.id == *id)
            .ok_or_else(|| {
                DomainError::new(ErrorCode::ComponentNotFound, format!("Component not found: {}", id))
            })?;
        Ok(self.components.remove(index))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Alternatives
    // ─────────────────────────────────────────────────────────────────────────

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    pub fn alternative(&self, id: &AlternativeId) -> Option<&Alternative> {
        self.alternatives.iter().find(|a| a.id == *id)
    }

    /// # Errors
    ///
    /// - `InvalidInput` if the name is blank
    pub fn add_alternative(&mut self, name: &str, tag: AlternativeTag) -> Result<AlternativeId, DomainError> {
        let name = ensure_not_blank("name", name)?;
        let id = AlternativeId::new();
        debug!(alternative_id = %id, name = %name, tag = tag.label(), "Alternative added");
        self.alternatives.push(Alternative { id, name, tag });
        Ok(id)
    }

    /// Removes an alternative together with its placement and selection.
    ///
    /// # Errors
    ///
    /// - `AlternativeNotFound` if no alternative has this id
    pub fn remove_alternative(&mut self, id: &AlternativeId) -> Result<Alternative, DomainError> {
        let index = self
            .alternatives
            .iter()
            .position(|a| a.id == *id)
            .ok_or_else(|| Self::alternative_not_found(id))?;

        self.tradeoffs.placements.remove(id);
        if self.selected == Some(*id) {
            self.selected = None;
        }
        Ok(self.alternatives.remove(index))
    }

    fn alternative_not_found(id: &AlternativeId) -> DomainError {
        DomainError::new(ErrorCode::AlternativeNotFound, format!("Alternative not found: {}", id))
    }

    fn ensure_alternative(&self, id: &AlternativeId) -> Result<(), DomainError> {
        match self.alternative(id) {
            Some(_) => Ok(()),
            None => Err(Self::alternative_not_found(id)),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Trade-offs
    // ─────────────────────────────────────────────────────────────────────────

    pub fn tradeoffs(&self) -> &TradeoffBoard {
        &self.tradeoffs
    }

    /// Sets the axis labels; blank labels fall back to Effort / Impact.
    pub fn set_axis_labels(&mut self, x_label: &str, y_label: &str) {
        self.tradeoffs.x_label = ensure_not_blank("x_label", x_label)
            .unwrap_or_else(|_| DEFAULT_X_LABEL.to_string());
        self.tradeoffs.y_label = ensure_not_blank("y_label", y_label)
            .unwrap_or_else(|_| DEFAULT_Y_LABEL.to_string());
    }

    pub fn selected(&self) -> Option<&AlternativeId> {
        self.selected.as_ref()
    }

    /// # Errors
    ///
    /// - `AlternativeNotFound` if no alternative has this id
    pub fn select_alternative(&mut self, id: &AlternativeId) -> Result<(), DomainError> {
        self.ensure_alternative(id)?;
        self.selected = Some(*id);
        Ok(())
    }

    /// Places the selected alternative and clears the selection.
    ///
    /// # Errors
    ///
    /// - `NothingSelected` if no alternative is selected
    /// - `InvalidInput` if a coordinate is NaN or infinite
    pub fn place_selected(&mut self, x: f64, y: f64) -> Result<AlternativeId, DomainError> {
        let id = self.selected.ok_or_else(|| {
            DomainError::new(ErrorCode::NothingSelected, "Select an alternative before placing it")
        })?;
        self.place(&id, x, y)?;
        self.selected = None;
        Ok(id)
    }

    /// Places or moves an alternative, clamping into `[0, 1]`.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if a coordinate is NaN or infinite
    /// - `AlternativeNotFound` if no alternative has this id
    pub fn place(&mut self, id: &AlternativeId, x: f64, y: f64) -> Result<Placement, DomainError> {
        let x = ensure_finite("x", x)?;
        let y = ensure_finite("y", y)?;
        self.ensure_alternative(id)?;

        let placement = Placement {
            x: x.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0),
        };
        self.tradeoffs.placements.insert(*id, placement);
        debug!(alternative_id = %id, x = placement.x, y = placement.y, "Alternative placed");
        Ok(placement)
    }

    pub fn placement_of(&self, id: &AlternativeId) -> Option<Placement> {
        self.tradeoffs.placements.get(id).copied()
    }

    /// Alternatives without a placement, in list order.
    pub fn unplaced(&self) -> Vec<&Alternative> {
        self.alternatives
            .iter()
            .filter(|a| !self.tradeoffs.placements.contains_key(&a.id))
            .collect()
    }

    /// Placed alternatives not dominated on impact (higher better) and effort
    /// (lower better), in ascending impact order.
    pub fn frontier(&self) -> Vec<&Alternative> {
        let placed: Vec<Placed<'_>> = self
            .alternatives
            .iter()
            .filter_map(|alternative| {
                self.placement_of(&alternative.id)
                    .map(|placement| Placed { alternative, placement })
            })
            .collect();

        ParetoFilter::non_dominated(&placed)
            .into_iter()
            .map(|p| p.alternative)
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Signals
    // ─────────────────────────────────────────────────────────────────────────

    pub fn signals(&self) -> &[SignalDefinition] {
        &self.signals
    }

    /// # Errors
    ///
    /// - `InvalidInput` if the name is blank or the threshold is NaN or infinite
    pub fn add_signal(
        &mut self,
        name: &str,
        role: SignalRole,
        threshold: f64,
        unit: &str,
    ) -> Result<SignalDefinitionId, DomainError> {
        let name = ensure_not_blank("name", name)?;
        let threshold = ensure_finite("threshold", threshold)?;
        let id = SignalDefinitionId::new();
        debug!(signal_id = %id, name = %name, threshold, "Signal definition added");
        self.signals.push(SignalDefinition {
            id,
            name,
            role,
            threshold,
            unit: unit.to_string(),
        });
        Ok(id)
    }

    /// # Errors
    ///
    /// - `SignalDefinitionNotFound` if no signal definition has this id
    pub fn remove_signal(&mut self, id: &SignalDefinitionId) -> Result<SignalDefinition, DomainError> {
        let index = self
            .signals
            .iter()
            .position(|s| s.id == *id)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::SignalDefinitionNotFound,
                    format!("Signal definition not found: {}", id),
                )
            })?;
        Ok(self.signals.remove(index))
    }

    pub fn signals_by_role(&self, role: SignalRole) -> impl Iterator<Item = &SignalDefinition> {
        self.signals.iter().filter(move |s| s.role == role)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Samples
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces outcome, components and alternatives with a sample problem,
    /// clearing placements, selection and signals. The current step is kept.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if no sample has this key
    pub fn load_sample(&mut self, key: &str) -> Result<(), DomainError> {
        let sample = SampleProblem::find(key)
            .ok_or_else(|| DomainError::invalid_input("sample", format!("Unknown sample problem: {}", key)))?;

        self.set_outcome(sample.problem, sample.desired);
        self.components = sample
            .components
            .iter()
            .map(|&(name, priority)| Component {
                id: ComponentId::new(),
                name: name.to_string(),
                priority,
            })
            .collect();
        self.alternatives = sample
            .alternatives
            .iter()
            .map(|&(name, tag)| Alternative {
                id: AlternativeId::new(),
                name: name.to_string(),
                tag,
            })
            .collect();
        self.tradeoffs.placements.clear();
        self.selected = None;
        self.signals.clear();

        info!(sample = key, "Sample problem loaded");
        Ok(())
    }
}
