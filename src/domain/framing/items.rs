//! Items collected while framing a problem.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AlternativeId, ComponentId, SignalDefinitionId};
use crate::domain::signals::SignalRole;
use crate::domain::tradeoff::Scored;

/// Priority of a problem component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "H")]
    High,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Low,
}

impl Priority {
    /// Single-letter badge.
    pub fn code(&self) -> &'static str {
        match self {
            Priority::High => "H",
            Priority::Medium => "M",
            Priority::Low => "L",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Priority::High => "#dc3545",
            Priority::Medium => "#f0ad4e",
            Priority::Low => "#5cb85c",
        }
    }
}

/// Kind of solution an alternative represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlternativeTag {
    #[serde(rename = "AI")]
    Ai,
    #[serde(rename = "Non-AI")]
    NonAi,
    #[serde(rename = "Hybrid")]
    Hybrid,
}

impl AlternativeTag {
    pub fn label(&self) -> &'static str {
        match self {
            AlternativeTag::Ai => "AI",
            AlternativeTag::NonAi => "Non-AI",
            AlternativeTag::Hybrid => "Hybrid",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            AlternativeTag::Ai => "#9b59b6",
            AlternativeTag::NonAi => "#3498db",
            AlternativeTag::Hybrid => "#e67e22",
        }
    }
}

/// Problem statement and desired outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub problem: String,
    pub desired: String,
}

impl Outcome {
    /// Both texts are filled in.
    pub fn is_defined(&self) -> bool {
        !self.problem.trim().is_empty() && !self.desired.trim().is_empty()
    }
}

/// A component the problem breaks down into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub id: ComponentId,
    pub name: String,
    pub priority: Priority,
}

/// A candidate solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: AlternativeId,
    pub name: String,
    pub tag: AlternativeTag,
}

/// Normalised position on the trade-off grid: `x` is effort, `y` is impact,
/// both in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
}

impl Scored for Placement {
    fn benefit(&self) -> f64 {
        self.y
    }

    fn cost(&self) -> f64 {
        self.x
    }
}

/// A signal to watch once the chosen alternative is running.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalDefinition {
    pub id: SignalDefinitionId,
    pub name: String,
    pub role: SignalRole,
    pub threshold: f64,
    pub unit: String,
}

impl SignalDefinition {
    /// Threshold with its unit, e.g. `"5%"`.
    pub fn threshold_label(&self) -> String {
        format!("{}{}", self.threshold, self.unit)
    }
}
