//! Recommendation catalogue for the questionnaire classifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DomainError, ErrorCode};

/// The closed set of solution approaches the classifier can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationKey {
    RuleBased,
    TraditionalMl,
    DeepLearning,
    Hybrid,
    StartSimpler,
}

impl RecommendationKey {
    /// All keys, in catalogue order.
    pub const ALL: [RecommendationKey; 5] = [
        RecommendationKey::RuleBased,
        RecommendationKey::TraditionalMl,
        RecommendationKey::DeepLearning,
        RecommendationKey::Hybrid,
        RecommendationKey::StartSimpler,
    ];

    /// Returns the wire name of this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationKey::RuleBased => "rule-based",
            RecommendationKey::TraditionalMl => "traditional-ml",
            RecommendationKey::DeepLearning => "deep-learning",
            RecommendationKey::Hybrid => "hybrid",
            RecommendationKey::StartSimpler => "start-simpler",
        }
    }

    /// Returns the display metadata for this key.
    pub fn info(&self) -> &'static RecommendationInfo {
        match self {
            RecommendationKey::RuleBased => &RULE_BASED,
            RecommendationKey::TraditionalMl => &TRADITIONAL_ML,
            RecommendationKey::DeepLearning => &DEEP_LEARNING,
            RecommendationKey::Hybrid => &HYBRID,
            RecommendationKey::StartSimpler => &START_SIMPLER,
        }
    }
}

impl fmt::Display for RecommendationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecommendationKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecommendationKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::InvalidInput,
                    format!("Unknown recommendation key: {}", s),
                )
            })
    }
}

/// Display metadata for a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendationInfo {
    pub key: RecommendationKey,
    pub name: &'static str,
    /// Hex colour used when the recommendation is highlighted.
    pub color: &'static str,
    pub description: &'static str,
    pub rationale: &'static str,
}

const RULE_BASED: RecommendationInfo = RecommendationInfo {
    key: RecommendationKey::RuleBased,
    name: "Rule-Based System",
    color: "#4CAF50",
    description: "Use explicit business rules and decision trees. Best for well-understood, stable domains.",
    rationale: "Your constraints favor deterministic, explainable solutions without ML overhead.",
};

const TRADITIONAL_ML: RecommendationInfo = RecommendationInfo {
    key: RecommendationKey::TraditionalMl,
    name: "Traditional ML",
    color: "#2196F3",
    description: "Regression, decision trees, random forests. Good balance of performance and interpretability.",
    rationale: "Sufficient data and moderate complexity make classical ML algorithms effective.",
};

const DEEP_LEARNING: RecommendationInfo = RecommendationInfo {
    key: RecommendationKey::DeepLearning,
    name: "Deep Learning",
    color: "#9C27B0",
    description: "Neural networks, transformers. For complex patterns with abundant data.",
    rationale: "Complex patterns and abundant data justify the investment in deep learning infrastructure.",
};

const HYBRID: RecommendationInfo = RecommendationInfo {
    key: RecommendationKey::Hybrid,
    name: "Hybrid Approach",
    color: "#FFC107",
    description: "Combine rules for known patterns with ML for edge cases.",
    rationale: "Mixed requirements suggest combining rule-based stability with ML flexibility.",
};

const START_SIMPLER: RecommendationInfo = RecommendationInfo {
    key: RecommendationKey::StartSimpler,
    name: "Start Simpler",
    color: "#9E9E9E",
    description: "Begin with heuristics or manual processes. Collect data before automating.",
    rationale: "Limited data or unclear patterns suggest building understanding before automation.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_serialize_as_kebab_case() {
        let json = serde_json::to_string(&RecommendationKey::TraditionalMl).unwrap();
        assert_eq!(json, "\"traditional-ml\"");

        let key: RecommendationKey = serde_json::from_str("\"start-simpler\"").unwrap();
        assert_eq!(key, RecommendationKey::StartSimpler);
    }

    #[test]
    fn display_matches_wire_name() {
        for key in RecommendationKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key));
        }
    }

    #[test]
    fn from_str_parses_known_keys_only() {
        assert_eq!("hybrid".parse::<RecommendationKey>().unwrap(), RecommendationKey::Hybrid);
        assert!("quantum".parse::<RecommendationKey>().is_err());
    }

    #[test]
    fn every_key_has_matching_info() {
        for key in RecommendationKey::ALL {
            let info = key.info();
            assert_eq!(info.key, key);
            assert!(info.color.starts_with('#'));
            assert!(!info.name.is_empty());
        }
    }
}
