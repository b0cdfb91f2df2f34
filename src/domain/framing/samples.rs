//! Built-in sample problems for the framing workspace.

use super::{AlternativeTag, Priority};

/// A ready-made problem with components and alternatives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleProblem {
    pub key: &'static str,
    pub problem: &'static str,
    pub desired: &'static str,
    pub components: &'static [(&'static str, Priority)],
    pub alternatives: &'static [(&'static str, AlternativeTag)],
}

impl SampleProblem {
    /// Finds a sample by key.
    pub fn find(key: &str) -> Option<&'static SampleProblem> {
        SAMPLE_PROBLEMS.iter().find(|s| s.key == key)
    }
}

pub const SAMPLE_PROBLEMS: [SampleProblem; 3] = [
    SampleProblem {
        key: "customer-churn",
        problem: "Our SaaS platform is experiencing 15% monthly customer churn, significantly above the industry average of 5%. We need to identify at-risk customers and intervene before they cancel.",
        desired: "Reduce monthly churn rate to 5% within 6 months by identifying and retaining at-risk customers through timely interventions.",
        components: &[
            ("Usage Pattern Analysis", Priority::High),
            ("Customer Support Interactions", Priority::High),
            ("Billing & Payment Behavior", Priority::Medium),
            ("Feature Adoption Tracking", Priority::Medium),
        ],
        alternatives: &[
            ("ML Churn Prediction Model", AlternativeTag::Ai),
            ("Rule-Based Alert System", AlternativeTag::NonAi),
            ("Customer Health Score Dashboard", AlternativeTag::Hybrid),
            ("Manual Account Reviews", AlternativeTag::NonAi),
        ],
    },
    SampleProblem {
        key: "content-moderation",
        problem: "Our user-generated content platform receives 50,000 posts daily. Manual moderation cannot keep up, and harmful content sometimes stays visible for hours.",
        desired: "Achieve 99% harmful content removal within 5 minutes of posting while maintaining false positive rate below 1%.",
        components: &[
            ("Text Classification", Priority::High),
            ("Image Analysis", Priority::High),
            ("Context Understanding", Priority::Medium),
            ("Appeal Processing", Priority::Low),
        ],
        alternatives: &[
            ("LLM Content Classifier", AlternativeTag::Ai),
            ("Keyword Filtering", AlternativeTag::NonAi),
            ("AI + Human Review Pipeline", AlternativeTag::Hybrid),
            ("Community Flagging System", AlternativeTag::NonAi),
        ],
    },
    SampleProblem {
        key: "inventory-optimization",
        problem: "Retail chain with 200 stores faces both stockouts (8% of SKUs) and overstock (23% excess inventory), resulting in $2M annual losses.",
        desired: "Reduce stockouts to 2% and overstock to 10% within one year, saving $1.5M annually.",
        components: &[
            ("Demand Forecasting", Priority::High),
            ("Supply Chain Visibility", Priority::High),
            ("Store-Level Optimization", Priority::Medium),
            ("Seasonal Adjustment", Priority::Medium),
        ],
        alternatives: &[
            ("ML Demand Prediction", AlternativeTag::Ai),
            ("Historical Average Model", AlternativeTag::NonAi),
            ("AI-Assisted Buyer Tools", AlternativeTag::Hybrid),
            ("Vendor-Managed Inventory", AlternativeTag::NonAi),
        ],
    },
];
