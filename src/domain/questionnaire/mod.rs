//! Questionnaire Module - AI-vs-non-AI solution selection.
//!
//! Four ordinal questions (data availability, pattern complexity,
//! interpretability needs, budget) are mapped to one of five recommended
//! solution approaches by a fixed decision table.
//!
//! # Components
//!
//! - `Question` / `QUESTIONS` - The immutable question catalogue
//! - `QuestionnaireClassifier` - Pure answers-to-recommendation mapping
//! - `QuestionnaireSession` - Answer set with select / back / reset

mod classifier;
mod question;
mod recommendation;
mod session;

pub use classifier::QuestionnaireClassifier;
pub use question::{
    AnswerProfile, Budget, DataAvailability, Interpretability, PatternComplexity, Question,
    QUESTIONS, QUESTION_COUNT,
};
pub use recommendation::{RecommendationInfo, RecommendationKey};
pub use session::QuestionnaireSession;
