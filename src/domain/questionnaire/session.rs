//! Questionnaire session - the answer set owned by one presentation session.

use serde::Serialize;
use tracing::{debug, info};

use super::question::{AnswerProfile, Question, QUESTIONS, QUESTION_COUNT};
use super::{QuestionnaireClassifier, RecommendationInfo, RecommendationKey};
use crate::domain::foundation::{DomainError, ErrorCode, Percentage};
use crate::ports::Recommender;

/// Answers collected so far, one per question in question order.
///
/// # Invariants
///
/// - `answers.len() <= QUESTION_COUNT`
/// - every recorded answer is a valid ordinal for its question
/// - `profile` is `Some` exactly when the answer set is complete
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuestionnaireSession {
    answers: Vec<usize>,
    #[serde(skip)]
    profile: Option<AnswerProfile>,
}

impl QuestionnaireSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded answer ordinals.
    pub fn answers(&self) -> &[usize] {
        &self.answers
    }

    /// Index of the question awaiting an answer; equals the question count
    /// once complete.
    pub fn current_index(&self) -> usize {
        self.answers.len()
    }

    /// The question awaiting an answer, or `None` once complete.
    pub fn current_question(&self) -> Option<&'static Question> {
        QUESTIONS.get(self.answers.len())
    }

    /// Returns true once every question has been answered.
    pub fn is_complete(&self) -> bool {
        self.answers.len() == QUESTION_COUNT
    }

    /// Share of questions answered.
    pub fn progress(&self) -> Percentage {
        Percentage::from_ratio(self.answers.len(), QUESTION_COUNT)
    }

    /// Records an answer to the current question.
    ///
    /// # Errors
    ///
    /// - `QuestionnaireComplete` if every question is already answered
    /// - `InvalidInput` if the option is outside the current question's range
    pub fn select_option(&mut self, option: usize) -> Result<(), DomainError> {
        let question = self.current_question().ok_or_else(|| {
            DomainError::new(
                ErrorCode::QuestionnaireComplete,
                "All questions have already been answered",
            )
        })?;
        question.validate_answer(option)?;

        self.answers.push(option);
        debug!(
            question = question.id,
            option,
            answered = self.answers.len(),
            "Recorded questionnaire answer"
        );

        if self.is_complete() {
            self.profile = Some(AnswerProfile::from_answers(&self.answers)?);
        }
        Ok(())
    }

    /// Steps back one question, discarding its answer. No-op at the start.
    pub fn go_back(&mut self) {
        if self.answers.pop().is_some() {
            self.profile = None;
            debug!(answered = self.answers.len(), "Stepped back one question");
        }
    }

    /// Clears every answer.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.profile = None;
        info!("Questionnaire reset");
    }

    /// The recommendation for the current answers; `StartSimpler` until complete.
    pub fn recommendation(&self) -> RecommendationKey {
        match &self.profile {
            Some(profile) => QuestionnaireClassifier::classify_profile(profile),
            None => RecommendationKey::StartSimpler,
        }
    }

    /// Display metadata for the current recommendation.
    pub fn recommendation_info(&self) -> &'static RecommendationInfo {
        self.recommendation().info()
    }

    /// Label of the option chosen for a question, if answered.
    pub fn answer_label(&self, question_index: usize) -> Option<&'static str> {
        let answer = *self.answers.get(question_index)?;
        QUESTIONS.get(question_index)?.option_label(answer)
    }
}

impl Recommender for QuestionnaireSession {
    type Recommendation = RecommendationKey;

    fn recommend(&self) -> RecommendationKey {
        self.recommendation()
    }
}
