//! Questionnaire Classifier - decision table from answers to a recommendation.

use tracing::debug;

use super::question::{
    AnswerProfile, Budget, DataAvailability, Interpretability, PatternComplexity, QUESTIONS,
    QUESTION_COUNT,
};
use super::RecommendationKey;
use crate::domain::foundation::DomainError;

/// Maps answer sets to recommendation keys.
pub struct QuestionnaireClassifier;

impl QuestionnaireClassifier {
    /// Classifies an ordered answer set given as raw ordinals.
    ///
    /// An incomplete answer set yields `StartSimpler`.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if there are more answers than questions, or any
    ///   answer is outside its question's option range
    pub fn classify(answers: &[usize]) -> Result<RecommendationKey, DomainError> {
        if answers.len() > QUESTION_COUNT {
            return Err(DomainError::invalid_input(
                "answers",
                format!(
                    "Expected at most {} answers, got {}",
                    QUESTION_COUNT,
                    answers.len()
                ),
            ));
        }

        for (question, &answer) in QUESTIONS.iter().zip(answers) {
            question.validate_answer(answer)?;
        }

        if answers.len() < QUESTION_COUNT {
            return Ok(RecommendationKey::StartSimpler);
        }

        let profile = AnswerProfile::from_answers(answers)?;
        let key = Self::classify_profile(&profile);
        debug!(?answers, recommendation = %key, "Classified questionnaire answers");
        Ok(key)
    }

    /// Classifies a complete, typed answer profile.
    ///
    /// The match is exhaustive over every answer combination, so there is
    /// no fallback arm.
    pub fn classify_profile(profile: &AnswerProfile) -> RecommendationKey {
        use Budget::*;
        use DataAvailability as Data;
        use Interpretability::*;
        use PatternComplexity as Pattern;
        use RecommendationKey::*;

        let AnswerProfile {
            data,
            pattern,
            interpret,
            budget,
        } = *profile;

        match (data, pattern) {
            (_, Pattern::Simple) => RuleBased,

            (Data::None, _) => StartSimpler,

            (Data::Limited, Pattern::MultiFactor) if interpret <= Helpful => RuleBased,
            (Data::Limited, _) if budget == Low => StartSimpler,
            (Data::Limited, _) => Hybrid,

            (Data::Moderate, Pattern::MultiFactor) if interpret == Critical => TraditionalMl,
            (Data::Moderate, Pattern::NonLinear) if interpret == Critical => Hybrid,
            (Data::Moderate, Pattern::MultiFactor | Pattern::NonLinear) if budget >= Medium => {
                TraditionalMl
            }
            (Data::Moderate, Pattern::MultiFactor | Pattern::NonLinear) => Hybrid,
            (Data::Moderate, Pattern::Unknown) => Hybrid,

            (Data::Abundant, Pattern::MultiFactor) => TraditionalMl,
            (Data::Abundant, Pattern::NonLinear | Pattern::Unknown) if interpret == Critical => {
                Hybrid
            }
            (Data::Abundant, Pattern::NonLinear) if budget <= Medium => TraditionalMl,
            (Data::Abundant, Pattern::NonLinear) => DeepLearning,
            (Data::Abundant, Pattern::Unknown) if budget == High => DeepLearning,
            (Data::Abundant, Pattern::Unknown) => TraditionalMl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(answers: &[usize]) -> RecommendationKey {
        QuestionnaireClassifier::classify(answers).unwrap()
    }

    #[test]
    fn incomplete_answers_start_simpler() {
        assert_eq!(classify(&[]), RecommendationKey::StartSimpler);
        assert_eq!(classify(&[3, 2]), RecommendationKey::StartSimpler);
        assert_eq!(classify(&[3, 2, 2]), RecommendationKey::StartSimpler);
    }

    #[test]
    fn too_many_answers_is_invalid_input() {
        let err = QuestionnaireClassifier::classify(&[0, 0, 0, 0, 0]).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn out_of_range_answer_is_invalid_input_even_when_incomplete() {
        assert!(QuestionnaireClassifier::classify(&[4]).is_err());
        assert!(QuestionnaireClassifier::classify(&[0, 0, 3, 0]).is_err());
    }

    #[test]
    fn no_data_depends_only_on_pattern() {
        assert_eq!(classify(&[0, 0, 2, 2]), RecommendationKey::RuleBased);
        assert_eq!(classify(&[0, 1, 0, 2]), RecommendationKey::StartSimpler);
        assert_eq!(classify(&[0, 3, 2, 0]), RecommendationKey::StartSimpler);
    }

    #[test]
    fn limited_data_rules() {
        assert_eq!(classify(&[1, 0, 2, 0]), RecommendationKey::RuleBased);
        assert_eq!(classify(&[1, 1, 0, 0]), RecommendationKey::RuleBased);
        assert_eq!(classify(&[1, 1, 1, 2]), RecommendationKey::RuleBased);
        assert_eq!(classify(&[1, 1, 2, 0]), RecommendationKey::StartSimpler);
        assert_eq!(classify(&[1, 1, 2, 1]), RecommendationKey::Hybrid);
        assert_eq!(classify(&[1, 2, 0, 0]), RecommendationKey::StartSimpler);
        assert_eq!(classify(&[1, 3, 1, 2]), RecommendationKey::Hybrid);
    }

    #[test]
    fn moderate_data_rules() {
        assert_eq!(classify(&[2, 0, 0, 0]), RecommendationKey::RuleBased);
        assert_eq!(classify(&[2, 1, 0, 0]), RecommendationKey::TraditionalMl);
        assert_eq!(classify(&[2, 1, 1, 0]), RecommendationKey::Hybrid);
        assert_eq!(classify(&[2, 1, 2, 1]), RecommendationKey::TraditionalMl);
        assert_eq!(classify(&[2, 2, 0, 2]), RecommendationKey::Hybrid);
        assert_eq!(classify(&[2, 2, 1, 0]), RecommendationKey::Hybrid);
        assert_eq!(classify(&[2, 2, 2, 2]), RecommendationKey::TraditionalMl);
        assert_eq!(classify(&[2, 3, 2, 2]), RecommendationKey::Hybrid);
    }

    #[test]
    fn abundant_data_rules() {
        assert_eq!(classify(&[3, 0, 0, 0]), RecommendationKey::RuleBased);
        assert_eq!(classify(&[3, 1, 0, 0]), RecommendationKey::TraditionalMl);
        assert_eq!(classify(&[3, 2, 0, 2]), RecommendationKey::Hybrid);
        assert_eq!(classify(&[3, 2, 1, 0]), RecommendationKey::TraditionalMl);
        assert_eq!(classify(&[3, 2, 2, 1]), RecommendationKey::TraditionalMl);
        assert_eq!(classify(&[3, 2, 2, 2]), RecommendationKey::DeepLearning);
        assert_eq!(classify(&[3, 3, 0, 2]), RecommendationKey::Hybrid);
        assert_eq!(classify(&[3, 3, 1, 2]), RecommendationKey::DeepLearning);
        assert_eq!(classify(&[3, 3, 2, 1]), RecommendationKey::TraditionalMl);
    }

    #[test]
    fn classify_is_deterministic() {
        let answers = [3, 3, 1, 1];
        assert_eq!(classify(&answers), classify(&answers));
    }
}
