//! Question catalogue and typed answers for the AI-alternatives questionnaire.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ValidationError};

/// A fixed multiple-choice question. The index of an option label is its
/// ordinal answer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub title: &'static str,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
}

impl Question {
    /// Number of selectable options.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Label for an ordinal answer, if it is in range.
    pub fn option_label(&self, ordinal: usize) -> Option<&'static str> {
        self.options.get(ordinal).copied()
    }

    /// Checks an ordinal answer against this question's options.
    pub fn validate_answer(&self, ordinal: usize) -> Result<usize, ValidationError> {
        if ordinal < self.options.len() {
            Ok(ordinal)
        } else {
            Err(ValidationError::out_of_range(
                self.id,
                0.0,
                (self.options.len() - 1) as f64,
                ordinal as f64,
            ))
        }
    }
}

/// The questions, in the order they are asked.
pub const QUESTIONS: [Question; 4] = [
    Question {
        id: "data",
        title: "Data Availability",
        prompt: "How much labeled training data do you have?",
        options: &["None", "Limited (<1K)", "Moderate (1K-10K)", "Abundant (>10K)"],
    },
    Question {
        id: "pattern",
        title: "Pattern Complexity",
        prompt: "How complex are the patterns in your problem?",
        options: &["Simple Rules", "Multi-factor", "Non-linear", "Unknown"],
    },
    Question {
        id: "interpret",
        title: "Interpretability Needs",
        prompt: "How important is explainability?",
        options: &["Critical", "Helpful", "Not Important"],
    },
    Question {
        id: "budget",
        title: "Budget Constraint",
        prompt: "What is your budget range?",
        options: &["Low (<$10K)", "Medium ($10K-$100K)", "High (>$100K)"],
    },
];

/// Number of questions in a complete answer set.
pub const QUESTION_COUNT: usize = QUESTIONS.len();

/// How much labeled training data is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataAvailability {
    None,
    Limited,
    Moderate,
    Abundant,
}

impl DataAvailability {
    pub fn from_ordinal(ordinal: usize) -> Result<Self, ValidationError> {
        match QUESTIONS[0].validate_answer(ordinal)? {
            0 => Ok(Self::None),
            1 => Ok(Self::Limited),
            2 => Ok(Self::Moderate),
            _ => Ok(Self::Abundant),
        }
    }
}

/// How complex the patterns in the problem are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternComplexity {
    Simple,
    MultiFactor,
    NonLinear,
    Unknown,
}

impl PatternComplexity {
    pub fn from_ordinal(ordinal: usize) -> Result<Self, ValidationError> {
        match QUESTIONS[1].validate_answer(ordinal)? {
            0 => Ok(Self::Simple),
            1 => Ok(Self::MultiFactor),
            2 => Ok(Self::NonLinear),
            _ => Ok(Self::Unknown),
        }
    }
}

/// How important explainability is. Ordered from most to least important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpretability {
    Critical,
    Helpful,
    NotImportant,
}

impl Interpretability {
    pub fn from_ordinal(ordinal: usize) -> Result<Self, ValidationError> {
        match QUESTIONS[2].validate_answer(ordinal)? {
            0 => Ok(Self::Critical),
            1 => Ok(Self::Helpful),
            _ => Ok(Self::NotImportant),
        }
    }
}

/// Available budget, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Budget {
    Low,
    Medium,
    High,
}

impl Budget {
    pub fn from_ordinal(ordinal: usize) -> Result<Self, ValidationError> {
        match QUESTIONS[3].validate_answer(ordinal)? {
            0 => Ok(Self::Low),
            1 => Ok(Self::Medium),
            _ => Ok(Self::High),
        }
    }
}

/// A complete, validated answer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnswerProfile {
    pub data: DataAvailability,
    pub pattern: PatternComplexity,
    pub interpret: Interpretability,
    pub budget: Budget,
}

impl AnswerProfile {
    /// Builds a profile from exactly one ordinal per question, in question order.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the slice length differs from the question count
    ///   or any ordinal is outside its question's options
    pub fn from_answers(answers: &[usize]) -> Result<Self, DomainError> {
        let [data, pattern, interpret, budget] = answers else {
            return Err(DomainError::invalid_input(
                "answers",
                format!(
                    "Expected {} answers, got {}",
                    QUESTION_COUNT,
                    answers.len()
                ),
            ));
        };

        Ok(Self {
            data: DataAvailability::from_ordinal(*data)?,
            pattern: PatternComplexity::from_ordinal(*pattern)?,
            interpret: Interpretability::from_ordinal(*interpret)?,
            budget: Budget::from_ordinal(*budget)?,
        })
    }
}
