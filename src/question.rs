use std::collections::HashSet;
use std::fmt;

/// A single multiple-choice quiz question.
///
/// Supplied externally (question bank JSON or the built-in demo set) and
/// never mutated; sessions work on shuffled copies.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Question {
    /// Prompt text shown to the user.
    pub text: String,
    /// Answer options in their authored order.
    pub options: Vec<String>,
    /// The correct option. Must equal exactly one element of `options`.
    pub correct_answer: String,
    /// Shown on the review screen when non-empty.
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QuestionError {
    #[error("needs at least 2 options but has {found}")]
    TooFewOptions { found: usize },
    #[error("correct answer {answer:?} is not one of the options")]
    UnknownCorrectAnswer { answer: String },
    #[error("option {option:?} appears more than once")]
    DuplicateOption { option: String },
}

impl Question {
    /// Checks the invariants a scoreable question must satisfy.
    ///
    /// # Errors
    /// * [`QuestionError::TooFewOptions`] with fewer than two options.
    /// * [`QuestionError::UnknownCorrectAnswer`] if `correct_answer` does not
    ///   match any option, which would make the question impossible to score
    ///   as correct.
    /// * [`QuestionError::DuplicateOption`] if an option text repeats.
    pub fn validate(&self) -> Result<(), QuestionError> {
        if self.options.len() < 2 {
            return Err(QuestionError::TooFewOptions {
                found: self.options.len(),
            });
        }

        let mut seen = HashSet::new();
        for option in &self.options {
            if !seen.insert(option) {
                return Err(QuestionError::DuplicateOption {
                    option: option.clone(),
                });
            }
        }

        if !self.options.contains(&self.correct_answer) {
            return Err(QuestionError::UnknownCorrectAnswer {
                answer: self.correct_answer.clone(),
            });
        }

        Ok(())
    }

    /// Whether `answer` is the correct option, by exact string equality.
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} options)", self.text, self.options.len())
    }
}
