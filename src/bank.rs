use std::fs;
use std::path::Path;

use crate::question::{Question, QuestionError};

/// A validated set of questions, the only way question data enters a
/// session. Construction fails fast: a bank with no questions, or any
/// question whose correct answer is absent from its options, is rejected
/// instead of silently scoring as always-wrong later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BankError {
    #[error("question bank contains no questions")]
    NoQuestions,
    #[error("question {index} is invalid: {source}")]
    InvalidQuestion {
        index: usize,
        source: QuestionError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum BankLoadError {
    #[error("failed to read question bank at {path}: {source}")]
    ReadError {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse question bank: {source}")]
    ParseError {
        #[from]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Invalid(#[from] BankError),
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct BankFile {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Validates and wraps a question list.
    ///
    /// # Errors
    /// * [`BankError::NoQuestions`] for an empty list.
    /// * [`BankError::InvalidQuestion`] naming the first offending index.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::NoQuestions);
        }

        for (index, question) in questions.iter().enumerate() {
            question
                .validate()
                .map_err(|source| BankError::InvalidQuestion { index, source })?;
        }

        Ok(Self { questions })
    }

    /// Parses a `{"questions": [...]}` JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, BankLoadError> {
        let parsed: BankFile = serde_json::from_str(json)?;
        Ok(Self::new(parsed.questions)?)
    }

    /// Reads and parses a question bank file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BankLoadError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| BankLoadError::ReadError {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json_str(&data)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
