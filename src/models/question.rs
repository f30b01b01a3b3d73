use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NUM_OPTIONS: usize = 4;

/// One answer choice of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub label: String,
}

impl QuizOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: [QuizOption; NUM_OPTIONS],
    pub correct_option_id: String,
}

/// Authoring mistakes in a single question.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuestionError {
    #[error("option id `{0}` appears more than once")]
    DuplicateOptionId(String),
    #[error("correct option `{0}` is not one of the options")]
    CorrectOptionMissing(String),
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        options: [QuizOption; NUM_OPTIONS],
        correct_option_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            options,
            correct_option_id: correct_option_id.into(),
        }
    }

    /// Look up an option by id.
    pub fn option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.id == option_id)
    }

    /// Check that option ids are unique and the correct option exists.
    ///
    /// The engine scores by plain string equality and never calls this;
    /// loaders do.
    pub fn validate(&self) -> Result<(), QuestionError> {
        for (index, option) in self.options.iter().enumerate() {
            if self.options[..index].iter().any(|o| o.id == option.id) {
                return Err(QuestionError::DuplicateOptionId(option.id.clone()));
            }
        }

        if self.option(&self.correct_option_id).is_none() {
            return Err(QuestionError::CorrectOptionMissing(
                self.correct_option_id.clone(),
            ));
        }

        Ok(())
    }
}
