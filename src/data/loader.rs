use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{info, warn};

use super::QuizBank;
use crate::models::{Question, QuestionError, QuestionStats};

/// Failure to build a question bank from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{} must contain at least one question", path.display())]
    Empty { path: PathBuf },

    #[error("question `{question_id}` is invalid: {source}")]
    InvalidQuestion {
        question_id: String,
        source: QuestionError,
    },

    #[error("question id `{0}` is used more than once")]
    DuplicateQuestionId(String),
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate a JSON array of questions.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();
    let questions: Vec<Question> = read_json(path)?;

    if questions.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    let mut seen = HashSet::new();
    for question in &questions {
        question
            .validate()
            .map_err(|source| LoadError::InvalidQuestion {
                question_id: question.id.clone(),
                source,
            })?;
        if !seen.insert(question.id.as_str()) {
            return Err(LoadError::DuplicateQuestionId(question.id.clone()));
        }
    }

    info!(path = %path.display(), count = questions.len(), "loaded questions");
    Ok(questions)
}

/// Load a JSON array of per-question vote statistics.
pub fn load_stats_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<QuestionStats>, LoadError> {
    let path = path.as_ref();
    let stats: Vec<QuestionStats> = read_json(path)?;
    info!(path = %path.display(), count = stats.len(), "loaded question stats");
    Ok(stats)
}

impl QuizBank {
    /// Build a bank from a questions file and an optional stats file.
    pub fn from_json<P: AsRef<Path>>(
        questions_path: P,
        stats_path: Option<&Path>,
    ) -> Result<Self, LoadError> {
        let questions = load_questions_from_json(questions_path)?;
        let stats = match stats_path {
            Some(path) => load_stats_from_json(path)?,
            None => Vec::new(),
        };

        for entry in &stats {
            if !questions.iter().any(|q| q.id == entry.question_id) {
                warn!(question_id = %entry.question_id, "stats refer to an unknown question");
            }
        }

        Ok(Self::new(questions, stats))
    }
}
