//! Question and statistics sources.

mod builtin;
mod loader;

use std::collections::HashMap;

use crate::models::{Question, QuestionStats};

pub use loader::{load_questions_from_json, load_stats_from_json, LoadError};

/// Read-only supplier of questions and their vote statistics.
pub trait QuestionRepository {
    /// Every question, in the same order on every call.
    fn list_questions(&self) -> &[Question];

    fn get_stats(&self, question_id: &str) -> Option<&QuestionStats>;
}

/// In-memory question set with per-question statistics.
#[derive(Debug, Clone, Default)]
pub struct QuizBank {
    questions: Vec<Question>,
    stats: HashMap<String, QuestionStats>,
}

impl QuizBank {
    pub fn new(questions: Vec<Question>, stats: Vec<QuestionStats>) -> Self {
        let stats = stats
            .into_iter()
            .map(|entry| (entry.question_id.clone(), entry))
            .collect();
        Self { questions, stats }
    }

    /// The bundled sports questions and their mock vote figures.
    pub fn builtin() -> Self {
        Self::new(builtin::questions(), builtin::stats())
    }
}

impl QuestionRepository for QuizBank {
    fn list_questions(&self) -> &[Question] {
        &self.questions
    }

    fn get_stats(&self, question_id: &str) -> Option<&QuestionStats> {
        self.stats.get(question_id)
    }
}
