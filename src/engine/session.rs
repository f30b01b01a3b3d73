//! Quiz session state owned by the engine.

use serde::{Deserialize, Serialize};

use crate::models::Question;

/// Where the session is in the quiz flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizStatus {
    /// No questions loaded.
    #[default]
    Idle,
    /// A question is shown and awaits confirmation.
    InProgress,
    /// The current question was confirmed and its correctness revealed.
    Answered,
    /// Every question has been answered.
    Finished,
}

/// Progression state of a single quiz run.
///
/// Only [`QuizEngine`](super::QuizEngine) mutates a session; everyone else
/// reads it through the accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    pub(super) status: QuizStatus,
    pub(super) questions: Vec<Question>,
    pub(super) current_index: usize,
    pub(super) selected_option_id: Option<String>,
    pub(super) is_correct: Option<bool>,
    pub(super) answered_count: usize,
    pub(super) correct_count: usize,
}

impl QuizSession {
    pub fn status(&self) -> QuizStatus {
        self.status
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn selected_option_id(&self) -> Option<&str> {
        self.selected_option_id.as_deref()
    }

    /// Correctness of the confirmed answer. `None` unless answered.
    pub fn is_correct(&self) -> Option<bool> {
        self.is_correct
    }

    pub fn answered_count(&self) -> usize {
        self.answered_count
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    /// The question on screen, if any.
    pub fn current_question(&self) -> Option<&Question> {
        match self.status {
            QuizStatus::InProgress | QuizStatus::Answered => {
                self.questions.get(self.current_index)
            }
            QuizStatus::Idle | QuizStatus::Finished => None,
        }
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// 1-based position for display.
    pub fn question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn is_finished(&self) -> bool {
        self.status == QuizStatus::Finished
    }

    /// Share of all questions answered correctly, rounded to a whole percent.
    pub fn accuracy_percent(&self) -> u32 {
        let total = self.total_questions();
        if total == 0 {
            return 0;
        }
        ((self.correct_count as f64 / total as f64) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{QuestionRepository, QuizBank};

    #[test]
    fn test_default_is_idle_and_empty() {
        let session = QuizSession::default();
        assert_eq!(session.status(), QuizStatus::Idle);
        assert!(session.questions().is_empty());
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.selected_option_id(), None);
        assert_eq!(session.is_correct(), None);
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.correct_count(), 0);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn test_accuracy_percent_rounds() {
        let mut session = QuizSession::default();
        assert_eq!(session.accuracy_percent(), 0);

        session.questions = QuizBank::builtin().list_questions().to_vec();
        session.correct_count = 2;
        assert_eq!(session.accuracy_percent(), 40);

        session.questions.truncate(3);
        assert_eq!(session.accuracy_percent(), 67);
    }

    #[test]
    fn test_status_serde_uses_snake_case() {
        let json = serde_json::to_string(&QuizStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");

        let parsed: QuizStatus = serde_json::from_str("\"finished\"").unwrap();
        assert_eq!(parsed, QuizStatus::Finished);
        assert!(serde_json::from_str::<QuizStatus>("\"InProgress\"").is_err());
    }
}
