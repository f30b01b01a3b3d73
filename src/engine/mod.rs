//! Quiz progression engine.
//!
//! A small state machine over [`QuizSession`]:
//!
//! ```text
//! Idle --start--> InProgress --confirm--> Answered --next--> InProgress
//!                                              \--next (last)--> Finished
//! any --reset--> Idle
//! ```
//!
//! Actions that do not apply in the current state are ignored: they return
//! [`Outcome::Ignored`], leave the session untouched and notify nobody.

mod session;

use tracing::{debug, trace};

use crate::models::Question;

pub use session::{QuizSession, QuizStatus};

/// Result of dispatching an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The session changed.
    Applied,
    /// The action was not valid in the current state.
    Ignored(Rejection),
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Why an action was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// `start` was given no questions.
    EmptyQuestionSet,
    /// Only valid while a question awaits confirmation.
    NotInProgress,
    /// Confirm needs a tentative selection.
    NoSelection,
    /// Advancing needs a confirmed answer.
    NotAnswered,
}

/// Handle returned by [`QuizEngine::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&QuizSession)>;

/// Owns one quiz session and the listeners interested in it.
#[derive(Default)]
pub struct QuizEngine {
    session: QuizSession,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl QuizEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state, for rendering.
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn status(&self) -> QuizStatus {
        self.session.status
    }

    /// Register a listener called after every applied action.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&QuizSession) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Begin a new run over `questions`, discarding any prior progress.
    pub fn start(&mut self, questions: Vec<Question>) -> Outcome {
        if questions.is_empty() {
            return self.ignore("start", Rejection::EmptyQuestionSet);
        }

        self.session = QuizSession {
            status: QuizStatus::InProgress,
            questions,
            ..QuizSession::default()
        };
        self.applied("start")
    }

    /// Record a tentative choice. Last write wins.
    pub fn select_option(&mut self, option_id: impl Into<String>) -> Outcome {
        if self.session.status != QuizStatus::InProgress {
            return self.ignore("select_option", Rejection::NotInProgress);
        }

        self.session.selected_option_id = Some(option_id.into());
        self.session.is_correct = None;
        self.applied("select_option")
    }

    /// Score the tentative choice against the current question.
    pub fn confirm_selection(&mut self) -> Outcome {
        if self.session.status != QuizStatus::InProgress {
            return self.ignore("confirm_selection", Rejection::NotInProgress);
        }
        // An empty id counts as no selection.
        let Some(selected) = self
            .session
            .selected_option_id
            .as_deref()
            .filter(|id| !id.is_empty())
        else {
            return self.ignore("confirm_selection", Rejection::NoSelection);
        };
        let Some(question) = self.session.questions.get(self.session.current_index) else {
            return self.ignore("confirm_selection", Rejection::NotInProgress);
        };

        let is_correct = selected == question.correct_option_id;
        self.session.status = QuizStatus::Answered;
        self.session.is_correct = Some(is_correct);
        self.session.answered_count += 1;
        if is_correct {
            self.session.correct_count += 1;
        }
        self.applied("confirm_selection")
    }

    /// Move past an answered question, finishing after the last one.
    pub fn next(&mut self) -> Outcome {
        if self.session.status != QuizStatus::Answered {
            return self.ignore("next", Rejection::NotAnswered);
        }

        let next_index = self.session.current_index + 1;
        self.session.selected_option_id = None;
        self.session.is_correct = None;
        if next_index < self.session.questions.len() {
            self.session.current_index = next_index;
            self.session.status = QuizStatus::InProgress;
        } else {
            self.session.status = QuizStatus::Finished;
        }
        self.applied("next")
    }

    /// Return to the initial empty session from any state.
    pub fn reset(&mut self) -> Outcome {
        self.session = QuizSession::default();
        self.applied("reset")
    }

    fn applied(&mut self, action: &'static str) -> Outcome {
        debug!(
            action,
            status = ?self.session.status,
            index = self.session.current_index,
            answered = self.session.answered_count,
            correct = self.session.correct_count,
            "quiz transition"
        );
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.session);
        }
        Outcome::Applied
    }

    fn ignore(&self, action: &'static str, reason: Rejection) -> Outcome {
        trace!(action, ?reason, status = ?self.session.status, "quiz action ignored");
        Outcome::Ignored(reason)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::models::QuizOption;

    fn question(id: &str, correct: &str) -> Question {
        Question::new(
            id,
            format!("Question {}", id),
            [
                QuizOption::new("a", "A"),
                QuizOption::new("b", "B"),
                QuizOption::new("c", "C"),
                QuizOption::new("d", "D"),
            ],
            correct,
        )
    }

    fn two_questions() -> Vec<Question> {
        vec![question("q1", "a"), question("q2", "b")]
    }

    fn started() -> QuizEngine {
        let mut engine = QuizEngine::new();
        engine.start(two_questions());
        engine
    }

    #[test]
    fn test_start_initializes_session() {
        let engine = started();
        let session = engine.session();
        assert_eq!(session.status(), QuizStatus::InProgress);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.correct_count(), 0);
        assert_eq!(session.selected_option_id(), None);
        assert_eq!(session.is_correct(), None);
        assert_eq!(session.current_question().map(|q| q.id.as_str()), Some("q1"));
    }

    #[test]
    fn test_start_restarts_mid_quiz() {
        let mut engine = started();
        engine.select_option("a");
        engine.confirm_selection();
        engine.next();

        assert!(engine.start(two_questions()).is_applied());
        let session = engine.session();
        assert_eq!(session.status(), QuizStatus::InProgress);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.correct_count(), 0);
    }

    #[test]
    fn test_start_with_no_questions_is_ignored() {
        let mut engine = QuizEngine::new();
        assert_eq!(
            engine.start(Vec::new()),
            Outcome::Ignored(Rejection::EmptyQuestionSet)
        );
        assert_eq!(engine.session(), &QuizSession::default());
    }

    #[test]
    fn test_select_option_last_write_wins() {
        let mut engine = started();
        engine.select_option("a");
        engine.select_option("c");
        assert_eq!(engine.session().selected_option_id(), Some("c"));
        assert_eq!(engine.session().answered_count(), 0);
        assert_eq!(engine.session().correct_count(), 0);
        assert_eq!(engine.status(), QuizStatus::InProgress);
    }

    #[test]
    fn test_select_option_ignored_outside_in_progress() {
        let mut engine = QuizEngine::new();
        assert_eq!(
            engine.select_option("a"),
            Outcome::Ignored(Rejection::NotInProgress)
        );
        assert_eq!(engine.session(), &QuizSession::default());

        let mut engine = started();
        engine.select_option("a");
        engine.confirm_selection();
        let before = engine.session().clone();
        assert_eq!(
            engine.select_option("b"),
            Outcome::Ignored(Rejection::NotInProgress)
        );
        assert_eq!(engine.session(), &before);
    }

    #[test]
    fn test_confirm_without_selection_is_ignored() {
        let mut engine = started();
        let before = engine.session().clone();
        assert_eq!(
            engine.confirm_selection(),
            Outcome::Ignored(Rejection::NoSelection)
        );
        assert_eq!(engine.session(), &before);
        assert_eq!(engine.status(), QuizStatus::InProgress);
    }

    #[test]
    fn test_confirm_with_empty_selection_is_ignored() {
        let mut engine = started();
        assert!(engine.select_option("").is_applied());
        let before = engine.session().clone();
        assert_eq!(
            engine.confirm_selection(),
            Outcome::Ignored(Rejection::NoSelection)
        );
        assert_eq!(engine.session(), &before);
        assert_eq!(engine.status(), QuizStatus::InProgress);
        assert_eq!(engine.session().answered_count(), 0);
    }

    #[test]
    fn test_confirm_scores_once() {
        let mut engine = started();
        engine.select_option("a");
        assert!(engine.confirm_selection().is_applied());
        let after_first = engine.session().clone();

        assert_eq!(
            engine.confirm_selection(),
            Outcome::Ignored(Rejection::NotInProgress)
        );
        assert_eq!(engine.session(), &after_first);
        assert_eq!(after_first.status(), QuizStatus::Answered);
        assert_eq!(after_first.is_correct(), Some(true));
        assert_eq!(after_first.answered_count(), 1);
        assert_eq!(after_first.correct_count(), 1);
    }

    #[test]
    fn test_confirm_wrong_answer() {
        let mut engine = started();
        engine.select_option("d");
        engine.confirm_selection();
        assert_eq!(engine.session().is_correct(), Some(false));
        assert_eq!(engine.session().answered_count(), 1);
        assert_eq!(engine.session().correct_count(), 0);
    }

    #[test]
    fn test_confirm_compares_exact_strings() {
        let mut engine = started();
        engine.select_option("A");
        engine.confirm_selection();
        assert_eq!(engine.session().is_correct(), Some(false));
    }

    #[test]
    fn test_next_advances_and_clears_selection() {
        let mut engine = started();
        engine.select_option("b");
        engine.confirm_selection();
        assert!(engine.next().is_applied());

        let session = engine.session();
        assert_eq!(session.status(), QuizStatus::InProgress);
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.selected_option_id(), None);
        assert_eq!(session.is_correct(), None);
    }

    #[test]
    fn test_next_requires_answer() {
        let mut engine = started();
        engine.select_option("a");
        let before = engine.session().clone();
        assert_eq!(engine.next(), Outcome::Ignored(Rejection::NotAnswered));
        assert_eq!(engine.session(), &before);

        let mut idle = QuizEngine::new();
        assert_eq!(idle.next(), Outcome::Ignored(Rejection::NotAnswered));
    }

    #[test]
    fn test_next_from_last_question_finishes() {
        let mut engine = QuizEngine::new();
        engine.start(vec![question("only", "c")]);
        engine.select_option("c");
        engine.confirm_selection();
        engine.next();

        let session = engine.session();
        assert_eq!(session.status(), QuizStatus::Finished);
        assert_eq!(session.selected_option_id(), None);
        assert_eq!(session.is_correct(), None);
        assert!(session.current_question().is_none());
        assert_eq!(engine.next(), Outcome::Ignored(Rejection::NotAnswered));
    }

    #[test]
    fn test_reset_from_every_state() {
        let mut engine = QuizEngine::new();
        engine.reset();
        assert_eq!(engine.session(), &QuizSession::default());

        let mut engine = started();
        engine.select_option("a");
        engine.reset();
        assert_eq!(engine.session(), &QuizSession::default());

        let mut engine = started();
        engine.select_option("a");
        engine.confirm_selection();
        engine.reset();
        assert_eq!(engine.session(), &QuizSession::default());

        let mut engine = QuizEngine::new();
        engine.start(vec![question("only", "a")]);
        engine.select_option("a");
        engine.confirm_selection();
        engine.next();
        assert!(engine.session().is_finished());
        engine.reset();
        assert_eq!(engine.session(), &QuizSession::default());
    }

    #[test]
    fn test_two_question_walkthrough() {
        let mut engine = started();

        engine.select_option("a");
        engine.confirm_selection();
        assert_eq!(engine.status(), QuizStatus::Answered);
        assert_eq!(engine.session().is_correct(), Some(true));
        assert_eq!(engine.session().correct_count(), 1);

        engine.next();
        assert_eq!(engine.status(), QuizStatus::InProgress);
        assert_eq!(engine.session().current_index(), 1);

        engine.select_option("c");
        engine.confirm_selection();
        assert_eq!(engine.session().is_correct(), Some(false));
        assert_eq!(engine.session().correct_count(), 1);
        assert_eq!(engine.session().answered_count(), 2);

        engine.next();
        assert_eq!(engine.status(), QuizStatus::Finished);
        assert_eq!(engine.session().accuracy_percent(), 50);
    }

    #[test]
    fn test_listeners_fire_on_applied_actions_only() {
        let seen: Rc<RefCell<Vec<QuizStatus>>> = Rc::default();
        let mut engine = QuizEngine::new();
        let sink = Rc::clone(&seen);
        engine.subscribe(move |session| sink.borrow_mut().push(session.status()));

        engine.confirm_selection();
        engine.start(two_questions());
        engine.confirm_selection();
        engine.select_option("a");
        engine.confirm_selection();
        engine.confirm_selection();

        assert_eq!(
            *seen.borrow(),
            vec![
                QuizStatus::InProgress,
                QuizStatus::InProgress,
                QuizStatus::Answered,
            ]
        );
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let count = Rc::new(RefCell::new(0));
        let mut engine = QuizEngine::new();
        let counter = Rc::clone(&count);
        let id = engine.subscribe(move |_| *counter.borrow_mut() += 1);

        engine.start(two_questions());
        assert!(engine.unsubscribe(id));
        assert!(!engine.unsubscribe(id));
        engine.select_option("a");

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_engines_are_independent() {
        let mut first = started();
        let second = started();
        first.select_option("a");
        first.confirm_selection();

        assert_eq!(first.status(), QuizStatus::Answered);
        assert_eq!(second.status(), QuizStatus::InProgress);
    }
}
