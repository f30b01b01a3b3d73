use std::cell::Cell;
use std::rc::Rc;

use tracing::info;

use crate::data::{QuestionRepository, QuizBank};
use crate::engine::{Outcome, QuizEngine, QuizSession, QuizStatus, Rejection};
use crate::models::{QuestionStats, NUM_OPTIONS};

/// Couples a quiz engine with the repository it draws questions from.
pub struct App<R = QuizBank> {
    engine: QuizEngine,
    repository: R,
    highlighted: usize,
    redraw: Rc<Cell<bool>>,
}

impl<R: QuestionRepository> App<R> {
    pub fn new(repository: R) -> Self {
        let mut engine = QuizEngine::new();
        let redraw = Rc::new(Cell::new(true));
        let flag = Rc::clone(&redraw);
        engine.subscribe(move |_| flag.set(true));
        engine.subscribe(|session: &QuizSession| {
            if session.is_finished() {
                info!(
                    correct = session.correct_count(),
                    total = session.total_questions(),
                    "quiz finished"
                );
            }
        });

        Self {
            engine,
            repository,
            highlighted: 0,
            redraw,
        }
    }

    pub fn session(&self) -> &QuizSession {
        self.engine.session()
    }

    pub fn status(&self) -> QuizStatus {
        self.engine.status()
    }

    /// Size of the question set a new run would use.
    pub fn available_questions(&self) -> usize {
        self.repository.list_questions().len()
    }

    /// Option index under the keyboard cursor.
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Statistics for the question on screen.
    pub fn current_stats(&self) -> Option<&QuestionStats> {
        let question = self.session().current_question()?;
        self.repository.get_stats(&question.id)
    }

    /// Whether anything changed since the last call.
    pub fn take_redraw(&self) -> bool {
        self.redraw.replace(false)
    }

    pub fn start_quiz(&mut self) -> Outcome {
        let questions = self.repository.list_questions().to_vec();
        info!(count = questions.len(), "starting quiz");
        self.highlighted = 0;
        self.engine.start(questions)
    }

    pub fn highlight_next(&mut self) {
        if self.status() == QuizStatus::InProgress {
            self.highlighted = (self.highlighted + 1) % NUM_OPTIONS;
            self.redraw.set(true);
        }
    }

    pub fn highlight_previous(&mut self) {
        if self.status() == QuizStatus::InProgress {
            self.highlighted = (self.highlighted + NUM_OPTIONS - 1) % NUM_OPTIONS;
            self.redraw.set(true);
        }
    }

    pub fn select_highlighted(&mut self) -> Outcome {
        self.select_index(self.highlighted)
    }

    /// Tentatively pick the option at `index` of the current question.
    pub fn select_index(&mut self, index: usize) -> Outcome {
        let Some(option_id) = self
            .session()
            .current_question()
            .and_then(|question| question.options.get(index))
            .map(|option| option.id.clone())
        else {
            // No question on screen, or no option at that position.
            return Outcome::Ignored(Rejection::NotInProgress);
        };

        let outcome = self.engine.select_option(option_id);
        if outcome.is_applied() {
            self.highlighted = index;
        }
        outcome
    }

    pub fn confirm(&mut self) -> Outcome {
        self.engine.confirm_selection()
    }

    pub fn next_question(&mut self) -> Outcome {
        let outcome = self.engine.next();
        if outcome.is_applied() {
            self.highlighted = 0;
        }
        outcome
    }

    /// Drop all progress and go back to the welcome screen.
    pub fn restart(&mut self) -> Outcome {
        self.highlighted = 0;
        self.engine.reset()
    }
}
