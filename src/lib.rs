//! # sports-quiz
//!
//! A terminal multiple-choice quiz with per-option vote statistics.
//!
//! The heart of the crate is [`QuizEngine`], a small state machine that can be
//! driven without any terminal at all:
//!
//! ```rust
//! use sports_quiz::{QuestionRepository, QuizBank, QuizEngine, QuizStatus};
//!
//! let bank = QuizBank::builtin();
//! let mut engine = QuizEngine::new();
//! engine.start(bank.list_questions().to_vec());
//! engine.select_option("a");
//! engine.confirm_selection();
//! assert_eq!(engine.status(), QuizStatus::Answered);
//! assert_eq!(engine.session().is_correct(), Some(true));
//! ```
//!
//! [`Quiz`] wraps the engine in a ratatui interface:
//!
//! ```rust,no_run
//! use sports_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     Quiz::builtin().run()
//! }
//! ```

mod app;
mod data;
mod engine;
pub mod logging;
mod models;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;
use tracing::debug;

pub use app::App;
pub use data::{
    load_questions_from_json, load_stats_from_json, LoadError, QuestionRepository, QuizBank,
};
pub use engine::{Outcome, QuizEngine, QuizSession, QuizStatus, Rejection, SubscriptionId};
pub use models::{OptionStats, Question, QuestionError, QuestionStats, QuizOption, NUM_OPTIONS};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),
    #[error("Failed to install logger: {0}")]
    LogInit(#[from] tracing_subscriber::util::TryInitError),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    pub fn new(bank: QuizBank) -> Self {
        Self {
            app: App::new(bank),
        }
    }

    /// The bundled sports questions.
    pub fn builtin() -> Self {
        Self::new(QuizBank::builtin())
    }

    /// Load a quiz from a questions file and an optional stats file.
    ///
    /// ```rust,no_run
    /// use sports_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("assets/questions.json", None).expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(
        questions_path: P,
        stats_path: Option<&Path>,
    ) -> Result<Self, QuizError> {
        let bank = QuizBank::from_json(questions_path, stats_path)?;
        Ok(Self::new(bank))
    }

    /// Run the quiz in the terminal until the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut guard = terminal::TerminalGuard::enter()?;
        run_event_loop(guard.terminal(), &mut self.app)
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        if app.take_redraw() {
            terminal.draw(|frame| ui::render(frame, app))?;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if handle_input(app, key.code) {
                    break;
                }
            }
            Event::Resize(..) => {
                terminal.draw(|frame| ui::render(frame, app))?;
            }
            _ => {}
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input<R: QuestionRepository>(app: &mut App<R>, key: KeyCode) -> bool {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
        return true;
    }

    let outcome = match app.status() {
        QuizStatus::Idle => handle_welcome_input(app, key),
        QuizStatus::InProgress => handle_question_input(app, key),
        QuizStatus::Answered => handle_answered_input(app, key),
        QuizStatus::Finished => handle_summary_input(app, key),
    };
    if let Some(Outcome::Ignored(reason)) = outcome {
        debug!(?key, ?reason, "key had no effect");
    }
    false
}

fn handle_welcome_input<R: QuestionRepository>(app: &mut App<R>, key: KeyCode) -> Option<Outcome> {
    match key {
        KeyCode::Enter => Some(app.start_quiz()),
        _ => None,
    }
}

fn handle_question_input<R: QuestionRepository>(
    app: &mut App<R>,
    key: KeyCode,
) -> Option<Outcome> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.highlight_previous();
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.highlight_next();
            None
        }
        KeyCode::Char(' ') => Some(app.select_highlighted()),
        KeyCode::Char(c @ 'a'..='d') => Some(app.select_index(c as usize - 'a' as usize)),
        KeyCode::Char(c @ '1'..='4') => Some(app.select_index(c as usize - '1' as usize)),
        KeyCode::Enter => Some(app.confirm()),
        _ => None,
    }
}

fn handle_answered_input<R: QuestionRepository>(
    app: &mut App<R>,
    key: KeyCode,
) -> Option<Outcome> {
    match key {
        KeyCode::Enter | KeyCode::Char('n') => Some(app.next_question()),
        _ => None,
    }
}

fn handle_summary_input<R: QuestionRepository>(app: &mut App<R>, key: KeyCode) -> Option<Outcome> {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(app.restart()),
        _ => None,
    }
}
