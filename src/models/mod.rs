mod question;
mod stats;

pub use question::{Question, QuestionError, QuizOption, NUM_OPTIONS};
pub use stats::{OptionStats, QuestionStats};
