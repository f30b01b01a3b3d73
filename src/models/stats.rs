use serde::{Deserialize, Serialize};

/// Vote breakdown for one option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionStats {
    pub option_id: String,
    pub percentage: u32,
    pub votes: u32,
}

/// Precomputed vote statistics for a question.
///
/// `percentage` is authored alongside `votes`, not derived from it, so the
/// two may disagree and percentages need not sum to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionStats {
    pub question_id: String,
    pub total_votes: u32,
    pub options: Vec<OptionStats>,
}

impl QuestionStats {
    pub fn option(&self, option_id: &str) -> Option<&OptionStats> {
        self.options.iter().find(|stats| stats.option_id == option_id)
    }
}
