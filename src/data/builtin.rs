use crate::models::{OptionStats, Question, QuestionStats, QuizOption};

const OPTION_IDS: [&str; 4] = ["a", "b", "c", "d"];

fn question(id: &str, text: &str, labels: [&str; 4], correct: &str) -> Question {
    let options = [0, 1, 2, 3].map(|i| QuizOption::new(OPTION_IDS[i], labels[i]));
    Question::new(id, text, options, correct)
}

// (percentage, votes) per option, in option order.
fn question_stats(question_id: &str, total_votes: u32, figures: [(u32, u32); 4]) -> QuestionStats {
    QuestionStats {
        question_id: question_id.to_string(),
        total_votes,
        options: OPTION_IDS
            .iter()
            .zip(figures)
            .map(|(option_id, (percentage, votes))| OptionStats {
                option_id: option_id.to_string(),
                percentage,
                votes,
            })
            .collect(),
    }
}

pub fn questions() -> Vec<Question> {
    vec![
        question(
            "q1",
            "Which team won the 2022 FIFA World Cup?",
            ["Argentina", "France", "Croatia", "Brazil"],
            "a",
        ),
        question(
            "q2",
            "In basketball, how many points is a standard field goal worth (not a 3-pointer)?",
            ["1", "2", "3", "4"],
            "b",
        ),
        question(
            "q3",
            "In tennis, what is the term for a score of 40–40?",
            ["Tie", "Deuce", "Advantage", "Break point"],
            "b",
        ),
        question(
            "q4",
            "How many players are on the field for one team in a standard football (soccer) match?",
            ["9", "10", "11", "12"],
            "c",
        ),
        question(
            "q5",
            "In the NBA, how long is a regulation quarter?",
            ["10 minutes", "12 minutes", "15 minutes", "20 minutes"],
            "b",
        ),
    ]
}

pub fn stats() -> Vec<QuestionStats> {
    vec![
        question_stats("q1", 518, [(68, 352), (22, 114), (6, 31), (4, 21)]),
        question_stats("q2", 423, [(8, 34), (72, 304), (15, 63), (5, 22)]),
        question_stats("q3", 387, [(12, 46), (65, 252), (18, 70), (5, 19)]),
        question_stats("q4", 445, [(3, 13), (7, 31), (85, 378), (5, 23)]),
        question_stats("q5", 401, [(15, 60), (71, 285), (10, 40), (4, 16)]),
    ]
}
