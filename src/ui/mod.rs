mod question;
mod summary;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::data::QuestionRepository;
use crate::engine::QuizStatus;

pub fn render<R: QuestionRepository>(frame: &mut Frame, app: &App<R>) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.status() {
        QuizStatus::Idle => welcome::render(frame, area, app.available_questions()),
        QuizStatus::InProgress | QuizStatus::Answered => question::render(frame, area, app),
        QuizStatus::Finished => summary::render(frame, area, app.session()),
    }
}
