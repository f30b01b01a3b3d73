use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::engine::QuizSession;

pub fn render(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(11),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    let correct = session.correct_count();
    let total = session.total_questions();
    let percent = session.accuracy_percent();

    let content = vec![
        Line::from(""),
        Line::from("Quiz finished".fg(Color::DarkGray)),
        Line::from(Span::styled(
            "YOUR RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("You answered "),
            Span::styled(correct.to_string(), Style::default().bold()),
            Span::raw(" out of "),
            Span::styled(total.to_string(), Style::default().bold()),
            Span::raw(" questions correctly."),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Accuracy: "),
            Span::styled(
                format!("{}%", percent),
                Style::default().fg(grade_color(percent)).bold(),
            ),
        ]),
        Line::from(""),
        Line::from("Restart to try again with the same questions.".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    let controls = Paragraph::new("r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[3]);
}

fn grade_color(percent: u32) -> Color {
    match percent {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}
