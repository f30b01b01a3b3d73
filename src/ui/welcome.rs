//! Landing screen shown while no quiz is loaded: what to expect and the key map.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

const KEY_MAP: [(&str, &str); 6] = [
    ("enter", "start the quiz / confirm / next"),
    ("j/k", "move the cursor"),
    ("space", "pick the option under the cursor"),
    ("a-d, 1-4", "pick an option directly"),
    ("n", "next question once answered"),
    ("q, esc", "quit"),
];

const KEY_COLUMN: usize = 10;

pub fn render(frame: &mut Frame, area: Rect, question_count: usize) {
    let height = KEY_MAP.len() as u16 + 7;
    let [_, card, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, card, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(60),
        Constraint::Fill(1),
    ])
    .areas(card);

    let mut lines = vec![
        Line::from(format!(
            "{} multiple-choice questions, one pick each.",
            question_count
        )),
        Line::from("Vote stats appear after each answer.".fg(Color::DarkGray)),
        Line::from(""),
    ];
    lines.extend(KEY_MAP.iter().map(|(keys, action)| {
        Line::from(vec![
            Span::styled(
                format!("{:>width$}  ", keys, width = KEY_COLUMN),
                Style::default().fg(Color::Green).bold(),
            ),
            Span::raw(*action),
        ])
    }));

    let block = Block::default()
        .title(Line::from(" SPORTS QUIZ ".cyan().bold()).centered())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Color::DarkGray)
        .padding(Padding::new(2, 2, 1, 0));

    frame.render_widget(Paragraph::new(lines).block(block), card);
}
