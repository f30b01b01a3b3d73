use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::data::QuestionRepository;
use crate::engine::QuizStatus;
use crate::models::{Question, QuestionStats};

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// What the option list needs to know about the session.
struct OptionsView<'a> {
    question: &'a Question,
    stats: Option<&'a QuestionStats>,
    selected: Option<&'a str>,
    highlighted: usize,
    answered: bool,
    is_correct: bool,
}

pub fn render<R: QuestionRepository>(frame: &mut Frame, area: Rect, app: &App<R>) {
    let session = app.session();
    let Some(question) = session.current_question() else {
        return;
    };
    let answered = session.status() == QuizStatus::Answered;

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], session.question_number(), session.total_questions());
    render_question_text(frame, chunks[1], &question.text);
    render_options(
        frame,
        chunks[2],
        &OptionsView {
            question,
            stats: app.current_stats(),
            selected: session.selected_option_id(),
            highlighted: app.highlighted(),
            answered,
            is_correct: session.is_correct() == Some(true),
        },
    );
    render_hint(frame, chunks[3], answered);
    render_controls(frame, chunks[4], answered);
}

fn render_progress(frame: &mut Frame, area: Rect, number: usize, total: usize) {
    let progress = format!("Question {} / {}", number, total.max(1));
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, view: &OptionsView) {
    let mut lines: Vec<Line> = Vec::with_capacity(view.question.options.len() * 2);

    for (index, option) in view.question.options.iter().enumerate() {
        let is_selected = view.selected == Some(option.id.as_str());
        let style = option_style(view, is_selected);
        let marker = if !view.answered && index == view.highlighted {
            ">"
        } else {
            " "
        };
        let checkbox = if is_selected { "(•)" } else { "( )" };

        let mut spans = vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{} ", checkbox), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.label.as_str(), style),
        ];

        if view.answered {
            if let Some(stats) = view.stats.and_then(|s| s.option(&option.id)) {
                spans.push(Span::styled(
                    format!("   {:>3}%", stats.percentage),
                    Style::default().fg(Color::White),
                ));
                spans.push(Span::styled(
                    format!("  {} votes", stats.votes),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            if is_selected {
                let icon = if view.is_correct { "  ✓" } else { "  ✗" };
                spans.push(Span::styled(icon, style));
            }
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn option_style(view: &OptionsView, is_selected: bool) -> Style {
    match (view.answered, is_selected) {
        (true, true) if view.is_correct => Style::default().fg(Color::Green).bold(),
        (true, true) => Style::default().fg(Color::Red).bold(),
        (true, false) => Style::default().fg(Color::DarkGray),
        (false, true) => Style::default().fg(Color::Cyan).bold(),
        (false, false) => Style::default().fg(Color::Gray),
    }
}

fn render_hint(frame: &mut Frame, area: Rect, answered: bool) {
    let hint = if answered {
        "Answer locked, go next."
    } else {
        "Pick an option, then confirm."
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::Gray);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, answered: bool) {
    let controls = if answered {
        "enter next  ·  q quit"
    } else {
        "j/k navigate  ·  space/a-d pick  ·  enter confirm  ·  q quit"
    };
    let widget = Paragraph::new(controls)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
