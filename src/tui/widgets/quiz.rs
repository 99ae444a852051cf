use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use super::difficulty_color;
use crate::models::AnswerLabel;
use crate::tui::App;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let Some(session) = app.session.as_ref() else {
        let msg = Paragraph::new("No quiz in progress")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Quiz "));
        f.render_widget(msg, area);
        return;
    };
    let Some(question) = session.current() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress + timer
            Constraint::Min(5),    // Prompt
            Constraint::Length(10), // Options
            Constraint::Length(3), // Feedback
        ])
        .split(area);

    // Progress gauge on the left, countdown on the right
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(chunks[0]);

    let ratio = (session.position() + 1) as f64 / session.len() as f64;
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!(
            "Question {}/{}  ({} answered){}",
            session.position() + 1,
            session.len(),
            session.answered_count(),
            if session.is_last() { "  last question" } else { "" }
        ));
    f.render_widget(gauge, top[0]);

    let timer_color = if app.countdown.remaining() < 60 {
        Color::Red
    } else {
        Color::Green
    };
    let timer = Paragraph::new(Line::from(Span::styled(
        app.countdown.display(),
        Style::default()
            .fg(timer_color)
            .add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL).title(" Time "));
    f.render_widget(timer, top[1]);

    let prompt = vec![
        Line::from(vec![
            Span::styled(
                question.category.label(),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(" / "),
            Span::styled(question.topic.as_str(), Style::default().fg(Color::Cyan)),
            Span::raw("  "),
            Span::styled(
                question.difficulty.label(),
                Style::default().fg(difficulty_color(question.difficulty)),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            question.prompt.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    let spent = session
        .elapsed_at(session.position())
        .map_or(0, |d| d.as_secs());
    let prompt_title = if spent > 0 {
        format!(" Question {} (earlier visit {}s) ", session.position() + 1, spent)
    } else {
        format!(" Question {} ", session.position() + 1)
    };
    let prompt_block = Block::default()
        .borders(Borders::ALL)
        .title(prompt_title)
        .title_style(Style::default().fg(Color::Cyan));
    f.render_widget(
        Paragraph::new(prompt)
            .block(prompt_block)
            .wrap(Wrap { trim: true }),
        chunks[1],
    );

    let chosen = session.current_answer();
    let mut options = Vec::new();
    for label in AnswerLabel::ALL {
        let selected = chosen == Some(label);
        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        options.push(Line::from(vec![
            Span::styled(
                format!(" {}) ", label.upper()),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(question.option(label).to_string(), style),
        ]));
        options.push(Line::from(""));
    }
    let options_block = Block::default()
        .borders(Borders::ALL)
        .title(" Options ")
        .title_style(Style::default().fg(Color::Cyan));
    f.render_widget(
        Paragraph::new(options)
            .block(options_block)
            .wrap(Wrap { trim: false }),
        chunks[2],
    );

    let feedback = app.feedback.as_deref().unwrap_or("");
    let feedback_widget = Paragraph::new(Line::from(Span::styled(
        feedback,
        Style::default().fg(Color::Yellow),
    )))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(feedback_widget, chunks[3]);
}
