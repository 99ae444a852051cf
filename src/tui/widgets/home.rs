use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::difficulty_color;
use crate::models::Category;
use crate::tui::App;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(area);

    draw_welcome(f, app, chunks[0]);
    draw_bank(f, app, chunks[1]);
}

fn draw_welcome(f: &mut Frame, app: &App, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Economics & Finance Quiz",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Answer multiple-choice questions on microeconomics,"),
        Line::from("macroeconomics and finance against the clock."),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("<Enter>", Style::default().fg(Color::Yellow)),
            Span::raw(format!(" to set up a quiz ({} questions in the bank)", app.total_questions())),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Welcome ")
        .title_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn draw_bank(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        "Categories",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    ))];
    for category in Category::ALL {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(category.label(), Style::default().fg(Color::White)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Difficulty",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )));
    for s in &app.stats {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<8}", s.difficulty.label()),
                Style::default().fg(difficulty_color(s.difficulty)),
            ),
            Span::styled(format!("{}", s.count), Style::default().fg(Color::White)),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Question Bank ")
        .title_style(Style::default().fg(Color::Cyan));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
