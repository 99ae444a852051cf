use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use super::difficulty_color;
use crate::tui::App;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let total = app.total_questions();
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Total questions: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", total),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];
    for s in &app.stats {
        let share = if total > 0 {
            s.count as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<8}", s.difficulty.label()),
                Style::default().fg(difficulty_color(s.difficulty)),
            ),
            Span::styled(format!("{:>4}", s.count), Style::default().fg(Color::White)),
            Span::styled(format!("  {:.0}%", share), Style::default().fg(Color::DarkGray)),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Question Bank Statistics ")
        .title_style(Style::default().fg(Color::Cyan));
    f.render_widget(Paragraph::new(lines).block(block), chunks[0]);

    let bars: Vec<Bar> = app
        .stats
        .iter()
        .map(|s| {
            Bar::default()
                .value(s.count.max(0) as u64)
                .label(Line::from(s.difficulty.label()))
                .style(Style::default().fg(difficulty_color(s.difficulty)))
        })
        .collect();
    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" By difficulty ")
                .title_style(Style::default().fg(Color::Cyan)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(8)
        .bar_gap(2);
    f.render_widget(chart, chunks[1]);
}
