use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::{difficulty_color, score_color, truncate};
use crate::models::Difficulty;
use crate::report::{Accuracy, TARGET_PERCENTAGE};
use crate::tui::App;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let Some(result) = app.result.as_ref() else {
        let msg = Paragraph::new("No results yet")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Results "));
        f.render_widget(msg, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),      // Score
            Constraint::Percentage(45), // Charts
            Constraint::Min(0),         // Per-question detail
        ])
        .split(area);

    // Score
    let pct = result.percentage();
    let secs = result.total_elapsed().as_secs();
    let mut score_lines = vec![
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}/{} ({:.1}%)", result.score, result.total, pct),
                Style::default()
                    .fg(score_color(pct))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "   time {}:{:02}, avg {}s per question",
                    secs / 60,
                    secs % 60,
                    result.average_elapsed().as_secs()
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(
            result.grade().message(),
            Style::default().fg(Color::White),
        )),
    ];
    let mut mix = vec![Span::styled("Mix: ", Style::default().fg(Color::Gray))];
    for (d, n) in result.difficulty_distribution() {
        mix.push(Span::styled(
            format!("{} {}  ", d.label(), n),
            Style::default().fg(difficulty_color(d)),
        ));
    }
    score_lines.push(Line::from(mix));
    if app.timed_out {
        score_lines.push(Line::from(Span::styled(
            "Time ran out before you finished.",
            Style::default().fg(Color::Red),
        )));
    }
    let score_block = Block::default()
        .borders(Borders::ALL)
        .title(" Results ")
        .title_style(Style::default().fg(Color::Cyan));
    f.render_widget(Paragraph::new(score_lines).block(score_block), chunks[0]);

    // Charts
    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(25),
            Constraint::Percentage(45),
        ])
        .split(chunks[1]);

    let by_difficulty: Vec<Bar> = result
        .accuracy_by_difficulty()
        .iter()
        .zip(Difficulty::ALL)
        .map(|(a, d)| accuracy_bar(a, &a.label, difficulty_color(d)))
        .collect();
    draw_chart(
        f,
        charts[0],
        &format!(" By difficulty (target {:.0}%) ", TARGET_PERCENTAGE),
        &by_difficulty,
        7,
    );

    let by_category: Vec<Bar> = result
        .accuracy_by_category()
        .iter()
        .map(|a| accuracy_bar(a, &truncate(&a.label, 6), score_color(a.percentage)))
        .collect();
    draw_chart(f, charts[1], " By category ", &by_category, 6);

    let cumulative: Vec<Bar> = result
        .cumulative_accuracy()
        .iter()
        .enumerate()
        .map(|(i, pct)| {
            Bar::default()
                .value(pct.round() as u64)
                .label(Line::from(format!("{}", i + 1)))
                .text_value(format!("{:.0}", pct))
                .style(Style::default().fg(score_color(*pct)))
        })
        .collect();
    draw_chart(f, charts[2], " Running accuracy ", &cumulative, 3);

    // Per-question detail with per-topic accuracy on the right
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[2]);

    let items: Vec<ListItem> = result
        .details
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let (mark, color) = if d.correct {
                ("+", Color::Green)
            } else {
                ("x", Color::Red)
            };
            let chosen = d.chosen.map_or("-", |c| c.upper());
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", mark), Style::default().fg(color)),
                Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("{:<48}", truncate(&d.prompt, 46)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!(" {} / {}", chosen, d.correct_answer.upper()),
                    Style::default().fg(color),
                ),
                Span::styled(
                    format!("  {}s", d.elapsed.as_secs()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Answers (yours / correct) ")
            .title_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(list, bottom[0]);

    let topics: Vec<ListItem> = result
        .accuracy_by_topic()
        .iter()
        .map(|a| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<20}", truncate(&a.label, 19)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{}/{} ", a.correct, a.answered),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{:.0}%", a.percentage),
                    Style::default().fg(score_color(a.percentage)),
                ),
            ]))
        })
        .collect();
    let topic_list = List::new(topics).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" By topic ")
            .title_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(topic_list, bottom[1]);
}

fn accuracy_bar<'a>(a: &Accuracy, label: &str, color: Color) -> Bar<'a> {
    Bar::default()
        .value(a.percentage.round() as u64)
        .label(Line::from(label.to_string()))
        .text_value(format!("{:.0}%", a.percentage))
        .style(Style::default().fg(color))
}

fn draw_chart(f: &mut Frame, area: Rect, title: &str, bars: &[Bar], width: u16) {
    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_style(Style::default().fg(Color::Cyan)),
        )
        .data(BarGroup::default().bars(bars))
        .bar_width(width)
        .bar_gap(1)
        .max(100);
    f.render_widget(chart, area);
}
