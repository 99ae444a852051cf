use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use super::widgets::{home, quiz, results, setup, stats};
use super::{App, View};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Help bar
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);
    draw_content(f, app, chunks[1]);
    draw_status(f, app, chunks[2]);
    draw_help_bar(f, app, chunks[3]);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let tab_titles = vec!["Home", "Setup", "Quiz", "Results", "Stats"];
    let selected = match app.view {
        View::Home => 0,
        View::Setup => 1,
        View::Quiz => 2,
        View::Results => 3,
        View::Stats => 4,
    };

    let tabs = Tabs::new(tab_titles)
        .block(Block::default().borders(Borders::ALL).title(" EconQuiz "))
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(tabs, area);
}

fn draw_content(f: &mut Frame, app: &App, area: Rect) {
    match app.view {
        View::Home => home::draw(f, app, area),
        View::Setup => setup::draw(f, app, area),
        View::Quiz => quiz::draw(f, app, area),
        View::Results => results::draw(f, app, area),
        View::Stats => stats::draw(f, app, area),
    }
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status {
        Some(msg) => Line::from(Span::styled(
            format!(" {}", msg),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(""),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn key(k: &'static str) -> Span<'static> {
    Span::styled(k, Style::default().fg(Color::Cyan))
}

fn draw_help_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();

    match app.view {
        View::Home => {
            spans.extend(vec![
                key("<CR>/s"),
                Span::raw(" Start  "),
                key("t"),
                Span::raw(" Stats  "),
            ]);
        }
        View::Setup => {
            spans.extend(vec![
                key("j/k"),
                Span::raw(" Nav  "),
                key("h/l"),
                Span::raw(" Column  "),
                key("<Space>"),
                Span::raw(" Toggle  "),
                key("d"),
                Span::raw(" Difficulty  "),
                key("<CR>"),
                Span::raw(" Start  "),
                key("<Esc>"),
                Span::raw(" Back  "),
            ]);
        }
        View::Quiz => {
            spans.extend(vec![
                key("a-d/1-4"),
                Span::raw(" Answer  "),
                key("h/l"),
                Span::raw(" Prev/Next  "),
                key("f"),
                Span::raw(" Finish  "),
            ]);
        }
        View::Results => {
            spans.extend(vec![
                key("r"),
                Span::raw(" New quiz  "),
                key("s"),
                Span::raw(" Stats  "),
            ]);
        }
        View::Stats => {
            spans.extend(vec![key("h/<Esc>"), Span::raw(" Back  ")]);
        }
    }

    spans.extend(vec![key("q"), Span::raw(" Quit")]);

    let help = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));

    f.render_widget(help, area);
}
