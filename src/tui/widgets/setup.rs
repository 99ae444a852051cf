use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::{difficulty_color, truncate};
use crate::tui::{App, SetupFocus, Toggle};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(45),
            Constraint::Percentage(25),
        ])
        .split(area);

    let setup = &app.setup;

    let categories: Vec<ListItem> = setup
        .categories
        .items
        .iter()
        .map(|t| checkbox(t, t.value.label()))
        .collect();
    draw_column(
        f,
        chunks[0],
        " Categories ",
        categories,
        setup.categories.selected,
        setup.focus == SetupFocus::Categories,
    );

    let topics: Vec<ListItem> = setup
        .topics
        .items
        .iter()
        .map(|t| checkbox(t, &truncate(&t.value, 32)))
        .collect();
    let topics_title = format!(
        " Topics ({}/{}) ",
        setup.selected_topics().len(),
        setup.topics.items.len()
    );
    draw_column(
        f,
        chunks[1],
        &topics_title,
        topics,
        setup.topics.selected,
        setup.focus == SetupFocus::Topics,
    );

    let chosen = setup.selected_difficulty();
    let difficulty: Vec<ListItem> = setup
        .difficulty
        .items
        .iter()
        .map(|d| {
            let marker = if *d == chosen { "(*) " } else { "( ) " };
            let (label, color) = match d {
                Some(d) => (d.label(), difficulty_color(*d)),
                None => ("All", Color::White),
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(label, Style::default().fg(color)),
            ]))
        })
        .collect();
    let difficulty_title = format!(" Difficulty ({} match) ", app.matching_count());
    draw_column(
        f,
        chunks[2],
        &difficulty_title,
        difficulty,
        setup.difficulty.selected,
        setup.focus == SetupFocus::Difficulty,
    );
}

fn checkbox<'a, T>(toggle: &Toggle<T>, label: &str) -> ListItem<'a> {
    let (mark, color) = if toggle.checked {
        ("[x] ", Color::Green)
    } else {
        ("[ ] ", Color::DarkGray)
    };
    ListItem::new(Line::from(vec![
        Span::styled(mark, Style::default().fg(color)),
        Span::styled(label.to_string(), Style::default().fg(Color::White)),
    ]))
}

fn draw_column(
    f: &mut Frame,
    area: Rect,
    title: &str,
    items: Vec<ListItem>,
    selected: Option<usize>,
    focused: bool,
) {
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title.to_string())
        .title_style(Style::default().fg(Color::Cyan));

    let mut list = List::new(items).block(block);
    if focused {
        list = list
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
    }

    let mut state = ListState::default();
    state.select(selected);
    f.render_stateful_widget(list, area, &mut state);
}
