use crate::app::{App, POPULAR_ORGANISMS};
use crate::ui::{render_query_box, title_line};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

const FEATURES: [(&str, &str); 6] = [
    ("Organism-Centric Search", "Every experiment, paper and summary for an organism"),
    ("Smart Filtering", "Narrow experiments by microgravity, radiation and more"),
    ("AI-Powered Summaries", "Quick insights from complex research papers"),
    ("Comprehensive Database", "Curated NASA bioscience publications"),
    ("Multi-Organism Coverage", "Plants, microbes, animals and human cells"),
    ("Research Insights", "Compare results and spot research gaps"),
];

/// Landing view: intro, quick search, feature highlights
pub fn render_home(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Intro
            Constraint::Length(3), // Search box
            Constraint::Length(8), // Features
            Constraint::Min(3),    // Popular organisms
        ])
        .split(area);

    let intro = Paragraph::new(vec![
        title_line("Space Biology Knowledge Engine"),
        Line::from(""),
        Line::from(
            "Explore how living things respond to microgravity, radiation and the other \
             conditions of spaceflight, drawn from NASA bioscience publications.",
        ),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(intro, chunks[0]);

    render_query_box(
        frame,
        app,
        &app.home.input,
        "Search organisms or conditions (/ to type, ENTER to search)",
        chunks[1],
    );

    render_features(frame, chunks[2]);

    let items: Vec<ListItem> = POPULAR_ORGANISMS
        .iter()
        .map(|name| ListItem::new(format!("🔎 {}", name)))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Popular searches"))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");
    frame.render_stateful_widget(list, chunks[3], &mut app.home.popular);
}

fn render_features(frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2); 2])
        .split(area);

    for (row, features) in rows.iter().zip(FEATURES.chunks(3)) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(*row);

        for ((title, blurb), column) in features.iter().zip(columns.iter()) {
            let card = Paragraph::new(vec![
                Line::from(Span::styled(
                    *title,
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(*blurb, Style::default().fg(Color::Gray))),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
            frame.render_widget(card, *column);
        }
    }
}
