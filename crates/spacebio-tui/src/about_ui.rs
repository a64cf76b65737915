use crate::ui::title_line;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_about(frame: &mut Frame, area: Rect) {
    let muted = Style::default().fg(Color::Gray);
    let lines = vec![
        title_line("About This Project"),
        Line::from(Span::styled("Created by Astra Innovators", Style::default().fg(Color::Cyan)))
            .centered(),
        Line::from(""),
        Line::from(
            "Space Biology Navigator was created for the NASA Space Apps Challenge 2025 to make \
             NASA's bioscience research more accessible and discoverable.",
        ),
        Line::from(""),
        Line::from(
            "Our mission is to help scientists, engineers, students and policymakers quickly find \
             relevant information about space biology experiments without manually searching \
             through hundreds of publications.",
        ),
        Line::from(""),
        Line::from(Span::styled(
            "Search by organism, filter experiments by spaceflight condition, and read AI \
             summaries of the papers behind them.",
            muted,
        )),
    ];

    let about = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("About"));
    frame.render_widget(about, area);
}
