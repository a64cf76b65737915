use crate::app::{App, DashboardTab, InputMode};
use crate::ui::{api_badge, render_condition_filters, render_query_box};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};
use spacebio_core::models::{Organism, Paper};
use spacebio_core::SearchResult;

const HEADLINES: [(&str, &str); 4] = [
    ("150+", "Organisms"),
    ("1,200+", "Publications"),
    ("850+", "Experiments"),
    ("30+", "Years"),
];

pub fn render_dashboard(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut constraints = vec![
        Constraint::Length(3), // Query + API badge
        Constraint::Length(3), // Headline numbers
    ];
    if app.dashboard.show_filters {
        constraints.push(Constraint::Length(app.condition_names.len() as u16 + 2));
    }
    constraints.push(Constraint::Length(3)); // Tabs
    constraints.push(Constraint::Min(5)); // Tab body

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(30)])
        .split(chunks[0]);
    render_query_box(
        frame,
        app,
        &app.dashboard.query,
        "Search organisms, conditions, research topics",
        top[0],
    );
    let badge = Paragraph::new(Line::from(api_badge(app.dashboard.api_status.as_ref())))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("API"));
    frame.render_widget(badge, top[1]);

    render_headlines(frame, chunks[1]);

    let mut next = 2;
    if app.dashboard.show_filters {
        render_condition_filters(
            frame,
            &app.condition_names,
            &app.dashboard.selected_conditions,
            app.dashboard.filter_cursor,
            app.input_mode == InputMode::Filtering,
            chunks[next],
        );
        next += 1;
    }

    render_tabs(frame, app, chunks[next]);
    let body = chunks[next + 1];

    match app.dashboard.tab {
        DashboardTab::AiSearch => render_ai_search(frame, app, body),
        DashboardTab::Organisms => render_organisms(frame, app, body),
        DashboardTab::Papers => render_papers(frame, app, body),
    }
}

fn render_headlines(frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((value, label), column) in HEADLINES.iter().zip(columns.iter()) {
        let line = Line::from(vec![
            Span::styled(*value, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(*label, Style::default().fg(Color::Gray)),
        ]);
        let widget = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(widget, *column);
    }
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles = vec![
        "🤖 AI Search".to_string(),
        format!("Organisms ({})", app.dashboard.organisms.len()),
        format!("Papers ({})", app.dashboard.papers.len()),
    ];
    let selected = match app.dashboard.tab {
        DashboardTab::AiSearch => 0,
        DashboardTab::Organisms => 1,
        DashboardTab::Papers => 2,
    };
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL).title("t: switch tab"))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, area);
}

fn render_ai_search(frame: &mut Frame, app: &App, area: Rect) {
    let dashboard = &app.dashboard;
    let block = Block::default().borders(Borders::ALL).title("AI Search");

    let lines = if dashboard.loading {
        vec![Line::from(Span::styled(
            "Searching…",
            Style::default().fg(Color::Yellow),
        ))]
    } else if let Some(error) = &dashboard.error {
        vec![
            Line::from(Span::styled(
                format!("✗ {}", error),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Press ENTER to retry."),
        ]
    } else if let Some(result) = &dashboard.result {
        result_lines(result, dashboard.show_chunks)
    } else {
        vec![
            Line::from(Span::styled(
                "AI-Powered Research Search",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(
                "Enter a query about organisms, conditions, or research topics to get insights \
                 from NASA's space biology database. Press s to try a suggestion.",
            ),
        ]
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((dashboard.result_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn result_lines(result: &SearchResult, show_chunks: bool) -> Vec<Line<'static>> {
    let heading = |text: &str| {
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
    };
    let details = &result.scientific_details;

    let mut title = vec![Span::styled(
        result.organism_name.clone(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];
    if let Some(condition) = &result.condition {
        title.push(Span::raw("  "));
        title.push(Span::styled(
            format!(" {} ", condition),
            Style::default().fg(Color::Black).bg(Color::Magenta),
        ));
    }

    let mut lines = vec![
        Line::from(title),
        Line::from(""),
        heading("Description"),
        Line::from(result.description.clone()),
        Line::from(""),
        heading("Scientific Details"),
        Line::from(vec![
            Span::styled("Classification: ", Style::default().fg(Color::Gray)),
            Span::raw(details.classification.clone()),
        ]),
        Line::from(Span::styled("Response mechanisms:", Style::default().fg(Color::Gray))),
    ];
    lines.extend(
        details
            .response_mechanisms
            .iter()
            .map(|m| Line::from(format!("  • {}", m))),
    );
    lines.push(Line::from(vec![
        Span::styled("Experimental findings: ", Style::default().fg(Color::Gray)),
        Span::raw(details.experimental_findings.clone()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Applications: ", Style::default().fg(Color::Gray)),
        Span::raw(details.applications.clone()),
    ]));
    lines.push(Line::from(""));

    let marker = if show_chunks { "▾" } else { "▸" };
    lines.push(heading(&format!(
        "{} Research Excerpts ({})",
        marker,
        result.relevant_chunks.len()
    )));
    if show_chunks {
        for (i, chunk) in result.relevant_chunks.iter().enumerate() {
            lines.push(Line::from(Span::styled(
                format!("[{}] {}", i + 1, chunk),
                Style::default().fg(Color::Gray),
            )));
        }
    }
    lines
}

fn render_organisms(frame: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app.dashboard.organisms.iter().map(organism_item).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Organisms"))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");
    frame.render_stateful_widget(list, area, &mut app.dashboard.list);
}

pub(crate) fn organism_item(organism: &Organism) -> ListItem<'static> {
    let mut lines = vec![Line::from(vec![
        Span::raw(format!("{} ", organism.category.icon())),
        Span::styled(
            organism.name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            organism
                .common_name
                .as_ref()
                .map(|c| format!("  ({})", c))
                .unwrap_or_default(),
            Style::default().fg(Color::Gray),
        ),
    ])];
    lines.push(Line::from(vec![
        Span::styled(
            format!("   {}", organism.category.label()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("  · {} experiments", organism.experiment_count),
            Style::default().fg(Color::Green),
        ),
    ]));
    ListItem::new(lines)
}

fn render_papers(frame: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app.dashboard.papers.iter().map(paper_item).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Papers"))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");
    frame.render_stateful_widget(list, area, &mut app.dashboard.list);
}

fn paper_item(paper: &Paper) -> ListItem<'static> {
    let mut lines = vec![Line::from(Span::styled(
        paper.title.clone(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))];
    if let Some(summary) = &paper.summary {
        lines.push(Line::from(vec![
            Span::styled("   AI Summary: ", Style::default().fg(Color::Cyan)),
            Span::styled(summary.clone(), Style::default().fg(Color::Gray)),
        ]));
    }
    let year = paper.year().map(|y| format!(" ({})", y)).unwrap_or_default();
    lines.push(Line::from(Span::styled(
        format!("   {}{}", paper.author_line(), year),
        Style::default().fg(Color::DarkGray),
    )));
    ListItem::new(lines)
}
