// UI rendering: header with navigation links, routed content, status bar
use crate::app::{App, InputMode};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use spacebio_core::{ApiStatus, Route};

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navigation links + address bar
            Constraint::Min(5),    // Routed view
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    match app.route() {
        Route::Home => crate::home_ui::render_home(frame, app, chunks[1]),
        Route::Dashboard => crate::dashboard_ui::render_dashboard(frame, app, chunks[1]),
        Route::Explore | Route::Organisms => crate::explore_ui::render_explore(frame, app, chunks[1]),
        Route::About => crate::about_ui::render_about(frame, chunks[1]),
    }

    render_status_bar(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let active = app.route();
    let mut links = vec![Span::styled(
        "🚀 Space Biology ",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];
    for (i, route) in Route::ALL.iter().enumerate() {
        let style = if *route == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        links.push(Span::raw(" "));
        links.push(Span::styled(format!(" {} {} ", i + 1, route.label()), style));
    }

    let nav = Paragraph::new(Line::from(links)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(nav, header_chunks[0]);

    let history = app.navigator.history();
    let arrow = |enabled: bool, symbol: &'static str| {
        if enabled {
            Span::styled(symbol, Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        } else {
            Span::styled(symbol, Style::default().fg(Color::DarkGray))
        }
    };
    let address = Paragraph::new(Line::from(vec![
        arrow(history.can_go_back(), "◀ "),
        arrow(history.can_go_forward(), "▶ "),
        Span::styled(app.navigator.current_path(), Style::default().fg(Color::Yellow)),
    ]))
    .block(Block::default().borders(Borders::ALL).title("Location"));
    frame.render_widget(address, header_chunks[1]);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = if let Some(message) = &app.status_message {
        Span::styled(message.as_str(), Style::default().fg(Color::Red))
    } else {
        match app.input_mode {
            InputMode::Editing => Span::styled(
                "EDIT | type query | ENTER: submit | ESC: cancel",
                Style::default().fg(Color::Yellow),
            ),
            InputMode::Filtering => Span::styled(
                "CONDITIONS | j/k: move | SPACE: toggle | c: clear | ESC: close",
                Style::default().fg(Color::Yellow),
            ),
            InputMode::Normal => Span::raw(normal_hints(app)),
        }
    };

    frame.render_widget(Paragraph::new(Line::from(status)), area);
}

fn normal_hints(app: &App) -> &'static str {
    if app.explore.paper.is_some() {
        return "PAPER | o: open PDF | ESC: close";
    }
    match app.route() {
        Route::Home => "TAB: links | 1-5: jump | /: search | j/k + ENTER: popular | e: explore | </>: back/fwd | q: quit",
        Route::Dashboard => "/: query | ENTER: search | t: tab | s: suggestion | x: excerpts | f: conditions | r: recheck API | </>: back/fwd | q: quit",
        Route::Explore | Route::Organisms => "/: search | j/k: move | ENTER: open | ESC: back to list | f: conditions | </>: back/fwd | q: quit",
        Route::About => "TAB: links | 1-5: jump | </>: back/fwd | q: quit",
    }
}

/// Query box shared by the home, dashboard and explore views
pub(crate) fn render_query_box(frame: &mut Frame, app: &App, text: &str, title: &str, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let input = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(style),
    );
    frame.render_widget(input, area);

    if editing {
        frame.set_cursor_position((area.x + text.chars().count() as u16 + 1, area.y + 1));
    }
}

/// Condition checklist shared by the dashboard and explore views
pub(crate) fn render_condition_filters(
    frame: &mut Frame,
    names: &[String],
    selected: &[String],
    cursor: usize,
    active: bool,
    area: Rect,
) {
    let items: Vec<ListItem> = names
        .iter()
        .map(|name| {
            let mark = if selected.contains(name) { "[x]" } else { "[ ]" };
            ListItem::new(format!("{} {}", mark, name))
        })
        .collect();

    let border_style = if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Conditions ({} selected)", selected.len()))
                .border_style(border_style),
        )
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if active {
        state.select(Some(cursor));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

pub(crate) fn api_badge(status: Option<&ApiStatus>) -> Span<'static> {
    match status {
        None => Span::styled(" Checking API… ", Style::default().fg(Color::Black).bg(Color::Yellow)),
        Some(s) if s.connected => Span::styled(
            format!(" ✓ {} ", s.message),
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Some(s) => Span::styled(
            format!(" ✗ {} ", s.message),
            Style::default().fg(Color::White).bg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    }
}

pub(crate) fn title_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
}

/// Helper function to create a centered rect
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
