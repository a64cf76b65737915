// Explore view: organism list, then that organism's experiments, then a paper popup
use crate::app::{App, InputMode};
use crate::dashboard_ui::organism_item;
use crate::ui::{centered_rect, render_condition_filters, render_query_box};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};
use spacebio_core::models::{ExperimentWithDetails, Organism};

pub fn render_explore(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_query_box(
        frame,
        app,
        &app.explore.query,
        "Search organisms by name, common name or synonym",
        chunks[0],
    );

    if let Some(organism) = app.explore.selected_organism.clone() {
        render_experiments(frame, app, &organism, chunks[1]);
    } else {
        render_organism_list(frame, app, chunks[1]);
    }

    if let Some(paper) = &app.explore.paper {
        render_paper_popup(frame, paper, area);
    }
}

fn render_organism_list(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.explore.organisms.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(Span::styled(
                "No organisms found",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from("Try a different name, or clear the search to browse everything."),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Organisms"));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app.explore.organisms.iter().map(organism_item).collect();
    let title = format!("Organisms ({}) · ENTER: view experiments", app.explore.organisms.len());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");
    frame.render_stateful_widget(list, area, &mut app.explore.organism_list);
}

fn render_experiments(frame: &mut Frame, app: &mut App, organism: &Organism, area: Rect) {
    let mut constraints = vec![Constraint::Length(5)];
    if app.explore.show_filters {
        constraints.push(Constraint::Length(app.condition_names.len() as u16 + 2));
    }
    constraints.push(Constraint::Min(3));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut header = vec![Line::from(vec![
        Span::raw(format!("{} ", organism.category.icon())),
        Span::styled(
            organism.name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            organism
                .scientific_name
                .as_ref()
                .map(|s| format!("  {}", s))
                .unwrap_or_default(),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        ),
    ])];
    if let Some(description) = &organism.description {
        header.push(Line::from(Span::styled(
            description.clone(),
            Style::default().fg(Color::Gray),
        )));
    }
    let header = Paragraph::new(header)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("ESC: back to organisms"));
    frame.render_widget(header, chunks[0]);

    let mut next = 1;
    if app.explore.show_filters {
        render_condition_filters(
            frame,
            &app.condition_names,
            &app.explore.selected_conditions,
            app.explore.filter_cursor,
            app.input_mode == InputMode::Filtering,
            chunks[next],
        );
        next += 1;
    }
    let body = chunks[next];

    if app.explore.experiments.is_empty() {
        let message = if app.explore.selected_conditions.is_empty() {
            "No experiments recorded for this organism yet."
        } else {
            "No experiments match the selected conditions. Press c to clear them."
        };
        let empty = Paragraph::new(message)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Experiments"));
        frame.render_widget(empty, body);
        return;
    }

    let items: Vec<ListItem> = app.explore.experiments.iter().map(experiment_item).collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Experiments ({}) · ENTER: paper details", app.explore.experiments.len())),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");
    frame.render_stateful_widget(list, body, &mut app.explore.experiment_list);
}

fn experiment_item(item: &ExperimentWithDetails) -> ListItem<'static> {
    let experiment = &item.experiment;
    let mut lines = vec![Line::from(Span::styled(
        item.paper.title.clone(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))];

    let mut tags: Vec<Span> = experiment
        .conditions
        .iter()
        .map(|c| Span::styled(format!(" {} ", c), Style::default().fg(Color::Black).bg(Color::Magenta)))
        .flat_map(|tag| [Span::raw("   "), tag])
        .collect();
    if let Some(days) = experiment.duration_days {
        tags.push(Span::styled(
            format!("   {} days", days),
            Style::default().fg(Color::Cyan),
        ));
    }
    lines.push(Line::from(tags));

    if let Some(results) = &experiment.key_results {
        lines.push(Line::from(Span::styled(
            format!("   {}", results),
            Style::default().fg(Color::Gray),
        )));
    }
    if !experiment.metrics.is_empty() {
        let metrics = experiment
            .metrics
            .iter()
            .map(|(k, v)| format!("{}: {}", k.replace('_', " "), v))
            .collect::<Vec<_>>()
            .join(" · ");
        lines.push(Line::from(Span::styled(
            format!("   {}", metrics),
            Style::default().fg(Color::Green),
        )));
    }
    ListItem::new(lines)
}

fn render_paper_popup(frame: &mut Frame, item: &ExperimentWithDetails, area: Rect) {
    let popup_area = centered_rect(80, 85, area);
    frame.render_widget(Clear, popup_area);

    let paper = &item.paper;
    let label = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled(
            paper.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if let Some(summary) = &paper.summary {
        lines.push(Line::from(Span::styled("AI Summary", label)));
        lines.push(Line::from(summary.clone()));
        lines.push(Line::from(""));
    }

    let date = paper
        .publication_date
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| "Date unavailable".to_string());
    lines.push(Line::from(vec![
        Span::styled("Published: ", Style::default().fg(Color::Gray)),
        Span::raw(date),
    ]));
    if !paper.authors.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Authors: ", Style::default().fg(Color::Gray)),
            Span::raw(paper.authors.join(", ")),
        ]));
    }
    if let Some(journal) = &paper.journal {
        lines.push(Line::from(vec![
            Span::styled("Journal: ", Style::default().fg(Color::Gray)),
            Span::raw(journal.clone()),
        ]));
    }
    if let Some(doi) = &paper.doi {
        lines.push(Line::from(vec![
            Span::styled("DOI: ", Style::default().fg(Color::Gray)),
            Span::raw(doi.clone()),
        ]));
    }

    if !item.experiment.conditions.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Experimental Conditions", label)));
        lines.push(Line::from(item.experiment.conditions.join(", ")));
    }
    if let Some(results) = &item.experiment.key_results {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Key Results", label)));
        lines.push(Line::from(results.clone()));
    }
    if !paper.key_findings.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Key Findings", label)));
        for finding in &paper.key_findings {
            lines.push(Line::from(format!("  • {}", finding)));
        }
    }
    if let Some(abstract_text) = &paper.abstract_text {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Abstract", label)));
        lines.push(Line::from(abstract_text.clone()));
    }

    lines.push(Line::from(""));
    lines.push(match &paper.pdf_url {
        Some(_) => Line::from(Span::styled(
            "o: View Full Paper · ESC: close",
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(Span::styled("ESC: close", Style::default().fg(Color::DarkGray))),
    });

    let popup = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Paper Details ")
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(popup, popup_area);
}
