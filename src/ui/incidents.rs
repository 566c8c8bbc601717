//! Incidents page: historical situations and the Stoic responses to them

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::{format_year, Incident};

use super::{render_error, render_loading};

/// Renders the incidents list with the selection's full story
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let binding = app.incidents_binding();

    if binding.is_loading() {
        render_loading(frame, area, "incidents");
        return;
    }
    if let Some(error) = &binding.error {
        render_error(frame, area, error);
        return;
    }
    let Some(incidents) = binding.data else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let items: Vec<ListItem> = incidents
        .iter()
        .map(|incident| {
            ListItem::new(Line::from(vec![
                Span::raw(incident.title.clone()),
                Span::styled(
                    format!("  ({}, {})", incident.philosopher_name, format_year(incident.year)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().title(" Incidents ").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.list_index.min(incidents.len().saturating_sub(1))));
    frame.render_stateful_widget(list, chunks[0], &mut state);

    if let Some(incident) = incidents.get(app.list_index) {
        render_incident_detail(frame, incident, chunks[1]);
    }
}

fn render_incident_detail(frame: &mut Frame, incident: &Incident, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            incident.title.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} • {}", incident.philosopher_name, format_year(incident.year)),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::raw(incident.description.clone())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Stoic response: ", Style::default().fg(Color::Cyan)),
            Span::raw(incident.stoic_response.clone()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Lesson: ", Style::default().fg(Color::Cyan)),
            Span::raw(incident.lesson.clone()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Modern parallel: ", Style::default().fg(Color::Cyan)),
            Span::raw(incident.modern_parallel.clone()),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().title(" Detail ").borders(Borders::ALL))
            .wrap(Wrap { trim: true }),
        area,
    );
}
