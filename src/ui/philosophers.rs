//! Philosophers pages: the list and the per-philosopher detail view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::{format_year, Philosopher};

use super::{render_error, render_loading};

/// Renders the philosophers list with a preview of the selection
pub fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let binding = app.philosophers_binding();

    if binding.is_loading() {
        render_loading(frame, area, "philosophers");
        return;
    }
    if let Some(error) = &binding.error {
        render_error(frame, area, error);
        return;
    }
    let Some(philosophers) = binding.data else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let items: Vec<ListItem> = philosophers
        .iter()
        .map(|p| {
            ListItem::new(Line::from(vec![
                Span::styled(p.name.clone(), Style::default().fg(Color::White)),
                Span::styled(
                    format!("  ({})", p.era),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Philosophers ")
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.list_index.min(philosophers.len().saturating_sub(1))));
    frame.render_stateful_widget(list, chunks[0], &mut state);

    if let Some(selected) = philosophers.get(app.list_index) {
        render_bio_preview(frame, selected, chunks[1]);
    }
}

fn render_bio_preview(frame: &mut Frame, philosopher: &Philosopher, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            philosopher.name.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{} — {}",
                format_year(philosopher.birth_year),
                format_year(philosopher.death_year)
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::raw(philosopher.biography.clone())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Key works: ", Style::default().fg(Color::Cyan)),
            Span::raw(philosopher.key_works.clone()),
        ]),
    ];

    let preview = Paragraph::new(lines)
        .block(Block::default().title(" Biography ").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(preview, area);
}

/// Renders one philosopher with all of their quotes
pub fn render_detail(frame: &mut Frame, app: &App, id: i64, area: Rect) {
    let binding = app.philosopher_detail_binding(id);

    if binding.is_loading() {
        render_loading(frame, area, "philosopher");
        return;
    }
    if let Some(error) = &binding.error {
        render_error(frame, area, error);
        return;
    }
    let Some(detail) = binding.data else {
        return;
    };

    let p = &detail.philosopher;
    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "{} ({} — {})",
                p.name,
                format_year(p.birth_year),
                format_year(p.death_year)
            ),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            p.era.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::raw(p.biography.clone())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Core teachings: ", Style::default().fg(Color::Cyan)),
            Span::raw(p.core_teachings.clone()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("Quotes ({})", detail.quotes.len()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    for quote in &detail.quotes {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("\u{201C}{}\u{201D}", quote.text),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(Span::styled(
            format!("  — {}", quote.source),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let detail_view = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} ", p.name))
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: true })
        .scroll((app.detail_scroll, 0));
    frame.render_widget(detail_view, area);
}
