//! Surprise page: a random quote, incident, or theme

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::{format_year, Incident, Quote, Theme};
use crate::surprise::SurpriseContent;

use super::{render_error, render_loading};

/// Renders the surprise page
///
/// The page is ready once quotes, incidents, and themes have all loaded;
/// an error on any of the three shows the uniform error panel.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let quotes = app.quotes_binding();
    let incidents = app.incidents_binding();
    let themes = app.themes_binding();

    for error in [&quotes.error, &incidents.error, &themes.error].into_iter().flatten() {
        render_error(frame, area, error);
        return;
    }
    if quotes.is_loading() || incidents.is_loading() || themes.is_loading() {
        render_loading(frame, area, "wisdom");
        return;
    }

    if app.is_generating {
        render_generating(frame, area);
        return;
    }

    let Some(content) = &app.surprise_content else {
        render_loading(frame, area, "wisdom");
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Min(10),
            Constraint::Percentage(15),
        ])
        .split(area);

    let lines = match content {
        SurpriseContent::Quote(quote) => quote_lines(quote),
        SurpriseContent::Incident(incident) => incident_lines(incident),
        SurpriseContent::Theme(theme) => theme_lines(theme),
    };

    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} ", content.category()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(card, chunks[1]);
}

fn render_generating(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Percentage(45),
        ])
        .split(area);

    let text = Paragraph::new("Consulting the Stoics...")
        .style(Style::default().fg(Color::Magenta))
        .alignment(Alignment::Center);
    frame.render_widget(text, chunks[1]);
}

fn quote_lines(quote: &Quote) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("\u{201C}{}\u{201D}", quote.text),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("— {}, {}", quote.philosopher_name, quote.source),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::raw(quote.modern_interpretation.clone())),
    ]
}

fn incident_lines(incident: &Incident) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
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
            Span::styled("Lesson: ", Style::default().fg(Color::Cyan)),
            Span::raw(incident.lesson.clone()),
        ]),
    ]
}

fn theme_lines(theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            theme.name.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::raw(theme.principle.clone())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Try this: ", Style::default().fg(Color::Cyan)),
            Span::raw(theme.practice_method.clone()),
        ]),
    ]
}
