//! Home page: a random quote with attribution and interpretation

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

use super::{render_error, render_loading};

/// Renders the home page quote card
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let binding = app.home_binding();

    if binding.is_loading() {
        render_loading(frame, area, "a quote");
        return;
    }
    if let Some(error) = &binding.error {
        render_error(frame, area, error);
        return;
    }
    let Some(quote) = binding.data else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Min(10),
            Constraint::Percentage(20),
        ])
        .split(area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("\u{201C}{}\u{201D}", quote.text),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("— {}", quote.philosopher_name),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            quote.source.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];
    if let Some(context) = &quote.context {
        lines.push(Line::from(Span::styled(
            format!("Context: {context}"),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled(
            "Today: ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(quote.modern_interpretation.clone()),
    ]));

    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Quote of the Moment ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(card, chunks[1]);
}
