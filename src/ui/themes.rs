//! Themes page: Stoic practice areas with principle and method

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::Theme;

use super::{render_error, render_loading};

/// Renders the themes list with the selection's details
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let binding = app.themes_binding();

    if binding.is_loading() {
        render_loading(frame, area, "themes");
        return;
    }
    if let Some(error) = &binding.error {
        render_error(frame, area, error);
        return;
    }
    let Some(themes) = binding.data else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let items: Vec<ListItem> = themes
        .iter()
        .map(|theme| ListItem::new(theme.name.clone()))
        .collect();

    let list = List::new(items)
        .block(Block::default().title(" Themes ").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.list_index.min(themes.len().saturating_sub(1))));
    frame.render_stateful_widget(list, chunks[0], &mut state);

    if let Some(theme) = themes.get(app.list_index) {
        render_theme_detail(frame, theme, chunks[1]);
    }
}

fn render_theme_detail(frame: &mut Frame, theme: &Theme, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            theme.name.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Principle: ", Style::default().fg(Color::Cyan)),
            Span::raw(theme.principle.clone()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Modern application: ", Style::default().fg(Color::Cyan)),
            Span::raw(theme.modern_application.clone()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Practice: ", Style::default().fg(Color::Cyan)),
            Span::raw(theme.practice_method.clone()),
        ]),
    ];
    if let Some(basis) = &theme.scientific_basis {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Science: ", Style::default().fg(Color::Cyan)),
            Span::raw(basis.clone()),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().title(" Detail ").borders(Borders::ALL))
            .wrap(Wrap { trim: true }),
        area,
    );
}
