//! Timeline page: the history of Stoicism year by year

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::app::App;
use crate::data::format_year;

use super::{render_error, render_loading};

/// Renders the timeline as a selectable list of events
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let binding = app.timeline_binding();

    if binding.is_loading() {
        render_loading(frame, area, "the timeline");
        return;
    }
    if let Some(error) = &binding.error {
        render_error(frame, area, error);
        return;
    }
    let Some(events) = binding.data else {
        return;
    };

    let items: Vec<ListItem> = events
        .iter()
        .map(|event| {
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    format!("{:>9}  ", format_year(event.year)),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(event.event.clone()),
            ])];
            let mut detail = format!("           {}", event.significance);
            if let Some(philosopher) = &event.related_philosopher {
                detail.push_str(&format!(" ({philosopher})"));
            }
            lines.push(Line::from(Span::styled(
                detail,
                Style::default().fg(Color::DarkGray),
            )));
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Timeline of Stoicism ")
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.list_index.min(events.len().saturating_sub(1))));
    frame.render_stateful_widget(list, area, &mut state);
}
