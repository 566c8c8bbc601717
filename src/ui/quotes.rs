//! Quotes page: full list with client-side search and philosopher filter

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::Quote;
use crate::filter::{filter_quotes, PhilosopherSelection};

use super::{render_error, render_loading};

/// Renders the quotes page: filter bar, filtered list, selection detail
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let binding = app.quotes_binding();

    if binding.is_loading() {
        render_loading(frame, area, "quotes");
        return;
    }
    if let Some(error) = &binding.error {
        render_error(frame, area, error);
        return;
    }
    let Some(quotes) = binding.data else {
        return;
    };

    let filtered = filter_quotes(&quotes, &app.filter);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    render_filter_bar(frame, app, filtered.len(), quotes.len(), chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let items: Vec<ListItem> = filtered
        .iter()
        .map(|quote| {
            ListItem::new(Line::from(vec![
                Span::raw(truncate(&quote.text, 60)),
                Span::styled(
                    format!("  — {}", quote.philosopher_name),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" Quotes ({}) ", filtered.len()))
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let selected = app.list_index.min(filtered.len().saturating_sub(1));
    let mut state = ListState::default();
    if !filtered.is_empty() {
        state.select(Some(selected));
    }
    frame.render_stateful_widget(list, panes[0], &mut state);

    if let Some(quote) = filtered.get(selected) {
        render_quote_detail(frame, quote, panes[1]);
    }
}

fn render_filter_bar(frame: &mut Frame, app: &App, shown: usize, total: usize, area: Rect) {
    let philosopher = match &app.filter.philosopher {
        PhilosopherSelection::All => "All".to_string(),
        PhilosopherSelection::Name(name) => name.clone(),
    };

    let search_style = if app.search_mode {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::Cyan)),
        Span::styled(
            if app.filter.search.is_empty() && !app.search_mode {
                "(press / to search)".to_string()
            } else {
                format!("{}{}", app.filter.search, if app.search_mode { "_" } else { "" })
            },
            search_style,
        ),
        Span::raw("   "),
        Span::styled("Philosopher: ", Style::default().fg(Color::Cyan)),
        Span::raw(philosopher),
        Span::raw("   "),
        Span::styled(
            format!("{shown}/{total} shown"),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(Block::default().title(" Filter ").borders(Borders::ALL)),
        area,
    );
}

fn render_quote_detail(frame: &mut Frame, quote: &Quote, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("\u{201C}{}\u{201D}", quote.text),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("— {}", quote.philosopher_name),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            quote.source.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];
    if let Some(context) = &quote.context {
        lines.push(Line::from(vec![
            Span::styled("Context: ", Style::default().fg(Color::Cyan)),
            Span::raw(context.clone()),
        ]));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("Today: ", Style::default().fg(Color::Cyan)),
        Span::raw(quote.modern_interpretation.clone()),
    ]));

    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().title(" Detail ").borders(Borders::ALL))
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{truncated}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("memento mori", 60), "memento mori");
    }

    #[test]
    fn test_truncate_long_text_adds_ellipsis() {
        let long = "a".repeat(100);
        let out = truncate(&long, 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.ends_with('…'));
    }
}
