//! UI rendering module for the Stoic Wisdom terminal browser
//!
//! One renderer per page plus shared chrome: the navigation header, the
//! loading placeholder, the uniform error panel, and the help overlay.

pub mod help_overlay;
pub mod home;
pub mod incidents;
pub mod philosophers;
pub mod quotes;
pub mod surprise;
pub mod themes;
pub mod timeline;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::api::ApiError;
use crate::app::{App, Page};

/// Renders the full frame for the current page
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_nav(frame, app, chunks[0]);

    let body = chunks[1];
    match &app.page {
        Page::Home => home::render(frame, app, body),
        Page::Philosophers => philosophers::render_list(frame, app, body),
        Page::PhilosopherDetail(id) => philosophers::render_detail(frame, app, *id, body),
        Page::Quotes => quotes::render(frame, app, body),
        Page::Themes => themes::render(frame, app, body),
        Page::Timeline => timeline::render(frame, app, body),
        Page::Incidents => incidents::render(frame, app, body),
        Page::Surprise => surprise::render(frame, app, body),
    }

    render_footer(frame, app, chunks[2]);

    if app.show_help {
        help_overlay::render(frame);
    }
}

/// Navigation tabs for all top-level pages
fn render_nav(frame: &mut Frame, app: &App, area: Rect) {
    let tabs = [
        ("1", "Home", matches!(app.page, Page::Home)),
        (
            "2",
            "Philosophers",
            matches!(app.page, Page::Philosophers | Page::PhilosopherDetail(_)),
        ),
        ("3", "Quotes", matches!(app.page, Page::Quotes)),
        ("4", "Themes", matches!(app.page, Page::Themes)),
        ("5", "Timeline", matches!(app.page, Page::Timeline)),
        ("6", "Incidents", matches!(app.page, Page::Incidents)),
        ("7", "Surprise", matches!(app.page, Page::Surprise)),
    ];

    let mut spans = vec![Span::raw(" ")];
    for (num, label, active) in tabs {
        let style = if active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("[{num}] {label}"), style));
        spans.push(Span::raw("  "));
    }

    let block = Block::default()
        .title(" Stoic Wisdom ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// One-line footer with key hints and the last refresh time
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let hint = match &app.page {
        Page::Home => "n: new quote  r: refresh  ?: help  q: quit",
        Page::Philosophers => "↑/↓: select  Enter: details  r: refresh  ?: help  q: quit",
        Page::PhilosopherDetail(_) => "↑/↓: scroll  Esc: back  ?: help  q: quit",
        Page::Quotes => "/: search  f: filter  ↑/↓: select  r: refresh  ?: help  q: quit",
        Page::Surprise => "s: surprise me  r: refresh  ?: help  q: quit",
        _ => "↑/↓: select  r: refresh  ?: help  q: quit",
    };

    let refreshed = app
        .last_refresh
        .map(|t| format!("updated {}", t.format("%H:%M:%S")))
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(format!(" {hint}"), Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(refreshed, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Centered loading placeholder
pub fn render_loading(frame: &mut Frame, area: Rect, what: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Percentage(45),
        ])
        .split(area);

    let text = Paragraph::new(format!("Loading {what}..."))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    frame.render_widget(text, chunks[1]);
}

/// Uniform error panel with the return-home escape hint
pub fn render_error(frame: &mut Frame, area: Rect, error: &ApiError) {
    let lines = vec![
        Line::from(Span::styled(
            "Unable to load content",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::raw(error.to_string())),
        Line::from(""),
        Line::from(Span::styled(
            "Press h to return home, r to retry",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(" Error ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::cache::Store;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_content(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_home_loading_state() {
        let app = App::with_parts(ApiClient::default(), Store::new());
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|frame| render(frame, &app)).unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("Stoic Wisdom"));
        assert!(content.contains("Loading"));
    }

    #[test]
    fn test_render_error_panel() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let error = ApiError::Status {
            endpoint: "/quotes/random".to_string(),
            status: 500,
        };

        terminal
            .draw(|frame| render_error(frame, frame.area(), &error))
            .unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("Unable to load content"));
        assert!(content.contains("500"));
        assert!(content.contains("return home"));
    }
}
