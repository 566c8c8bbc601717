//! Stoicwise - browse Stoic philosophy from the terminal
//!
//! A terminal UI application that displays quotes, philosopher biographies,
//! themes, historical incidents, and a timeline fetched from the Stoic
//! Wisdom API.

mod api;
mod app;
mod cache;
mod cli;
mod data;
mod filter;
mod surprise;
mod ui;

use std::io;
use std::panic;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use api::ApiClient;
use app::App;
use cli::{Cli, StartupConfig};

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Probes the backend health endpoints and reports the result.
///
/// Returns an error exit code when either probe fails, so scripts can use
/// `stoicwise --check` as a readiness gate.
async fn run_health_check(config: &StartupConfig) -> i32 {
    let client = ApiClient::new(config.api_url.clone());

    match client.health().await {
        Ok(health) => println!("health: {}", health.status),
        Err(error) => {
            eprintln!("health check failed: {error}");
            return 1;
        }
    }

    match client.ready().await {
        Ok(ready) => {
            println!("ready: {ready}");
            0
        }
        Err(error) => {
            eprintln!("readiness check failed: {error}");
            1
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr and stay silent unless RUST_LOG enables them
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(2);
        }
    };

    if config.check {
        std::process::exit(run_health_check(&config).await);
    }

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);

    // Initial render shows the loading state while the first fetch runs
    terminal.draw(|f| ui::render(f, &app))?;
    app.tick().await;

    // Main event loop
    loop {
        terminal.draw(|f| ui::render(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        // Run any fetches the last key press queued up
        app.tick().await;

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
