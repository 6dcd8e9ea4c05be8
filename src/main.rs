//! clima - Look up current weather by city and country
//!
//! A terminal UI widget that queries OpenWeather for current conditions,
//! colors the result by temperature band, and keeps a persistent list of
//! favorite cities.

mod app;
mod cli;
mod config;
mod data;
mod display;
mod favorites;
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

/// Renders the UI, with the help overlay on top when requested
fn render_ui(frame: &mut ratatui::Frame, app: &App) {
    ui::render_search(frame, app);
    if app.show_help {
        ui::render_help_overlay(frame);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Validate CLI arguments before touching the terminal
    let cli = Cli::parse();
    let startup = StartupConfig::from_cli(&cli)?;

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app instance; favorites load once here
    let mut app = App::with_startup_config(startup);

    // Main event loop
    loop {
        // Render UI
        terminal.draw(|f| render_ui(f, &app))?;

        // Run at most one query at a time, to completion. Drawing the
        // loading frame first makes the state flip visible; the await below
        // is the loop's only suspension point.
        if app.query_requested {
            app.query_requested = false;
            app.begin_query();
            terminal.draw(|f| render_ui(f, &app))?;
            app.run_query().await;
            continue;
        }

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
