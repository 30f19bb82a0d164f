//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use crate::audit::AuditLogger;
use crate::config::paths::SpendPaths;
use crate::config::settings::Settings;
use crate::storage::SessionStore;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
///
/// The session store lives for the duration of this call only; nothing
/// entered is persisted once the TUI exits.
pub fn run_tui(settings: &Settings, paths: &SpendPaths) -> Result<()> {
    let mut store = if settings.audit_enabled {
        SessionStore::with_audit_logger(AuditLogger::new(paths.audit_log()))
    } else {
        SessionStore::new()
    };

    let mut terminal = init_terminal()?;
    let result = run_loop(&mut terminal, &mut store, settings);
    restore_terminal()?;

    tracing::info!(months = store.len(), "session ended");
    result
}

fn run_loop(terminal: &mut Tui, store: &mut SessionStore, settings: &Settings) -> Result<()> {
    let mut app = App::new(store, settings);
    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms));
    tracing::info!(month = %app.today, "session started");

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, &mut app))?;
        handle_event(&mut app, events.next()?)?;
    }

    Ok(())
}
