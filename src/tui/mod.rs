//! Terminal UI for Rewind Games.
//!
//! A single synchronous loop: draw the current state, block for one input
//! event, translate it into a game event, dispatch, repeat.

mod app;
mod input;
mod theme;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io::{self, Write};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

use crate::config::UiConfig;

pub use app::{Action, App, Focus};
pub use theme::Theme;
pub use ui::{GRID_HEIGHT, GRID_WIDTH, ScreenLayout, draw};

/// Runs the TUI until the user quits.
pub fn run_tui(config: UiConfig) -> Result<()> {
    init_file_tracing(&config)?;
    info!(source = %config.source(), ?config, "Config loaded");
    let theme = Theme::from_config(&config)?;

    info!("Starting Rewind Games TUI");

    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(theme));
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    info!("TUI exited");

    res
}

/// Raw mode plus the alternate screen, undone when dropped.
///
/// Restoration runs on every exit path, including a failed setup step or a
/// panic unwinding out of the event loop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = restore_terminal(&mut io::stdout()) {
            error!(error = %err, "Failed to restore terminal");
        }
    }
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Every step is attempted even if an earlier one fails; the first error is
/// returned.
fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show);
    raw.and(screen)
}

/// Logs to a file so tracing output never lands on the alternate screen.
fn init_file_tracing(config: &UiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

#[instrument(skip_all)]
fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        let mut layout = ScreenLayout::default();
        terminal.draw(|f| layout = ui::draw(f, &app))?;
        app.set_layout(layout);

        let action = match event::read()? {
            // Skip key release events (crossterm fires both press and release on some platforms).
            Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => Action::Stay,
        };

        match action {
            Action::Stay => {}
            Action::Dispatch(event) => {
                app.dispatch(event);
            }
            Action::Quit => {
                debug!("User quit");
                return Ok(());
            }
        }
    }
}
