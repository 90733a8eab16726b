//! TUI module
//!
//! Provides the terminal dashboard for Argo CD applications.
//! Built with ratatui; every keystroke is routed through the [`Dispatcher`].

mod app;
pub mod constants;
pub mod dispatch;
pub mod filter;
pub mod focus;
pub mod keybindings;
pub mod registry;
mod theme;
pub mod views;

pub use app::*;
pub use dispatch::{Dispatcher, UiEvent};
pub use filter::{FilterState, FilterTarget, filter_by_name};
pub use focus::{FocusController, FocusTarget, Navigation, Surface, SurfaceKind};
pub use keybindings::{Context, Key, Keystroke};
pub use registry::{CommandRegistry, EventResult, HelpEntry, RegistryError};
pub use theme::*;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Run the TUI application
pub async fn run_tui(mut app: App) -> Result<()> {
    tracing::debug!("Initializing TUI");

    // Bindings are checked before the terminal is touched
    let mut dispatcher = Dispatcher::with_default_bindings()?;
    let enable_mouse = app.config().ui.enable_mouse;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if enable_mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, &mut dispatcher).await;

    tracing::debug!("TUI shutting down");

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if enable_mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    dispatcher: &mut Dispatcher,
) -> Result<()> {
    // Show the empty frame while the first listing loads
    terminal.draw(|f| app.render(f, dispatcher.registry()))?;
    dispatcher.bootstrap(app).await;

    tracing::debug!("TUI initialized, entering main loop");

    while app.is_running() {
        terminal.draw(|f| app.render(f, dispatcher.registry()))?;

        // Handle input events (non-blocking)
        if event::poll(std::time::Duration::from_millis(
            constants::POLL_INTERVAL_MS,
        ))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(keystroke) = Keystroke::from_key_event(key) {
                        let ui_event = UiEvent::key(app, keystroke);
                        let result = dispatcher.dispatch(app, ui_event).await;
                        if !result.is_consumed() {
                            tracing::trace!("Unhandled key {}", keystroke);
                        }
                    }
                }
            }
        }

        app.check_status_message_timeout();
    }

    Ok(())
}
