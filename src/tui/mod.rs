//! Terminal User Interface (TUI) for the timer.
//!
//! A full-screen countdown built with ratatui and crossterm. The loop
//! owns the one-second tick cadence: while the engine is running it calls
//! `tick` once per elapsed second, and any transition out of the running
//! state simply stops producing ticks, so no stale tick survives a pause,
//! stop, or completion. Quitting tears the loop down and with it the
//! schedule.

mod app;
mod event;
mod theme;
mod ui;

pub use app::App;
pub use theme::Palette;

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Theme;
use crate::error::PomogoError;
use crate::timer::{Engine, HistoryStore};

/// How often the countdown advances.
const TICK_RATE: Duration = Duration::from_secs(1);

/// Run the timer UI until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal fails to initialize or drawing fails.
pub fn run<S: HistoryStore>(engine: Engine<S>, theme: Theme) -> Result<(), PomogoError> {
    // Setup terminal
    enable_raw_mode().map_err(|e| PomogoError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| PomogoError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| PomogoError::Terminal(format!("Failed to create terminal: {e}")))?;

    let mut app = App::new(engine, theme);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend, S: HistoryStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> Result<(), PomogoError> {
    let mut last_tick = Instant::now();

    loop {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PomogoError::Terminal(format!("Failed to draw: {e}")))?;

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        event::handle_events(app, timeout)?;

        if last_tick.elapsed() >= TICK_RATE {
            app.on_tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
