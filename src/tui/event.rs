//! Event handling for the timer UI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::PomogoError;
use crate::timer::{HistoryStore, TimerState};
use crate::tui::app::App;

/// Poll for terminal events and apply them to the app.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events<S: HistoryStore>(
    app: &mut App<S>,
    timeout: Duration,
) -> Result<(), PomogoError> {
    if !event::poll(timeout).map_err(|e| PomogoError::Terminal(format!("Event poll failed: {e}")))? {
        return Ok(());
    }

    if let Event::Key(key) =
        event::read().map_err(|e| PomogoError::Terminal(format!("Event read failed: {e}")))?
    {
        apply_key(app, key);
    }

    Ok(())
}

/// Apply one key event to the app.
///
/// The topic is editable only while idle; once a countdown is armed
/// (running or paused) the keyboard is a control surface: `p` pauses,
/// Enter resumes, `x` stops, `q`/Esc quits.
pub fn apply_key<S: HistoryStore>(app: &mut App<S>, key: KeyEvent) {
    // Windows terminals report both press and release.
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match app.engine.state() {
        TimerState::Running => match key.code {
            KeyCode::Char('p') => app.pause(),
            KeyCode::Char('x') => app.stop(),
            KeyCode::Char('q') | KeyCode::Esc => app.quit(),
            _ => {}
        },
        TimerState::Paused => match key.code {
            KeyCode::Enter => app.start(),
            KeyCode::Char('x') => app.stop(),
            KeyCode::Char('q') | KeyCode::Esc => app.quit(),
            _ => {}
        },
        TimerState::Idle => match key.code {
            KeyCode::Esc => app.quit(),
            KeyCode::Enter => app.start(),
            KeyCode::Backspace => app.pop_topic_char(),
            KeyCode::Char(c) => app.push_topic_char(c),
            _ => {}
        },
    }
}
