//! Interactive timer command implementation.

use crate::cli::args::TimerArgs;
use crate::config::Config;
use crate::error::PomogoError;
use crate::timer::{Engine, JsonHistoryStore};

/// Run the interactive timer.
///
/// # Errors
///
/// Returns an error if the countdown length is zero, the history cannot
/// be loaded, or the terminal cannot be set up.
pub fn timer(args: TimerArgs, config: &Config) -> Result<String, PomogoError> {
    let countdown_seconds = args
        .minutes
        .map_or_else(|| config.timer.countdown_seconds(), |m| m.saturating_mul(60));
    if countdown_seconds == 0 {
        // A zero-length countdown could never complete, so it could never
        // record a session.
        return Err(PomogoError::Config(
            "Countdown length must be at least 1 minute (check timer.countdown_minutes in config.yaml)"
                .to_string(),
        ));
    }

    let theme = args.theme.unwrap_or(config.general.theme);

    let store = JsonHistoryStore::new()?;
    let engine = Engine::with_countdown(store, countdown_seconds)?;

    crate::tui::run(engine, theme)?;
    Ok(String::new())
}
