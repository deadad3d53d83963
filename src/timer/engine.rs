//! The countdown state machine.
//!
//! One engine instance owns the current topic, the remaining-seconds
//! counter, and the in-memory history of completed sessions. All state
//! transitions are synchronous; the hosting loop (see [`crate::tui`])
//! owns the one-second tick cadence and simply stops calling
//! [`Engine::tick`] when the countdown leaves the running state, so a
//! stale tick can never decrement a counter that was already reset.
//!
//! Every transition has an `_at` variant taking an explicit timestamp so
//! tests can drive time; the plain methods use `Utc::now()`.

use chrono::{DateTime, Duration, Utc};

use super::session::Session;
use super::store::HistoryStore;
use crate::error::PomogoError;

/// Default countdown length: 25 minutes.
pub const DEFAULT_COUNTDOWN_SECONDS: u32 = 1500;

/// Observable state of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Fully reset, waiting for a topic and a start.
    Idle,
    /// Counting down.
    Running,
    /// Interrupted mid-countdown; counter and armed time retained.
    Paused,
}

impl std::fmt::Display for TimerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Running => write!(f, "Running"),
            Self::Paused => write!(f, "Paused"),
        }
    }
}

/// The session timer engine.
///
/// Generic over its persistence port so the state machine can be tested
/// with a mocked store.
pub struct Engine<S: HistoryStore> {
    store: S,
    topic: String,
    countdown_seconds: u32,
    remaining_seconds: u32,
    running: bool,
    armed_at: Option<DateTime<Utc>>,
    history: Vec<Session>,
}

impl<S: HistoryStore> Engine<S> {
    /// Create an engine with the default 25-minute countdown, loading any
    /// persisted history through the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails to load. A corrupt history file
    /// is not an error; the store substitutes an empty history for it.
    pub fn new(store: S) -> Result<Self, PomogoError> {
        Self::with_countdown(store, DEFAULT_COUNTDOWN_SECONDS)
    }

    /// Create an engine with a custom countdown length in seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails to load.
    pub fn with_countdown(store: S, countdown_seconds: u32) -> Result<Self, PomogoError> {
        let history = store.load()?;
        Ok(Self {
            store,
            topic: String::new(),
            countdown_seconds,
            remaining_seconds: countdown_seconds,
            running: false,
            armed_at: None,
            history,
        })
    }

    /// Start the countdown, or resume it if paused.
    ///
    /// A no-op when already running or when the topic is empty after
    /// trimming. Arming (capturing the start timestamp) happens only on
    /// the transition out of the fully-reset state; resuming from pause
    /// keeps the original armed time.
    pub fn start(&mut self) {
        self.start_at(Utc::now());
    }

    /// [`Engine::start`] with an explicit current time.
    pub fn start_at(&mut self, now: DateTime<Utc>) {
        if self.running || self.topic.trim().is_empty() {
            return;
        }
        if self.armed_at.is_none() {
            self.armed_at = Some(now);
        }
        self.running = true;
    }

    /// Pause a running countdown, keeping the counter and armed time.
    ///
    /// Because the armed time is retained, wall-clock time spent paused
    /// still counts toward the completed session's duration.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Reset to the idle state without recording anything.
    ///
    /// The topic and the history are left untouched.
    pub fn stop(&mut self) {
        self.running = false;
        self.remaining_seconds = self.countdown_seconds;
        self.armed_at = None;
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the completed session when this tick brought the counter to
    /// zero: the session is appended to the history, the history is saved
    /// through the store, and the engine resets to idle with the topic
    /// cleared. Ticks outside the running state are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated history fails; the
    /// session is still recorded in memory.
    pub fn tick(&mut self) -> Result<Option<Session>, PomogoError> {
        self.tick_at(Utc::now())
    }

    /// [`Engine::tick`] with an explicit current time.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated history fails.
    pub fn tick_at(&mut self, now: DateTime<Utc>) -> Result<Option<Session>, PomogoError> {
        if !self.running || self.remaining_seconds == 0 {
            return Ok(None);
        }

        self.remaining_seconds -= 1;
        if self.remaining_seconds > 0 {
            return Ok(None);
        }

        // A running countdown always carries an armed timestamp.
        let Some(armed_at) = self.armed_at.take() else {
            self.stop();
            return Ok(None);
        };

        let topic = std::mem::take(&mut self.topic);
        let session = Session::completed(topic, armed_at, now);

        self.running = false;
        self.remaining_seconds = self.countdown_seconds;
        self.history.push(session.clone());
        self.store.save(&self.history)?;

        Ok(Some(session))
    }

    /// Replace the current topic.
    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }

    /// Get the current topic.
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Get the current state.
    #[must_use]
    pub fn state(&self) -> TimerState {
        if self.running {
            TimerState::Running
        } else if self.armed_at.is_some() {
            TimerState::Paused
        } else {
            TimerState::Idle
        }
    }

    /// Whether the countdown is currently ticking.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Remaining time as a chrono duration, for formatting.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        Duration::seconds(i64::from(self.remaining_seconds))
    }

    /// When the countdown was armed, if it has been.
    #[must_use]
    pub const fn armed_at(&self) -> Option<DateTime<Utc>> {
        self.armed_at
    }

    /// The recorded sessions, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Session] {
        &self.history
    }

    /// Progress through the countdown (0.0 at start, 1.0 at completion).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.countdown_seconds == 0 {
            return 1.0;
        }
        1.0 - (f64::from(self.remaining_seconds) / f64::from(self.countdown_seconds))
    }
}
