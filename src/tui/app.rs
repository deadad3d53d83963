//! Application state for the timer UI.

use chrono::Duration;

use crate::config::Theme;
use crate::timer::{format_duration_mmss, Engine, HistoryStore, TimerState};

/// Application state.
pub struct App<S: HistoryStore> {
    /// The countdown engine.
    pub engine: Engine<S>,
    /// Color theme.
    pub theme: Theme,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<S: HistoryStore> App<S> {
    /// Create a new app instance around an engine.
    pub fn new(engine: Engine<S>, theme: Theme) -> Self {
        Self {
            engine,
            theme,
            status: Some("Type a topic, press Enter to start".to_string()),
            should_quit: false,
        }
    }

    /// Start or resume the countdown.
    pub fn start(&mut self) {
        if self.engine.topic().trim().is_empty() {
            self.status = Some("Enter a topic first".to_string());
            return;
        }

        let resuming = self.engine.state() == TimerState::Paused;
        self.engine.start();
        if self.engine.is_running() {
            self.status = Some(if resuming {
                "Resumed".to_string()
            } else {
                format!("Focusing on \"{}\"", self.engine.topic())
            });
        }
    }

    /// Pause the countdown.
    pub fn pause(&mut self) {
        if self.engine.is_running() {
            self.engine.pause();
            self.status = Some("Paused - press Enter to resume".to_string());
        }
    }

    /// Stop and reset without recording.
    pub fn stop(&mut self) {
        self.engine.stop();
        self.status = Some("Stopped - nothing recorded".to_string());
    }

    /// Advance the countdown by one second.
    ///
    /// A completed countdown records a session; a failed save is surfaced
    /// in the status line but does not abort the UI.
    pub fn on_tick(&mut self) {
        match self.engine.tick() {
            Ok(Some(session)) => {
                self.status = Some(format!(
                    "Recorded \"{}\" ({})",
                    session.topic,
                    format_duration_mmss(Duration::seconds(session.duration_seconds))
                ));
            }
            Ok(None) => {}
            Err(e) => {
                self.status = Some(format!("Session recorded, but saving failed: {e}"));
            }
        }
    }

    /// Append a character to the topic (only while idle).
    pub fn push_topic_char(&mut self, c: char) {
        if self.engine.state() == TimerState::Idle {
            let mut topic = self.engine.topic().to_string();
            topic.push(c);
            self.engine.set_topic(topic);
        }
    }

    /// Remove the last character from the topic (only while idle).
    pub fn pop_topic_char(&mut self) {
        if self.engine.state() == TimerState::Idle {
            let mut topic = self.engine.topic().to_string();
            topic.pop();
            self.engine.set_topic(topic);
        }
    }

    /// Request shutdown.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
