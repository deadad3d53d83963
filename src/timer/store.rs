//! Session history persistence.
//!
//! The whole history lives in a single JSON document
//! (`~/.pomogo/history.json`), an array of session records. Every save
//! rewrites the file; the last write wins. The engine talks to storage
//! only through the [`HistoryStore`] port so the state machine can be
//! tested against a mock.

use std::path::PathBuf;

use colored::Colorize;

use super::session::Session;
use crate::config::Paths;
use crate::error::PomogoError;

/// Persistence port for the session history.
#[cfg_attr(test, mockall::automock)]
pub trait HistoryStore {
    /// Load the full history, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read. A
    /// corrupt document is not an error; implementations substitute an
    /// empty history.
    fn load(&self) -> Result<Vec<Session>, PomogoError>;

    /// Persist the full history, replacing whatever was stored before.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be serialized or written.
    fn save(&self, history: &[Session]) -> Result<(), PomogoError>;
}

/// Serialize a history to the canonical on-disk text.
///
/// Export uses the same function, which keeps exported files byte-for-byte
/// equal to what is stored.
///
/// # Errors
///
/// Returns `PomogoError::Parse` if serialization fails.
pub fn serialize_history(history: &[Session]) -> Result<String, PomogoError> {
    Ok(serde_json::to_string_pretty(history)?)
}

/// File-backed history store.
pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
    /// Create a store at the default location (`~/.pomogo/history.json`).
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn new() -> Result<Self, PomogoError> {
        let paths = Paths::default();
        paths.ensure_dirs()?;
        Ok(Self {
            path: paths.history_file,
        })
    }

    /// Create a store backed by a specific file (for testing).
    #[must_use]
    pub const fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl HistoryStore for JsonHistoryStore {
    fn load(&self) -> Result<Vec<Session>, PomogoError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str(&content) {
            Ok(history) => Ok(history),
            Err(e) => {
                // Corrupt history is recoverable: start over with an empty
                // log rather than refusing to run.
                eprintln!(
                    "{}: could not parse {}: {e}; starting with empty history",
                    "warning".yellow().bold(),
                    self.path.display()
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, history: &[Session]) -> Result<(), PomogoError> {
        let content = serialize_history(history)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
