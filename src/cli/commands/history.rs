//! History, export, and clear command implementations.

use std::path::PathBuf;

use colored::Colorize;
use serde_json::json;

use crate::cli::args::OutputFormat;
use crate::error::PomogoError;
use crate::output::{format_history, to_json};
use crate::timer::{serialize_history, HistoryStore};

/// Default export filename in the current directory.
const DEFAULT_EXPORT_FILE: &str = "pomogo-history.json";

/// Show recorded sessions.
///
/// # Errors
///
/// Returns an error if the history cannot be loaded or formatted.
pub fn history(
    store: &impl HistoryStore,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<String, PomogoError> {
    let sessions = store.load()?;

    let shown = match limit {
        Some(n) if n < sessions.len() => &sessions[sessions.len() - n..],
        _ => &sessions[..],
    };

    format_history(shown, format)
}

/// Export the full history to a file.
///
/// The written text is exactly what the store persists, so the exported
/// file round-trips through the history parser unchanged.
///
/// # Errors
///
/// Returns an error if the history cannot be loaded, serialized, or
/// written.
pub fn export(
    store: &impl HistoryStore,
    output_file: Option<PathBuf>,
    format: OutputFormat,
) -> Result<String, PomogoError> {
    let sessions = store.load()?;
    let path = output_file.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE));

    let content = serialize_history(&sessions)?;
    std::fs::write(&path, content)?;

    match format {
        OutputFormat::Json => to_json(&json!({
            "exported": sessions.len(),
            "path": path,
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} Exported {} session{} to {}",
            "✓".green(),
            sessions.len(),
            if sessions.len() == 1 { "" } else { "s" },
            path.display()
        )),
    }
}

/// Delete all recorded sessions.
///
/// # Errors
///
/// Returns an error when `force` is not set, or if the empty history
/// cannot be written.
pub fn clear(store: &impl HistoryStore, force: bool) -> Result<String, PomogoError> {
    if !force {
        return Err(PomogoError::Config(
            "This will delete all recorded sessions.\nUse --force to confirm.".to_string(),
        ));
    }

    store.save(&[])?;
    Ok("Session history cleared.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{JsonHistoryStore, Session};
    use chrono::{Duration, TimeZone, Utc};
    use tempfile::TempDir;

    fn seeded_store(dir: &TempDir, topics: &[&str]) -> JsonHistoryStore {
        let store = JsonHistoryStore::with_path(dir.path().join("history.json"));
        let t0 = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        let sessions: Vec<Session> = topics
            .iter()
            .enumerate()
            .map(|(i, topic)| {
                let start = t0 + Duration::hours(i as i64);
                Session::completed((*topic).to_string(), start, start + Duration::seconds(1500))
            })
            .collect();
        store.save(&sessions).unwrap();
        store
    }

    #[test]
    fn test_history_lists_all_sessions() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir, &["math", "writing"]);

        let output = history(&store, None, OutputFormat::Pretty).unwrap();
        assert!(output.contains("math"));
        assert!(output.contains("writing"));
    }

    #[test]
    fn test_history_limit_keeps_most_recent() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir, &["oldest", "middle", "newest"]);

        let output = history(&store, Some(2), OutputFormat::Pretty).unwrap();
        assert!(!output.contains("oldest"));
        assert!(output.contains("middle"));
        assert!(output.contains("newest"));
    }

    #[test]
    fn test_export_matches_stored_bytes() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir, &["math"]);
        let export_path = dir.path().join("export.json");

        export(&store, Some(export_path.clone()), OutputFormat::Pretty).unwrap();

        let stored = std::fs::read_to_string(dir.path().join("history.json")).unwrap();
        let exported = std::fs::read_to_string(&export_path).unwrap();
        assert_eq!(stored, exported);
    }

    #[test]
    fn test_export_empty_history() {
        let dir = TempDir::new().unwrap();
        let store = JsonHistoryStore::with_path(dir.path().join("history.json"));
        let export_path = dir.path().join("export.json");

        let output = export(&store, Some(export_path.clone()), OutputFormat::Pretty).unwrap();
        assert!(output.contains("0 sessions"));
        assert_eq!(std::fs::read_to_string(&export_path).unwrap(), "[]");
    }

    #[test]
    fn test_clear_requires_force() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir, &["math"]);

        assert!(clear(&store, false).is_err());
        assert_eq!(store.load().unwrap().len(), 1);

        clear(&store, true).unwrap();
        assert!(store.load().unwrap().is_empty());
    }
}
