//! Human-readable output formatting for pomogo.

use chrono::Duration;
use colored::Colorize;

use crate::timer::{format_duration_mmss, Session};

/// Format the session history as a table.
#[must_use]
pub fn format_history_pretty(sessions: &[Session]) -> String {
    if sessions.is_empty() {
        return "No sessions recorded yet.\n\nStart one with: pomogo timer".to_string();
    }

    let mut output = Vec::new();
    output.push("Session History".bold().to_string());
    output.push("═".repeat(60));
    output.push(format!(
        "{:<12} {:<7} {:<9} {}",
        "Date", "Start", "Duration", "Topic"
    ));
    output.push("─".repeat(60));

    for session in sessions {
        let started = session.start_time_local();
        output.push(format!(
            "{:<12} {:<7} {:<9} {}",
            started.format("%Y-%m-%d"),
            started.format("%H:%M"),
            format_duration_mmss(Duration::seconds(session.duration_seconds)),
            truncate_topic(&session.topic, 28),
        ));
    }

    output.push("─".repeat(60));
    let total: i64 = sessions.iter().map(|s| s.duration_seconds).sum();
    output.push(format!(
        "{} session{}, {} total",
        sessions.len(),
        if sessions.len() == 1 { "" } else { "s" },
        format_duration_mmss(Duration::seconds(total)),
    ));

    output.join("\n")
}

fn truncate_topic(topic: &str, max: usize) -> String {
    if topic.chars().count() > max {
        let head: String = topic.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        topic.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn make_session(topic: &str, seconds: i64) -> Session {
        let t0 = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        Session::completed(topic.to_string(), t0, t0 + Duration::seconds(seconds))
    }

    #[test]
    fn test_empty_history_hint() {
        let result = format_history_pretty(&[]);
        assert!(result.contains("No sessions recorded"));
        assert!(result.contains("pomogo timer"));
    }

    #[test]
    fn test_history_table_rows() {
        let sessions = vec![make_session("math", 1500), make_session("writing", 900)];
        let result = format_history_pretty(&sessions);

        assert!(result.contains("math"));
        assert!(result.contains("writing"));
        assert!(result.contains("25:00"));
        assert!(result.contains("15:00"));
        assert!(result.contains("2 sessions"));
        assert!(result.contains("40:00 total"));
    }

    #[test]
    fn test_truncate_topic() {
        assert_eq!(truncate_topic("short", 28), "short");
        let long = "a".repeat(40);
        let truncated = truncate_topic(&long, 28);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 28);
    }
}
