//! Completed session records.
//!
//! A [`Session`] is written exactly once, when a countdown runs all the way
//! to zero. The serialized shape (camelCase keys, ISO-8601 timestamps)
//! doubles as the on-disk history layout and the export format.

use chrono::{DateTime, Duration, Local, Utc};
use serde::{Deserialize, Serialize};

/// One completed countdown cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Label the user chose when the countdown was armed.
    pub topic: String,
    /// When the countdown was armed.
    pub start_time: DateTime<Utc>,
    /// When the countdown reached zero.
    pub end_time: DateTime<Utc>,
    /// Whole seconds between start and end.
    ///
    /// Derived from the wall-clock delta, not from the decremented counter,
    /// so it can differ from the configured countdown length if the clock
    /// drifts or the session spent time paused.
    pub duration_seconds: i64,
}

impl Session {
    /// Build a completed session from its wall-clock endpoints.
    #[must_use]
    pub fn completed(topic: String, start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        let duration_seconds = end_time.signed_duration_since(start_time).num_seconds();
        Self {
            topic,
            start_time,
            end_time,
            duration_seconds,
        }
    }

    /// Get the start time in the local timezone, for display.
    #[must_use]
    pub fn start_time_local(&self) -> DateTime<Local> {
        self.start_time.with_timezone(&Local)
    }
}

/// Format a duration as MM:SS.
#[must_use]
pub fn format_duration_mmss(d: Duration) -> String {
    let total_seconds = d.num_seconds().max(0);
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.num_minutes();

    if total_minutes < 1 {
        let seconds = d.num_seconds();
        return format!("{} second{}", seconds, if seconds == 1 { "" } else { "s" });
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        if minutes > 0 {
            format!(
                "{} hour{}, {} minute{}",
                hours,
                if hours == 1 { "" } else { "s" },
                minutes,
                if minutes == 1 { "" } else { "s" }
            )
        } else {
            format!("{} hour{}", hours, if hours == 1 { "" } else { "s" })
        }
    } else {
        format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_completed_derives_duration_from_wall_clock() {
        let session = Session::completed("math".to_string(), t0(), t0() + Duration::seconds(1500));
        assert_eq!(session.duration_seconds, 1500);
    }

    #[test]
    fn test_completed_truncates_sub_second_remainder() {
        let end = t0() + Duration::milliseconds(1500 * 1000 + 734);
        let session = Session::completed("math".to_string(), t0(), end);
        assert_eq!(session.duration_seconds, 1500);
    }

    #[test]
    fn test_serialized_shape_is_camel_case() {
        let session = Session::completed("math".to_string(), t0(), t0() + Duration::seconds(60));
        let json = serde_json::to_string(&session).unwrap();

        assert!(json.contains("\"topic\":\"math\""));
        assert!(json.contains("\"startTime\":\"2025-06-01T09:00:00Z\""));
        assert!(json.contains("\"endTime\":\"2025-06-01T09:01:00Z\""));
        assert!(json.contains("\"durationSeconds\":60"));
    }

    #[test]
    fn test_round_trip() {
        let session = Session::completed("deep work".to_string(), t0(), t0() + Duration::seconds(1500));
        let json = serde_json::to_string(&session).unwrap();
        let parsed: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, session);
    }

    #[test]
    fn test_format_duration_mmss() {
        assert_eq!(format_duration_mmss(Duration::minutes(25)), "25:00");
        assert_eq!(format_duration_mmss(Duration::seconds(90)), "01:30");
        assert_eq!(format_duration_mmss(Duration::seconds(0)), "00:00");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::minutes(25)), "25 minutes");
        assert_eq!(format_duration(Duration::minutes(1)), "1 minute");
        assert_eq!(format_duration(Duration::hours(2)), "2 hours");
        assert_eq!(format_duration(Duration::minutes(90)), "1 hour, 30 minutes");
        assert_eq!(format_duration(Duration::seconds(42)), "42 seconds");
    }
}
