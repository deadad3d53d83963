//! JSON output formatting for pomogo.

use serde::Serialize;
use serde_json::json;

use crate::error::PomogoError;
use crate::timer::Session;

/// Format the session history as JSON.
///
/// # Errors
///
/// Returns `PomogoError::Parse` if JSON serialization fails.
pub fn format_history_json(sessions: &[Session]) -> Result<String, PomogoError> {
    let output = json!({
        "count": sessions.len(),
        "sessions": sessions
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type.
///
/// # Errors
///
/// Returns `PomogoError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PomogoError> {
    Ok(serde_json::to_string_pretty(value)?)
}
