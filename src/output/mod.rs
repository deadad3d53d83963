//! Output formatting for pomogo.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::PomogoError;
use crate::timer::Session;

pub use json::*;
pub use pretty::*;

/// Format the session history based on output format.
///
/// # Errors
///
/// Returns `PomogoError::Parse` if JSON serialization fails.
pub fn format_history(sessions: &[Session], format: OutputFormat) -> Result<String, PomogoError> {
    match format {
        OutputFormat::Pretty => Ok(format_history_pretty(sessions)),
        OutputFormat::Json => format_history_json(sessions),
    }
}
