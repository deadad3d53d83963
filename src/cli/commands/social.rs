//! Social link command implementation.

use colored::Colorize;
use serde_json::json;

use crate::cli::args::OutputFormat;
use crate::error::PomogoError;
use crate::output::to_json;
use crate::social;

/// Open a social profile in the browser.
///
/// An unknown platform lists the known ones instead of failing with a
/// bare error.
///
/// # Errors
///
/// Returns an error if the browser cannot be launched or JSON
/// serialization fails.
pub fn social(platform: &str, format: OutputFormat) -> Result<String, PomogoError> {
    match social::open(platform) {
        Ok(url) => match format {
            OutputFormat::Json => to_json(&json!({
                "platform": platform.to_lowercase(),
                "url": url,
            })),
            OutputFormat::Pretty => Ok(format!("Opening {url}")),
        },
        Err(PomogoError::NotFound(_)) => {
            let known = social::platforms().join(", ");
            Ok(format!(
                "{}: unknown platform '{platform}'\nKnown platforms: {known}",
                "warning".yellow().bold()
            ))
        }
        Err(e) => Err(e),
    }
}
