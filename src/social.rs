//! Social profile links.
//!
//! A static platform name to URL mapping, plus a helper that opens the
//! profile in the system browser.

use crate::error::PomogoError;

/// Known platforms and their profile URLs.
const SOCIAL_URLS: &[(&str, &str)] = &[
    ("x", "https://x.com/notcoderguy"),
    ("github", "https://github.com/notcoderguy"),
    ("discord", "http://discordapp.com/users/501102080870580224"),
    ("threads", "https://threads.net/@notcoderguy"),
    ("email", "mailto:me@notcoderguy.com"),
];

/// Look up the profile URL for a platform (case-insensitive).
#[must_use]
pub fn url_for(platform: &str) -> Option<&'static str> {
    let normalized = platform.to_lowercase();
    SOCIAL_URLS
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, url)| *url)
}

/// Names of all known platforms.
#[must_use]
pub fn platforms() -> Vec<&'static str> {
    SOCIAL_URLS.iter().map(|(name, _)| *name).collect()
}

/// Open a platform's profile in the system browser.
///
/// # Errors
///
/// Returns `PomogoError::NotFound` for an unknown platform, or
/// `PomogoError::Io` if the browser cannot be launched.
pub fn open(platform: &str) -> Result<&'static str, PomogoError> {
    let url = url_for(platform)
        .ok_or_else(|| PomogoError::NotFound(format!("Platform '{platform}'")))?;
    webbrowser::open(url)?;
    Ok(url)
}
