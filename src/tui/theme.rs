//! Color palettes for the timer UI.
//!
//! The theme flag only picks a palette; nothing else in the UI depends
//! on it.

use ratatui::style::Color;

use crate::config::Theme;

/// Colors used by the timer screen.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Highlight color for the countdown and borders.
    pub accent: Color,
    /// Primary text color.
    pub text: Color,
    /// Dimmed text color for hints.
    pub dim: Color,
}

/// Resolve the palette for a theme.
#[must_use]
pub const fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            accent: Color::Cyan,
            text: Color::White,
            dim: Color::DarkGray,
        },
        Theme::Light => Palette {
            accent: Color::Blue,
            text: Color::Black,
            dim: Color::Gray,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ_by_theme() {
        let dark = palette(Theme::Dark);
        let light = palette(Theme::Light);
        assert_ne!(dark.accent, light.accent);
        assert_ne!(dark.text, light.text);
    }
}
