//! Color palettes for the TUI.
//!
//! Two built-in palettes, selected by the persisted dark-mode flag. There
//! is no theme configuration file; the toggle is the whole surface.

use ratatui::style::Color;

/// Resolved color palette used by the rendering layer.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Screen background.
    pub base: Color,
    /// Pane background.
    pub surface: Color,
    /// Primary text color.
    pub text: Color,
    /// Secondary text (hints, counters).
    pub subtext: Color,
    /// Accent for selected languages and active borders.
    pub accent: Color,
    /// Default border color.
    pub border: Color,
    /// Highlight background for dropdown selection.
    pub highlight: Color,
    /// Error/warning text.
    pub warning: Color,
}

/// Dark palette.
#[must_use]
pub const fn dark() -> Theme {
    Theme {
        base: Color::Rgb(24, 24, 32),
        surface: Color::Rgb(32, 32, 44),
        text: Color::Rgb(220, 220, 230),
        subtext: Color::Rgb(140, 140, 160),
        accent: Color::Rgb(120, 170, 255),
        border: Color::Rgb(70, 70, 90),
        highlight: Color::Rgb(55, 55, 80),
        warning: Color::Rgb(240, 160, 90),
    }
}

/// Light palette.
#[must_use]
pub const fn light() -> Theme {
    Theme {
        base: Color::Rgb(245, 245, 248),
        surface: Color::Rgb(255, 255, 255),
        text: Color::Rgb(30, 30, 40),
        subtext: Color::Rgb(110, 110, 130),
        accent: Color::Rgb(30, 90, 200),
        border: Color::Rgb(180, 180, 195),
        highlight: Color::Rgb(215, 225, 245),
        warning: Color::Rgb(180, 90, 20),
    }
}

/// Palette for the given dark-mode flag.
#[must_use]
pub const fn theme(dark_mode: bool) -> Theme {
    if dark_mode { dark() } else { light() }
}
