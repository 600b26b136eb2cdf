//! Color palette for gemfeed's terminal UI.

use ratatui::style::Color;

/// Application theme palette used by rendering code.
pub struct Theme {
    /// Primary background color.
    pub base: Color,
    /// Component background for buttons and badges.
    pub surface: Color,
    /// Muted border and separator color.
    pub overlay: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for summaries and metadata.
    pub subtext: Color,
    /// Accent for the selection highlight.
    pub sapphire: Color,
    /// Accent for interactive controls (toggle buttons).
    pub mauve: Color,
    /// Accent for quotes.
    pub lavender: Color,
    /// Success/positive accent.
    pub green: Color,
    /// Warning accent.
    pub yellow: Color,
    /// Error accent (load failures).
    pub red: Color,
}

/// Construct a [`Color::Rgb`] from an 8-bit RGB triplet.
fn hex(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Return the application's theme palette.
#[must_use]
pub fn theme() -> Theme {
    Theme {
        base: hex((0x1f, 0x23, 0x2b)),
        surface: hex((0x3b, 0x42, 0x52)),
        overlay: hex((0x6b, 0x72, 0x89)),
        text: hex((0xd8, 0xde, 0xe9)),
        subtext: hex((0xa3, 0xab, 0xc2)),
        sapphire: hex((0x88, 0xc0, 0xd0)),
        mauve: hex((0xb4, 0x8e, 0xad)),
        lavender: hex((0xb1, 0xbc, 0xf0)),
        green: hex((0xa3, 0xbe, 0x8c)),
        yellow: hex((0xeb, 0xcb, 0x8b)),
        red: hex((0xbf, 0x61, 0x6a)),
    }
}
