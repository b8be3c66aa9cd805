// Theme module - theme flag, glyph mapping, and palette selection
//
// The applied theme is a single marker the render layer keys off to pick a
// color palette. Everything color-related lives in the palettes; the
// controller code only ever flips the marker.

pub mod dark;
pub mod light;

use ratatui::style::Color;

/// The page's two-valued theme flag. Persisted by name ("dark" / "light").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Storage name for this theme.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse a storage name. Unrecognized values are rejected so callers
    /// fall back to the default.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// Glyph shown in the toggle control: moon for dark, sun for light.
    pub fn glyph(self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀️",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Color palette consumed by the render layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Page background fill
    pub background: Color,
    /// Primary body text
    pub text: Color,
    /// Dimmed text and the hero background pattern
    pub muted: Color,
    /// Titles, the toggle control, and hovered icons
    pub accent: Color,
    /// Card and panel borders
    pub border: Color,
    /// Orb colors in document order (nearest orb last)
    pub orbs: [Color; 3],
}

/// Select the palette for the applied theme.
pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &dark::PALETTE,
        Theme::Light => &light::PALETTE,
    }
}
