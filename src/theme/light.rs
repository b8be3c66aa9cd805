// Light palette
//
// The daytime look: warm paper background, ink text, amber accents. Orb
// tones are deepened so they stay visible against the bright page.

use super::Palette;
use ratatui::style::Color;

/// Page background - warm paper
/// RGB: (245, 242, 234)
pub const PAPER: Color = Color::Rgb(245, 242, 234);

/// Primary text - soft ink
/// RGB: (51, 58, 74)
pub const INK: Color = Color::Rgb(51, 58, 74);

/// Muted text and hero pattern - faded graphite
/// RGB: (148, 152, 165)
pub const GRAPHITE: Color = Color::Rgb(148, 152, 165);

/// Accent - noon amber
/// RGB: (202, 138, 4)
pub const NOON_AMBER: Color = Color::Rgb(202, 138, 4);

/// Borders - light sand
/// RGB: (196, 189, 173)
pub const SAND_BORDER: Color = Color::Rgb(196, 189, 173);

/// Orb colors, back to front
pub const ORB_INDIGO: Color = Color::Rgb(99, 102, 241);
pub const ORB_PINE: Color = Color::Rgb(13, 148, 136);
pub const ORB_CORAL: Color = Color::Rgb(225, 72, 120);

pub const PALETTE: Palette = Palette {
    background: PAPER,
    text: INK,
    muted: GRAPHITE,
    accent: NOON_AMBER,
    border: SAND_BORDER,
    orbs: [ORB_INDIGO, ORB_PINE, ORB_CORAL],
};
