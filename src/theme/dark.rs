// Dark palette
//
// The default "late night" look: deep blue page, soft starlight text,
// violet accents. Orbs get cool jewel tones that read well on the dark
// background.

use super::Palette;
use ratatui::style::Color;

/// Page background - near-black blue
/// RGB: (13, 17, 33)
pub const MIDNIGHT: Color = Color::Rgb(13, 17, 33);

/// Primary text - pale starlight
/// RGB: (214, 222, 235)
pub const STARLIGHT: Color = Color::Rgb(214, 222, 235);

/// Muted text and hero pattern - desaturated slate
/// RGB: (96, 108, 140)
pub const SLATE: Color = Color::Rgb(96, 108, 140);

/// Accent - aurora violet
/// RGB: (167, 139, 250)
pub const AURORA_VIOLET: Color = Color::Rgb(167, 139, 250);

/// Borders - dimmed violet-grey
/// RGB: (73, 80, 112)
pub const DUSK_BORDER: Color = Color::Rgb(73, 80, 112);

/// Orb colors, back to front
pub const ORB_VIOLET: Color = Color::Rgb(139, 123, 224);
pub const ORB_TEAL: Color = Color::Rgb(94, 196, 188);
pub const ORB_ROSE: Color = Color::Rgb(235, 130, 170);

pub const PALETTE: Palette = Palette {
    background: MIDNIGHT,
    text: STARLIGHT,
    muted: SLATE,
    accent: AURORA_VIOLET,
    border: DUSK_BORDER,
    orbs: [ORB_VIOLET, ORB_TEAL, ORB_ROSE],
};
