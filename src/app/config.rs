// Page behavior constants
//
// The numbers behind the four page reactions: hover transform values,
// transition specs, parallax factors, and the fixed page content.

use crate::motion::{Easing, Transition};
use std::time::Duration;

// ============================================================================
// Constants
// ============================================================================

/// Icon zoom applied while the pointer is over a card
pub const HOVER_SCALE: f32 = 1.2;

/// Icon tilt in degrees clockwise while the pointer is over a card
pub const HOVER_ROTATION_DEG: f32 = 10.0;

/// Icon scale at rest
pub const REST_SCALE: f32 = 1.0;

/// Icon rotation at rest
pub const REST_ROTATION_DEG: f32 = 0.0;

/// Transition written on hover enter. Hover leave deliberately writes no
/// transition, so a quick re-entry animates with whatever was last set.
pub const HOVER_TRANSITION: Transition =
    Transition::new(Duration::from_millis(300), Easing::Ease);

/// Transition written on every orb retarget
pub const PARALLAX_TRANSITION: Transition =
    Transition::new(Duration::from_millis(300), Easing::EaseOut);

/// The hero background travels at half the scroll speed
pub const SCROLL_PARALLAX_FACTOR: f64 = 0.5;

/// Rows added to the scroll target per wheel notch or arrow key press
pub const SCROLL_STEP: i32 = 2;

/// Rows added to the scroll target per PageUp/PageDown press
pub const PAGE_SCROLL_STEP: i32 = 8;

/// Rows the smooth scroll covers per tick while gliding to its target
pub const SMOOTH_SCROLL_ROWS_PER_TICK: u16 = 1;

/// Event poll timeout in milliseconds; also paces the render of
/// in-flight transitions
pub const TICK_INTERVAL_MS: u64 = 50;

/// Virtual pixels per terminal column when projecting orb offsets.
/// A row covers roughly twice the visual distance of a column.
pub const PX_PER_CELL_X: f64 = 8.0;

/// Virtual pixels per terminal row
pub const PX_PER_CELL_Y: f64 = 16.0;

// ============================================================================
// Fixed page content
// ============================================================================

/// Static description of one hobby card
#[derive(Debug, Clone, Copy)]
pub struct CardSpec {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

/// The page's card set, in document order
pub const CARDS: [CardSpec; 2] = [
    CardSpec {
        icon: "💻",
        title: "Coding",
        blurb: "Small tools, long evenings.",
    },
    CardSpec {
        icon: "🚀",
        title: "Space",
        blurb: "Orbits and the night sky.",
    },
];

/// Orb anchor positions as fractions of the page area, in document order.
/// Document order also decides each orb's parallax speed.
pub const ORB_ANCHORS: [(f64, f64); 3] = [(0.16, 0.22), (0.74, 0.18), (0.46, 0.62)];
