// Orb overlay rendering
//
// Paints the decorative orbs straight into the frame buffer after the
// page widgets, so they float over the content the way the originals
// float over the page. Each orb sits at its anchor plus the eased
// parallax offset, projected from virtual pixels to cells.

use crate::app::config::{PX_PER_CELL_X, PX_PER_CELL_Y};
use crate::app::AppState;
use crate::theme;
use ratatui::layout::{Position, Rect};
use ratatui::Frame;
use std::time::Instant;

/// Orb glyphs in document order; later orbs move faster and render larger
const ORB_GLYPHS: [&str; 3] = ["•", "●", "◉"];

pub fn render_orbs(f: &mut Frame, area: Rect, app: &AppState) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let palette = theme::palette(app.theme);
    let now = Instant::now();
    let buf = f.buffer_mut();

    for (index, orb) in app.orbs.iter().enumerate() {
        let (dx_px, dy_px) = orb.offset.at(now);
        let base_x = f64::from(area.x) + orb.anchor.0 * f64::from(area.width.saturating_sub(1));
        let base_y = f64::from(area.y) + orb.anchor.1 * f64::from(area.height.saturating_sub(1));
        let x = (base_x + dx_px / PX_PER_CELL_X).round();
        let y = (base_y + dy_px / PX_PER_CELL_Y).round();

        // Orbs pushed past the page edge just stay hidden this frame
        if x < f64::from(area.left())
            || x >= f64::from(area.right())
            || y < f64::from(area.top())
            || y >= f64::from(area.bottom())
        {
            continue;
        }

        if let Some(cell) = buf.cell_mut(Position::new(x as u16, y as u16)) {
            cell.set_symbol(ORB_GLYPHS[index % ORB_GLYPHS.len()]);
            cell.set_fg(palette.orbs[index % palette.orbs.len()]);
        }
    }
}
