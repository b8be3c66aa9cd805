// Hero banner rendering
//
// Top banner: the page title over a drifting background pattern. The
// pattern's vertical phase follows the hero layer's background position,
// which the scroll reaction keeps at half the scroll offset. The theme
// toggle control sits in the banner's top-right corner.

use crate::app::AppState;
use crate::theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Background motif rows, cycled by the parallax phase
const PATTERN_ROWS: [&str; 4] = [
    "  ·        ˚      ·          +      ",
    "      *         ·      ˚            ",
    " ˚         ·          +       ·     ",
    "     ·          *          ·      ˚ ",
];

const TITLE: &str = "P E T E   P O R T E R";
const TAGLINE: &str = "tinkerer and backyard astronomer";

pub fn render_hero(f: &mut Frame, area: Rect, app: &mut AppState) {
    let palette = theme::palette(app.theme);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        app.toggle_rect = None;
        return;
    }

    let phase = app.hero.map_or(0, |hero| hero.background_y.floor() as i64);
    let title_row = (inner.height / 2).saturating_sub(1);
    let tagline_row = title_row + 1;

    let title_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let pattern_style = Style::default().fg(palette.muted);

    let mut lines = Vec::with_capacity(inner.height as usize);
    for row in 0..inner.height {
        if row == title_row {
            lines.push(centered(TITLE, inner.width, title_style));
        } else if row == tagline_row {
            lines.push(centered(TAGLINE, inner.width, pattern_style));
        } else {
            lines.push(Line::from(Span::styled(
                pattern_line(inner.width, row, phase),
                pattern_style,
            )));
        }
    }

    f.render_widget(Paragraph::new(lines), inner);

    app.toggle_rect = render_toggle_control(f, inner, app.theme_glyph, palette);
}

/// One row of the background pattern, phase-shifted vertically by the
/// parallax position and repeated to fill the width.
fn pattern_line(width: u16, row: u16, phase: i64) -> String {
    let index = (i64::from(row) + phase).rem_euclid(PATTERN_ROWS.len() as i64) as usize;
    PATTERN_ROWS[index]
        .chars()
        .cycle()
        .take(width as usize)
        .collect()
}

fn centered(text: &str, width: u16, style: Style) -> Line<'static> {
    let pad = (width as usize).saturating_sub(text.width()) / 2;
    Line::from(vec![
        Span::raw(" ".repeat(pad)),
        Span::styled(text.to_string(), style),
    ])
}

/// Paint the clickable `[glyph]` control and report its hit region.
fn render_toggle_control(
    f: &mut Frame,
    inner: Rect,
    glyph: &str,
    palette: &theme::Palette,
) -> Option<Rect> {
    let label = format!("[{}]", glyph);
    let width = label.width() as u16;
    if inner.width < width + 2 {
        return None;
    }

    let control = Rect::new(inner.right() - width - 1, inner.y, width, 1);
    let paragraph = Paragraph::new(Span::styled(
        label,
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(paragraph, control);
    Some(control)
}
