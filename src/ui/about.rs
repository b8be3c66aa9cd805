// About section rendering
//
// The scrollable middle of the page. Measures its content against the
// visible height and reports the scroll bound back to the state holder.

use crate::app::AppState;
use crate::theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Page body, one entry per row. Kept under 70 columns so rows never wrap
/// and the scroll math can count them directly.
const ABOUT: [&str; 22] = [
    "Hi! I'm Pete. Welcome to my corner of the terminal.",
    "",
    "By day I wrangle build scripts and keep CI green-ish. By night",
    "I drag a secondhand telescope into the yard and squint at",
    "whatever the clouds leave me.",
    "",
    "This page is my homepage experiment: same content as the web",
    "version, but it lives where I do, in a terminal. Wiggle the",
    "mouse and the orbs drift after it. Scroll and the banner",
    "sky slides at half speed.",
    "",
    "Things I tinker with lately:",
    "  - a barn-door star tracker driven by a stepper motor",
    "  - a static site generator nobody asked for",
    "  - teaching the neighbor's kid to solder",
    "",
    "Favorite sights so far: Saturn's rings on a steady night,",
    "the Orion nebula from a dark field, one very confused owl.",
    "",
    "Say hello:",
    "  ✉  pete.porter.dev@gmail.com",
    "  🐙 github.com/peteporter",
];

pub fn render_about(f: &mut Frame, area: Rect, app: &mut AppState) {
    let palette = theme::palette(app.theme);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .title(" about ")
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);

    let max_scroll = (ABOUT.len() as u16).saturating_sub(inner.height);
    app.set_max_scroll(max_scroll);

    let lines: Vec<Line> = ABOUT
        .iter()
        .map(|&text| Line::from(Span::styled(text, Style::default().fg(palette.text))))
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((app.scroll_offset, 0));
    f.render_widget(paragraph, area);
}
