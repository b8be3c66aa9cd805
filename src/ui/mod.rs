// Page rendering
//
// The render pass is the styling layer: it reads the applied theme marker,
// selects a palette, lays out the page, and records the hit regions the
// pointer reactions test against. The orb overlay is painted last so the
// orbs float over the page content.

mod about;
mod cards;
mod hero;
mod orbs;
mod status_bar;

use crate::app::AppState;
use crate::theme;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI drawing function
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let size = f.area();
    app.on_resize(size.width, size.height);

    let palette = theme::palette(app.theme);

    // Page background fill
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        size,
    );

    // Main layout: hero, body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Hero banner
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Status bar
        ])
        .split(size);

    hero::render_hero(f, chunks[0], app);

    // Body: about text above the card row
    let body_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // About
            Constraint::Length(7), // Hobby cards
        ])
        .split(chunks[1]);

    about::render_about(f, body_chunks[0], app);
    cards::render_cards(f, body_chunks[1], app);

    status_bar::render_status_bar(f, chunks[2], app);

    // Orbs drift over everything but the status bar
    orbs::render_orbs(f, chunks[0].union(chunks[1]), app);
}
