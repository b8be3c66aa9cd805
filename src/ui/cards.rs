// Hobby card rendering
//
// A fixed row of cards, each owning one icon. The icon's transform picks
// its styling: at rest the icon sits dim and bare; zoomed it gains the
// accent color, bold weight, and flanking sparks, with the tilt mapped to
// italics. Card hit regions are recorded for the hover synthesis.

use crate::app::{AppState, Card};
use crate::theme::{self, Palette};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub fn render_cards(f: &mut Frame, area: Rect, app: &mut AppState) {
    let palette = theme::palette(app.theme);
    let count = app.cards.len().max(1) as u32;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count); count as usize])
        .split(area);

    for (index, chunk) in chunks.iter().enumerate() {
        if let Some(card) = app.cards.get(index) {
            render_card(f, *chunk, card, palette);
        }
        if let Some(slot) = app.card_rects.get_mut(index) {
            *slot = Some(*chunk);
        }
    }
}

fn render_card(f: &mut Frame, area: Rect, card: &Card, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .title(format!(" {} ", card.title))
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 4 || inner.height == 0 {
        return;
    }

    let transform = card.transform;
    let icon_line = if transform.is_emphasized() {
        let mut style = Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD);
        if transform.rotation_deg != 0.0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        Line::from(Span::styled(format!("✧ {} ✧", card.icon), style))
            .alignment(Alignment::Center)
    } else {
        Line::from(Span::styled(card.icon, Style::default().fg(palette.muted)))
            .alignment(Alignment::Center)
    };

    let blurb_line = Line::from(Span::styled(card.blurb, Style::default().fg(palette.text)))
        .alignment(Alignment::Center);

    let rows = vec![Line::default(), icon_line, Line::default(), blurb_line];
    f.render_widget(Paragraph::new(rows), inner);
}
