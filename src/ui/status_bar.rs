// Status bar rendering
//
// Bottom bar with key hints, the theme indicator, and the scroll position.

use crate::app::AppState;
use crate::theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let palette = theme::palette(app.theme);

    let key_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(palette.muted);

    let mut spans = vec![
        Span::styled(format!(" {} ", app.theme_glyph), key_style),
        Span::styled("T:", key_style),
        Span::styled(format!("{} theme | ", app.theme.toggled().name()), text_style),
        Span::styled("↑↓:", key_style),
        Span::styled("scroll | ", text_style),
        Span::styled("mouse:", key_style),
        Span::styled("orbs follow | ", text_style),
        Span::styled("Q:", key_style),
        Span::styled("quit", text_style),
    ];

    if app.max_scroll > 0 {
        let percent = u32::from(app.scroll_offset) * 100 / u32::from(app.max_scroll);
        spans.push(Span::styled(
            format!("  [{percent}%]"),
            Style::default().fg(palette.text),
        ));
    }

    let status_bar = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.border)),
        )
        .alignment(Alignment::Left);

    f.render_widget(status_bar, area);
}
