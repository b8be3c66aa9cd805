// Input event dispatch
//
// Translates terminal input into the page reactions. The handlers take
// plain payloads so tests can drive them directly, without a terminal or
// a real input device.

use super::config::{PAGE_SCROLL_STEP, SCROLL_STEP};
use super::AppState;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};

/// Handle a key press and update the application state.
///
/// Returns `true` if the application should continue running,
/// `false` if it should exit.
///
/// # Key Bindings
/// - `q`, `Q`, `Esc` - quit
/// - `t`, `T` - toggle the theme
/// - `Up` / `Down` - scroll the body one step
/// - `PageUp` / `PageDown` - scroll the body one block
/// - `Home` - glide back to the top
pub fn handle_key_event(app: &mut AppState, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.running = false;
            false
        }
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.toggle_theme();
            true
        }
        KeyCode::Up => {
            app.scroll_by(-SCROLL_STEP);
            true
        }
        KeyCode::Down => {
            app.scroll_by(SCROLL_STEP);
            true
        }
        KeyCode::PageUp => {
            app.scroll_by(-PAGE_SCROLL_STEP);
            true
        }
        KeyCode::PageDown => {
            app.scroll_by(PAGE_SCROLL_STEP);
            true
        }
        KeyCode::Home => {
            app.scroll_by(-i32::from(app.max_scroll));
            true
        }
        _ => true,
    }
}

/// Handle a mouse event: movement feeds the orb parallax and the card
/// hover, the wheel scrolls the body, and a left click may hit the theme
/// toggle control.
pub fn handle_mouse_event(app: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            app.on_pointer_move(mouse.column, mouse.row);
        }
        MouseEventKind::ScrollDown => app.scroll_by(SCROLL_STEP),
        MouseEventKind::ScrollUp => app.scroll_by(-SCROLL_STEP),
        MouseEventKind::Down(MouseButton::Left) => app.on_click(mouse.column, mouse.row),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::{PrefsError, ThemeStore};
    use crate::theme::Theme;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    struct NullStore;

    impl ThemeStore for NullStore {
        fn load(&self) -> Option<Theme> {
            None
        }

        fn save(&self, _theme: Theme) -> Result<(), PrefsError> {
            Ok(())
        }
    }

    fn app() -> AppState {
        AppState::new(Box::new(NullStore))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();

        assert!(app.running);
        let result = handle_key_event(&mut app, KeyCode::Char('q'));
        assert!(!result);
        assert!(!app.running);

        app.running = true;
        let result = handle_key_event(&mut app, KeyCode::Char('Q'));
        assert!(!result);
        assert!(!app.running);

        app.running = true;
        let result = handle_key_event(&mut app, KeyCode::Esc);
        assert!(!result);
        assert!(!app.running);
    }

    #[test]
    fn test_theme_toggle_key() {
        let mut app = app();
        assert_eq!(app.theme, Theme::Dark);

        handle_key_event(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme, Theme::Light);

        handle_key_event(&mut app, KeyCode::Char('T'));
        assert_eq!(app.theme, Theme::Dark);
    }

    #[test]
    fn test_scroll_keys_move_the_target() {
        let mut app = app();
        app.set_max_scroll(40);

        handle_key_event(&mut app, KeyCode::Down);
        assert_eq!(app.scroll_target, SCROLL_STEP as u16);

        handle_key_event(&mut app, KeyCode::PageDown);
        assert_eq!(app.scroll_target, (SCROLL_STEP + PAGE_SCROLL_STEP) as u16);

        handle_key_event(&mut app, KeyCode::Up);
        handle_key_event(&mut app, KeyCode::PageUp);
        assert_eq!(app.scroll_target, 0);
    }

    #[test]
    fn test_home_key_targets_the_top() {
        let mut app = app();
        app.set_max_scroll(40);
        app.scroll_by(40);

        handle_key_event(&mut app, KeyCode::Home);
        assert_eq!(app.scroll_target, 0);
    }

    #[test]
    fn test_unbound_keys_keep_running() {
        let mut app = app();
        assert!(handle_key_event(&mut app, KeyCode::Char('x')));
        assert!(handle_key_event(&mut app, KeyCode::Tab));
        assert!(app.running);
    }

    #[test]
    fn test_mouse_move_dispatches_pointer_reaction() {
        let mut app = app();
        app.on_resize(100, 40);

        handle_mouse_event(&mut app, mouse(MouseEventKind::Moved, 100, 20));
        let (dx, _) = app.orbs[0].offset.target();
        assert!((dx - 10.0).abs() < 1e-9);
        assert_eq!(app.pointer, Some((100, 20)));
    }

    #[test]
    fn test_mouse_wheel_scrolls() {
        let mut app = app();
        app.set_max_scroll(20);

        handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollDown, 0, 0));
        assert_eq!(app.scroll_target, SCROLL_STEP as u16);

        handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollUp, 0, 0));
        assert_eq!(app.scroll_target, 0);
    }

    #[test]
    fn test_left_click_on_toggle_flips_theme() {
        let mut app = app();
        app.toggle_rect = Some(Rect::new(80, 1, 6, 1));

        handle_mouse_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 82, 1));
        assert_eq!(app.theme, Theme::Light);
    }

    #[test]
    fn test_other_mouse_buttons_are_ignored() {
        let mut app = app();
        app.toggle_rect = Some(Rect::new(80, 1, 6, 1));

        handle_mouse_event(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Right), 82, 1),
        );
        assert_eq!(app.theme, Theme::Dark);
    }
}
