// Application state
//
// AppState is the page's single explicit state holder: the applied theme
// marker with its mirrored glyph, the cached orb and card collections, the
// optional hero layer, and the scroll position. The four page reactions
// live here as plain methods; the dispatchers in `event` call them with
// payloads a test can fabricate.

pub mod config;
pub mod event;

use crate::motion::{self, Glide, Transition};
use crate::prefs::ThemeStore;
use crate::theme::Theme;
use config::{
    CARDS, HOVER_ROTATION_DEG, HOVER_SCALE, HOVER_TRANSITION, ORB_ANCHORS, PARALLAX_TRANSITION,
    REST_ROTATION_DEG, REST_SCALE, SCROLL_PARALLAX_FACTOR, SMOOTH_SCROLL_ROWS_PER_TICK,
};
use ratatui::layout::{Position, Rect};
use std::time::Instant;

/// Scale/rotation state of a card's icon. The transform IS the hover
/// state; nothing else tracks whether a card is "active".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconTransform {
    pub scale: f32,
    pub rotation_deg: f32,
    /// Last transition written to this icon. Hover leave leaves it
    /// untouched, so a rapid re-entry animates with whatever was written
    /// last.
    pub transition: Option<Transition>,
}

impl Default for IconTransform {
    fn default() -> Self {
        Self {
            scale: REST_SCALE,
            rotation_deg: REST_ROTATION_DEG,
            transition: None,
        }
    }
}

impl IconTransform {
    /// Whether the icon currently shows the hover emphasis.
    pub fn is_emphasized(&self) -> bool {
        self.scale > REST_SCALE
    }
}

/// One hobby card and its single icon.
#[derive(Debug, Clone)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub transform: IconTransform,
}

/// One decorative orb: a fixed page anchor plus the glide the pointer
/// parallax drives. Purely visual, never interactive.
#[derive(Debug, Clone)]
pub struct Orb {
    /// Anchor position as fractions of the page area
    pub anchor: (f64, f64),
    /// Parallax translation away from the anchor, in virtual pixels
    pub offset: Glide,
}

/// The hero banner layer. Pages without a hero simply skip the scroll
/// parallax.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hero {
    /// Background vertical position in virtual pixels
    pub background_y: f64,
}

/// Main application state
pub struct AppState {
    /// Whether the application is running
    pub running: bool,

    /// The applied theme marker the render layer keys palettes off
    pub theme: Theme,

    /// Glyph mirrored from the marker, shown in the toggle control.
    /// Updated in the same step as the marker, never independently.
    pub theme_glyph: &'static str,

    /// Injected preference storage
    store: Box<dyn ThemeStore>,

    /// Decorative orbs in document order
    pub orbs: Vec<Orb>,

    /// Hobby cards in document order
    pub cards: Vec<Card>,

    /// Card index currently under the pointer; feeds enter/leave synthesis
    hovered_card: Option<usize>,

    /// Hero banner layer, if the page has one
    pub hero: Option<Hero>,

    /// Vertical scroll position of the body, in rows
    pub scroll_offset: u16,

    /// Where the smooth scroll is heading
    pub scroll_target: u16,

    /// Upper bound for scrolling; the render pass refreshes it from the
    /// measured content height
    pub max_scroll: u16,

    /// Terminal size in cells; pointer normalization divides by this
    pub viewport: (u16, u16),

    /// Last pointer position, once the pointer has moved
    pub pointer: Option<(u16, u16)>,

    /// Toggle control hit region recorded by the render pass each frame
    pub toggle_rect: Option<Rect>,

    /// Card hit regions recorded by the render pass each frame
    pub card_rects: Vec<Option<Rect>>,
}

impl AppState {
    /// Build the page state and apply the persisted theme before the
    /// first frame. Startup only ever reads the store.
    pub fn new(store: Box<dyn ThemeStore>) -> Self {
        let now = Instant::now();
        let orbs = ORB_ANCHORS
            .iter()
            .map(|&anchor| Orb {
                anchor,
                offset: Glide::resting((0.0, 0.0), now),
            })
            .collect();
        let cards: Vec<Card> = CARDS
            .iter()
            .map(|spec| Card {
                icon: spec.icon,
                title: spec.title,
                blurb: spec.blurb,
                transform: IconTransform::default(),
            })
            .collect();
        let card_count = cards.len();

        let mut state = Self {
            running: true,
            theme: Theme::default(),
            theme_glyph: Theme::default().glyph(),
            store,
            orbs,
            cards,
            hovered_card: None,
            hero: Some(Hero::default()),
            scroll_offset: 0,
            scroll_target: 0,
            max_scroll: 0,
            viewport: (0, 0),
            pointer: None,
            toggle_rect: None,
            card_rects: vec![None; card_count],
        };

        let initial = state.store.load().unwrap_or_default();
        state.apply_theme(initial);
        state
    }

    /// Set the theme marker and mirror the glyph, in one step.
    pub fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.theme_glyph = theme.glyph();
    }

    /// Flip the APPLIED theme (not the stored one, tolerating any prior
    /// desync), persist the new value, then apply it. A failed write
    /// leaves the session memoryless but never interrupts it.
    pub fn toggle_theme(&mut self) {
        let next = self.theme.toggled();
        if let Err(e) = self.store.save(next) {
            tracing::warn!(error = %e, "failed to persist theme preference");
        }
        self.apply_theme(next);
    }

    /// Pointer-move reaction: retarget every orb from the normalized
    /// pointer position and synthesize card hover enter/leave from the
    /// recorded hit regions.
    pub fn on_pointer_move(&mut self, column: u16, row: u16) {
        self.pointer = Some((column, row));

        let nx = motion::normalize(column, self.viewport.0);
        let ny = motion::normalize(row, self.viewport.1);
        let now = Instant::now();
        for (index, orb) in self.orbs.iter_mut().enumerate() {
            let target = motion::parallax_offset(index, nx, ny);
            orb.offset.retarget(target, PARALLAX_TRANSITION, now);
        }

        let inside = self.card_at(Position::new(column, row));
        if inside != self.hovered_card {
            if let Some(left) = self.hovered_card {
                self.hover_leave(left);
            }
            if let Some(entered) = inside {
                self.hover_enter(entered);
            }
            self.hovered_card = inside;
        }
    }

    /// Which card's recorded rect contains `pos`, if any.
    fn card_at(&self, pos: Position) -> Option<usize> {
        self.card_rects
            .iter()
            .position(|rect| rect.is_some_and(|r| r.contains(pos)))
    }

    /// Hover-enter reaction: zoom and tilt the card's icon with an eased
    /// transition. Reapplying while already hovered writes the same value.
    pub fn hover_enter(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.transform.scale = HOVER_SCALE;
            card.transform.rotation_deg = HOVER_ROTATION_DEG;
            card.transform.transition = Some(HOVER_TRANSITION);
        }
    }

    /// Hover-leave reaction: back to rest. The transition field keeps its
    /// last-written value.
    pub fn hover_leave(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.transform.scale = REST_SCALE;
            card.transform.rotation_deg = REST_ROTATION_DEG;
        }
    }

    /// Click reaction: a hit on the toggle control flips the theme.
    /// Clicks anywhere else fall through.
    pub fn on_click(&mut self, column: u16, row: u16) {
        let pos = Position::new(column, row);
        if self.toggle_rect.is_some_and(|r| r.contains(pos)) {
            self.toggle_theme();
        }
    }

    /// Move the smooth-scroll target by `delta` rows, clamped to the page.
    pub fn scroll_by(&mut self, delta: i32) {
        let next = i32::from(self.scroll_target) + delta;
        self.scroll_target = next.clamp(0, i32::from(self.max_scroll)) as u16;
    }

    /// Scroll reaction: reposition the hero background at half the
    /// current scroll offset. No hero, no effect.
    pub fn on_scroll(&mut self) {
        let offset = f64::from(self.scroll_offset);
        if let Some(hero) = &mut self.hero {
            hero.background_y = offset * SCROLL_PARALLAX_FACTOR;
        }
    }

    /// Advance the smooth scroll one step toward its target and run the
    /// scroll reaction for the new position. The parallax law binds to
    /// the offset the page currently shows, matching animated scrolling.
    pub fn on_tick(&mut self) {
        if self.scroll_offset == self.scroll_target {
            return;
        }
        if self.scroll_offset < self.scroll_target {
            self.scroll_offset =
                (self.scroll_offset + SMOOTH_SCROLL_ROWS_PER_TICK).min(self.scroll_target);
        } else {
            self.scroll_offset = self
                .scroll_offset
                .saturating_sub(SMOOTH_SCROLL_ROWS_PER_TICK)
                .max(self.scroll_target);
        }
        self.on_scroll();
    }

    /// Refresh the scroll bound from the measured content height, keeping
    /// the position and target inside it.
    pub fn set_max_scroll(&mut self, max: u16) {
        self.max_scroll = max;
        self.scroll_target = self.scroll_target.min(max);
        if self.scroll_offset > max {
            self.scroll_offset = max;
            self.on_scroll();
        }
    }

    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::SPEED_STEP;
    use crate::prefs::PrefsError;
    use proptest::prelude::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// In-memory store with counters, standing in for the preferences
    /// file. Cloning shares the same backing cell so tests can assert on
    /// it after handing the store to the app.
    #[derive(Clone, Default)]
    struct MemStore {
        value: Rc<RefCell<Option<Theme>>>,
        writes: Rc<Cell<usize>>,
        fail_writes: Rc<Cell<bool>>,
    }

    impl MemStore {
        fn with_value(theme: Theme) -> Self {
            let store = Self::default();
            *store.value.borrow_mut() = Some(theme);
            store
        }

        fn stored(&self) -> Option<Theme> {
            *self.value.borrow()
        }

        fn write_count(&self) -> usize {
            self.writes.get()
        }
    }

    impl ThemeStore for MemStore {
        fn load(&self) -> Option<Theme> {
            *self.value.borrow()
        }

        fn save(&self, theme: Theme) -> Result<(), PrefsError> {
            if self.fail_writes.get() {
                return Err(PrefsError::Write(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "store disabled",
                )));
            }
            self.writes.set(self.writes.get() + 1);
            *self.value.borrow_mut() = Some(theme);
            Ok(())
        }
    }

    fn app_with(store: MemStore) -> AppState {
        AppState::new(Box::new(store))
    }

    #[test]
    fn test_default_theme_when_nothing_stored() {
        let app = app_with(MemStore::default());
        assert_eq!(app.theme, Theme::Dark);
        assert_eq!(app.theme_glyph, "🌙");
    }

    #[test]
    fn test_stored_theme_applied_at_load_without_writing() {
        let store = MemStore::with_value(Theme::Light);
        let app = app_with(store.clone());

        assert_eq!(app.theme, Theme::Light);
        assert_eq!(app.theme_glyph, "☀️");
        // Startup reads only
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_apply_theme_sets_marker_and_glyph_atomically() {
        let mut app = app_with(MemStore::default());
        app.apply_theme(Theme::Light);
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(app.theme_glyph, "☀️");
    }

    #[test]
    fn test_apply_theme_is_idempotent() {
        let mut app = app_with(MemStore::default());
        app.apply_theme(Theme::Light);
        let (theme, glyph) = (app.theme, app.theme_glyph);
        app.apply_theme(Theme::Light);
        assert_eq!(app.theme, theme);
        assert_eq!(app.theme_glyph, glyph);
    }

    #[test]
    fn test_first_toggle_from_default_persists_light() {
        let store = MemStore::default();
        let mut app = app_with(store.clone());

        app.toggle_theme();
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(store.stored(), Some(Theme::Light));
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_toggle_negates_applied_marker_not_stored_value() {
        // Desync: storage says light, but the applied marker is dark
        let store = MemStore::with_value(Theme::Light);
        let mut app = app_with(store.clone());
        app.apply_theme(Theme::Dark);

        app.toggle_theme();
        // Negation of the marker, not of the stored value
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(store.stored(), Some(Theme::Light));
    }

    #[test]
    fn test_toggle_survives_store_failure() {
        let store = MemStore::default();
        store.fail_writes.set(true);
        let mut app = app_with(store.clone());

        app.toggle_theme();
        // Theme still applies; nothing was stored
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(store.stored(), None);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Toggle inverse law: every toggle flips the marker and leaves
        /// the stored value equal to the new marker.
        #[test]
        fn prop_toggle_inverse_law(start_light in any::<bool>(), toggles in 1usize..12) {
            let start = if start_light { Theme::Light } else { Theme::Dark };
            let store = MemStore::with_value(start);
            let mut app = app_with(store.clone());

            let mut expected = start;
            for _ in 0..toggles {
                expected = expected.toggled();
                app.toggle_theme();
                prop_assert_eq!(app.theme, expected);
                prop_assert_eq!(app.theme_glyph, expected.glyph());
                prop_assert_eq!(store.stored(), Some(expected));
            }
        }
    }

    // ========================================================================
    // Cursor parallax
    // ========================================================================

    #[test]
    fn test_pointer_at_center_stills_every_orb() {
        let mut app = app_with(MemStore::default());
        app.on_resize(100, 40);

        app.on_pointer_move(50, 20);
        for orb in &app.orbs {
            let (dx, dy) = orb.offset.target();
            assert!(dx.abs() < 1e-9);
            assert!(dy.abs() < 1e-9);
        }
    }

    #[test]
    fn test_pointer_at_right_edge_scales_with_document_order() {
        let mut app = app_with(MemStore::default());
        app.on_resize(100, 40);

        app.on_pointer_move(100, 20);
        for (index, orb) in app.orbs.iter().enumerate() {
            let (dx, dy) = orb.offset.target();
            let expected = 0.5 * (index + 1) as f64 * SPEED_STEP;
            assert!((dx - expected).abs() < 1e-9);
            assert!(dy.abs() < 1e-9);
        }
    }

    #[test]
    fn test_pointer_move_writes_parallax_transition() {
        let mut app = app_with(MemStore::default());
        app.on_resize(100, 40);

        app.on_pointer_move(10, 5);
        for orb in &app.orbs {
            assert_eq!(orb.offset.transition(), config::PARALLAX_TRANSITION);
        }
    }

    #[test]
    fn test_pointer_move_with_zero_viewport_is_harmless() {
        let mut app = app_with(MemStore::default());
        // No resize yet; viewport is (0, 0)
        app.on_pointer_move(10, 5);
        for orb in &app.orbs {
            let (dx, dy) = orb.offset.target();
            assert!(dx.abs() < 1e-9);
            assert!(dy.abs() < 1e-9);
        }
    }

    // ========================================================================
    // Hover animator
    // ========================================================================

    fn rigged_card_rects(app: &mut AppState) -> (Rect, Rect) {
        let first = Rect::new(0, 10, 20, 7);
        let second = Rect::new(30, 10, 20, 7);
        app.card_rects = vec![Some(first), Some(second)];
        (first, second)
    }

    #[test]
    fn test_hover_enter_zooms_and_tilts_icon() {
        let mut app = app_with(MemStore::default());
        app.hover_enter(0);

        let transform = app.cards[0].transform;
        assert_eq!(transform.scale, HOVER_SCALE);
        assert_eq!(transform.rotation_deg, HOVER_ROTATION_DEG);
        assert_eq!(transform.transition, Some(HOVER_TRANSITION));
        assert!(transform.is_emphasized());
    }

    #[test]
    fn test_hover_round_trip_restores_rest_transform() {
        let mut app = app_with(MemStore::default());
        for _ in 0..5 {
            app.hover_enter(1);
            app.hover_leave(1);
        }

        let transform = app.cards[1].transform;
        assert_eq!(transform.scale, REST_SCALE);
        assert_eq!(transform.rotation_deg, REST_ROTATION_DEG);
        assert!(!transform.is_emphasized());
    }

    #[test]
    fn test_hover_leave_keeps_last_written_transition() {
        let mut app = app_with(MemStore::default());
        app.hover_enter(0);
        app.hover_leave(0);
        // No explicit transition reset on leave
        assert_eq!(app.cards[0].transform.transition, Some(HOVER_TRANSITION));
    }

    #[test]
    fn test_hover_enter_is_idempotent() {
        let mut app = app_with(MemStore::default());
        app.hover_enter(0);
        let first = app.cards[0].transform;
        app.hover_enter(0);
        assert_eq!(app.cards[0].transform, first);
    }

    #[test]
    fn test_hover_out_of_range_card_is_ignored() {
        let mut app = app_with(MemStore::default());
        app.hover_enter(99);
        app.hover_leave(99);
        for card in &app.cards {
            assert_eq!(card.transform, IconTransform::default());
        }
    }

    #[test]
    fn test_pointer_move_synthesizes_enter_and_leave() {
        let mut app = app_with(MemStore::default());
        app.on_resize(100, 40);
        let (first, _) = rigged_card_rects(&mut app);

        // Into the first card
        app.on_pointer_move(first.x + 1, first.y + 1);
        assert!(app.cards[0].transform.is_emphasized());
        assert!(!app.cards[1].transform.is_emphasized());

        // Wiggle inside the same card: still emphasized
        app.on_pointer_move(first.x + 2, first.y + 2);
        assert!(app.cards[0].transform.is_emphasized());

        // Out into empty space
        app.on_pointer_move(99, 0);
        assert!(!app.cards[0].transform.is_emphasized());
        assert!(!app.cards[1].transform.is_emphasized());
    }

    #[test]
    fn test_pointer_crossing_between_cards_swaps_emphasis() {
        let mut app = app_with(MemStore::default());
        app.on_resize(100, 40);
        let (first, second) = rigged_card_rects(&mut app);

        app.on_pointer_move(first.x + 1, first.y + 1);
        app.on_pointer_move(second.x + 1, second.y + 1);

        assert!(!app.cards[0].transform.is_emphasized());
        assert!(app.cards[1].transform.is_emphasized());
    }

    // ========================================================================
    // Scroll parallax
    // ========================================================================

    #[test]
    fn test_scroll_moves_hero_background_at_half_speed() {
        let mut app = app_with(MemStore::default());
        app.scroll_offset = 40;
        app.on_scroll();
        assert!((app.hero.unwrap().background_y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_scroll_without_hero_is_a_no_op() {
        let mut app = app_with(MemStore::default());
        app.hero = None;
        app.scroll_offset = 40;
        app.on_scroll();
        assert!(app.hero.is_none());
    }

    #[test]
    fn test_smooth_scroll_glides_to_target_and_tracks_parallax() {
        let mut app = app_with(MemStore::default());
        app.set_max_scroll(30);

        app.scroll_by(6);
        assert_eq!(app.scroll_target, 6);
        // The offset has not jumped yet
        assert_eq!(app.scroll_offset, 0);

        let mut guard = 0;
        while app.scroll_offset != app.scroll_target {
            app.on_tick();
            // Parallax follows every shown position
            let shown = f64::from(app.scroll_offset);
            assert!((app.hero.unwrap().background_y - shown * 0.5).abs() < 1e-9);
            guard += 1;
            assert!(guard < 100);
        }
        assert_eq!(app.scroll_offset, 6);
    }

    #[test]
    fn test_scroll_target_clamps_to_page_bounds() {
        let mut app = app_with(MemStore::default());
        app.set_max_scroll(10);

        app.scroll_by(-5);
        assert_eq!(app.scroll_target, 0);

        app.scroll_by(500);
        assert_eq!(app.scroll_target, 10);
    }

    #[test]
    fn test_shrinking_page_pulls_scroll_back_inside() {
        let mut app = app_with(MemStore::default());
        app.set_max_scroll(30);
        app.scroll_by(30);
        while app.scroll_offset != app.scroll_target {
            app.on_tick();
        }

        app.set_max_scroll(8);
        assert_eq!(app.scroll_offset, 8);
        assert_eq!(app.scroll_target, 8);
        assert!((app.hero.unwrap().background_y - 4.0).abs() < 1e-9);
    }

    // ========================================================================
    // Toggle control clicks
    // ========================================================================

    #[test]
    fn test_click_on_toggle_control_flips_theme() {
        let store = MemStore::default();
        let mut app = app_with(store.clone());
        app.toggle_rect = Some(Rect::new(90, 1, 6, 1));

        app.on_click(92, 1);
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(store.stored(), Some(Theme::Light));
    }

    #[test]
    fn test_click_elsewhere_leaves_theme_alone() {
        let store = MemStore::default();
        let mut app = app_with(store.clone());
        app.toggle_rect = Some(Rect::new(90, 1, 6, 1));

        app.on_click(10, 10);
        assert_eq!(app.theme, Theme::Dark);
        assert_eq!(store.write_count(), 0);
    }
}
