// Motion primitives
//
// Pointer normalization, the orb parallax formula, and the declarative
// transitions the reaction handlers write. Handlers only ever set targets;
// easing between positions happens in the render pass, which asks a Glide
// where its offset currently sits.

use std::time::{Duration, Instant};

/// Per-index speed step for the orb parallax. The orb at 0-based index i
/// travels (i + 1) * SPEED_STEP virtual pixels across half a viewport of
/// pointer movement, so later orbs move faster and read as closer.
pub const SPEED_STEP: f64 = 20.0;

/// Normalize a cell coordinate against the viewport extent, yielding 0.0
/// at the left/top edge and 1.0 at the right/bottom edge. The value is not
/// clamped. A zero extent reports the centered position so downstream
/// deltas vanish.
pub fn normalize(pos: u16, extent: u16) -> f64 {
    if extent == 0 {
        return 0.5;
    }
    f64::from(pos) / f64::from(extent)
}

/// Parallax translation in virtual pixels for the orb at `index`, given
/// the normalized pointer position. Centered: a pointer at the exact
/// middle of the viewport yields (0, 0).
pub fn parallax_offset(index: usize, nx: f64, ny: f64) -> (f64, f64) {
    let speed = (index + 1) as f64 * SPEED_STEP;
    ((nx - 0.5) * speed, (ny - 0.5) * speed)
}

/// Easing curve of a declarative transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Gentle start and end
    Ease,
    /// Fast start, settling end
    EaseOut,
}

impl Easing {
    /// Map linear progress in [0, 1] onto the curve. Input outside the
    /// range is clamped first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Ease => t * t * (3.0 - 2.0 * t),
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// A declarative transition: how long a newly written target takes to
/// settle, and along which curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration: Duration,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Eased progress after `elapsed` time. Saturates at 1.0; a
    /// zero-duration transition is complete immediately.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.easing.apply(t)
    }
}

/// A 2-D offset gliding toward its target under the last-written
/// transition. Retargeting restarts the glide from the current eased
/// position, so rapid pointer movement stays continuous instead of
/// snapping back to the previous origin.
#[derive(Debug, Clone, Copy)]
pub struct Glide {
    from: (f64, f64),
    to: (f64, f64),
    transition: Transition,
    started: Instant,
}

impl Glide {
    /// A glide resting at `at`, with no transition in flight.
    pub fn resting(at: (f64, f64), now: Instant) -> Self {
        Self {
            from: at,
            to: at,
            transition: Transition::new(Duration::ZERO, Easing::EaseOut),
            started: now,
        }
    }

    /// Redirect toward `to`, starting from wherever the previous glide
    /// currently sits.
    pub fn retarget(&mut self, to: (f64, f64), transition: Transition, now: Instant) {
        self.from = self.at(now);
        self.to = to;
        self.transition = transition;
        self.started = now;
    }

    /// The offset this glide settles at. Exercised by the reaction tests;
    /// the render pass only ever asks for `at`.
    #[allow(dead_code)]
    pub fn target(&self) -> (f64, f64) {
        self.to
    }

    /// The transition currently easing this glide.
    #[allow(dead_code)]
    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Current offset at `now`.
    pub fn at(&self, now: Instant) -> (f64, f64) {
        let elapsed = now.saturating_duration_since(self.started);
        let p = self.transition.progress(elapsed);
        (
            self.from.0 + (self.to.0 - self.from.0) * p,
            self.from.1 + (self.to.1 - self.from.1) * p,
        )
    }
}
