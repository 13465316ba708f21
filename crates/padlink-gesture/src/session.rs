//! Touch session state.

use std::time::Duration;

/// State of one continuous contact period, from touch-down to lift.
///
/// # Invariants
///
/// - `reference_x` / `reference_y` / `scroll_reference_y` are `None`
///   exactly when no axis sample has been observed since the last reset.
///   Resets happen at touch-down and at every finger-count change, so the
///   next sample re-baselines instead of producing a spurious jump.
/// - `finger_count` is updated independently of `active`: tool-shape
///   events may arrive before or after the touch signal, and movement
///   logic reads the count at use-time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchSession {
    /// Whether a contact is currently registered.
    pub active: bool,
    /// Reported number of fingers, 0..=3.
    pub finger_count: u8,
    /// Timestamp of the touch-down that opened this session.
    pub started_at: Duration,
    /// Last raw X value a pointer delta was computed against.
    pub reference_x: Option<i32>,
    /// Last raw Y value a pointer delta was computed against.
    pub reference_y: Option<i32>,
    /// Last raw Y value a scroll step was computed against.
    pub scroll_reference_y: Option<i32>,
    /// Whether a three-finger drag press has been emitted.
    pub dragging: bool,
    /// Whether any `Move` or `Scroll` was emitted this session. Movement
    /// and tap are mutually exclusive outcomes.
    pub movement_observed: bool,
    /// Whether two different nonzero finger counts were observed while
    /// the session was active. Only consulted in strict-tap mode.
    pub fingers_changed: bool,
    /// Last nonzero finger count observed this session, 0 before the
    /// first. The shape signals transit through 0 when the contact
    /// pattern changes (1 -> 0 -> 2), so a plain old/new comparison
    /// cannot see the change.
    pub shape_seen: u8,
}

impl TouchSession {
    /// Open a new session at touch-down. The finger count is left alone;
    /// it is owned by the tool-shape events.
    pub fn begin(&mut self, at: Duration) {
        self.active = true;
        self.started_at = at;
        self.reset_references();
        self.dragging = false;
        self.movement_observed = false;
        self.fingers_changed = false;
        self.shape_seen = self.finger_count;
    }

    /// Drop all axis baselines so the next sample re-baselines.
    pub fn reset_references(&mut self) {
        self.reference_x = None;
        self.reference_y = None;
        self.scroll_reference_y = None;
    }

    /// Close the session at lift.
    pub fn clear(&mut self) {
        self.active = false;
        self.finger_count = 0;
        self.reset_references();
        self.dragging = false;
        self.movement_observed = false;
        self.fingers_changed = false;
        self.shape_seen = 0;
    }
}
