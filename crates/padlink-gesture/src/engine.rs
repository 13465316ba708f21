//! The gesture state machine.

use std::time::Duration;

use padlink_proto::Button;

use crate::{Axis, EventKind, GestureConfig, GestureIntent, InputEvent, ToolShape, TouchSession};

/// Gesture recognition engine.
///
/// Pure state machine: consumes [`InputEvent`]s and returns the intents
/// each event produced, zero or more per event. No I/O, no clock — fully
/// testable in simulation, and deterministic under replay.
#[derive(Debug, Clone)]
pub struct GestureEngine {
    config: GestureConfig,
    session: TouchSession,
}

impl GestureEngine {
    /// Create an engine with the given configuration.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self { config, session: TouchSession::default() }
    }

    /// Current session state, for diagnostics and tests.
    #[must_use]
    pub fn session(&self) -> &TouchSession {
        &self.session
    }

    /// Process one event and return the intents it produced.
    pub fn handle(&mut self, event: InputEvent) -> Vec<GestureIntent> {
        match event.kind {
            EventKind::Touch { down: true } => {
                self.on_touch_down(event.at);
                Vec::new()
            },
            EventKind::Touch { down: false } => self.on_touch_up(event.at),
            EventKind::Tool { shape, active } => {
                self.on_tool(shape, active);
                Vec::new()
            },
            EventKind::Axis { axis, value } => self.on_axis(axis, value),
        }
    }

    /// Best-effort shutdown path: if a drag is still holding the left
    /// button, release it so the peripheral is not left half-pressed.
    pub fn teardown(&mut self) -> Vec<GestureIntent> {
        let mut intents = Vec::new();
        if self.session.dragging {
            tracing::debug!("releasing held drag button at teardown");
            intents.push(GestureIntent::Release(Button::Left));
        }
        self.session.clear();
        intents
    }

    fn on_touch_down(&mut self, at: Duration) {
        tracing::trace!(?at, "touch down");
        self.session.begin(at);
    }

    fn on_touch_up(&mut self, at: Duration) -> Vec<GestureIntent> {
        if !self.session.active {
            return Vec::new();
        }

        let mut intents = Vec::new();
        if self.session.dragging {
            tracing::debug!("drag ended");
            intents.push(GestureIntent::Release(Button::Left));
        } else if self.tap_eligible(at) {
            // Tap semantics are decided by the finger count at lift time.
            match self.session.finger_count {
                1 => intents.push(GestureIntent::Tap(Button::Left)),
                2 => intents.push(GestureIntent::Tap(Button::Right)),
                _ => {},
            }
        }

        self.session.clear();
        intents
    }

    fn tap_eligible(&self, at: Duration) -> bool {
        if self.session.movement_observed {
            return false;
        }
        if self.config.strict_tap && self.session.fingers_changed {
            return false;
        }
        at.saturating_sub(self.session.started_at) <= self.config.tap_timeout
    }

    fn on_tool(&mut self, shape: ToolShape, active: bool) {
        let count = if active { shape.finger_count() } else { 0 };
        if count == self.session.finger_count {
            return;
        }

        if self.session.active {
            // Re-baseline: the contact pattern changed shape, so the next
            // sample must not be compared against a stale reference.
            self.session.reset_references();
            if count != 0 {
                if self.session.shape_seen != 0 && self.session.shape_seen != count {
                    self.session.fingers_changed = true;
                }
                self.session.shape_seen = count;
            }
        }

        tracing::trace!(from = self.session.finger_count, to = count, "finger count");
        self.session.finger_count = count;
    }

    fn on_axis(&mut self, axis: Axis, value: i32) -> Vec<GestureIntent> {
        if !self.session.active {
            return Vec::new();
        }

        match self.session.finger_count {
            1 => self.pointer_move(axis, value).into_iter().collect(),
            2 => match axis {
                // Only the vertical axis drives scrolling.
                Axis::Y => self.scroll(value).into_iter().collect(),
                Axis::X => Vec::new(),
            },
            3 => {
                let mut intents = Vec::new();
                if !self.session.dragging {
                    tracing::debug!("drag started");
                    self.session.dragging = true;
                    intents.push(GestureIntent::Press(Button::Left));
                }
                intents.extend(self.pointer_move(axis, value));
                intents
            },
            // No contact registered (or an out-of-range count): ignore.
            _ => Vec::new(),
        }
    }

    /// Single-pointer movement rule, shared by one-finger moves and
    /// three-finger drags. Per-axis and independent: each axis keeps its
    /// own reference and crosses the threshold on its own.
    fn pointer_move(&mut self, axis: Axis, value: i32) -> Option<GestureIntent> {
        let reference = match axis {
            Axis::X => &mut self.session.reference_x,
            Axis::Y => &mut self.session.reference_y,
        };

        let Some(origin) = *reference else {
            *reference = Some(value);
            return None;
        };

        let delta = (value - origin) as f32 * self.config.movement_sensitivity;
        if delta.abs() <= self.config.movement_threshold as f32 {
            return None;
        }

        *reference = Some(value);
        self.session.movement_observed = true;
        let step = delta as i32;
        Some(match axis {
            Axis::X => GestureIntent::Move { dx: step, dy: 0 },
            Axis::Y => GestureIntent::Move { dx: 0, dy: step },
        })
    }

    /// Two-finger scroll rule. Each emission consumes the observed
    /// displacement by advancing the reference to the current raw value,
    /// so sustained motion yields a steady stream of small steps instead
    /// of one accumulated jump. Sub-unit steps are dropped, not banked.
    fn scroll(&mut self, value: i32) -> Option<GestureIntent> {
        let Some(origin) = self.session.scroll_reference_y else {
            self.session.scroll_reference_y = Some(value);
            return None;
        };

        let raw = (value - origin) as f32 * self.config.scroll_input_scaling;
        let mut step = (raw * self.config.scroll_sensitivity).round() as i32;
        if self.config.invert_scroll {
            step = -step;
        }
        if step == 0 {
            return None;
        }

        self.session.scroll_reference_y = Some(value);
        self.session.movement_observed = true;
        Some(GestureIntent::Scroll { step })
    }
}

impl Default for GestureEngine {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}
