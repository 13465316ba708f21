//! Scripted event sequences.

use std::time::Duration;

use padlink_gesture::{Axis, EventKind, InputEvent, ToolShape};

/// Builder for a timed sequence of input events.
///
/// Events are stamped from an internal clock that only moves when the
/// script says so, keeping replays exactly reproducible. The builder
/// mirrors what a real device emits: tool-shape signals, touch contact,
/// absolute axis samples.
#[derive(Debug, Clone, Default)]
pub struct Script {
    clock: Duration,
    events: Vec<InputEvent>,
}

impl Script {
    /// Start an empty script at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the script clock without emitting anything.
    #[must_use]
    pub fn after(mut self, delay: Duration) -> Self {
        self.clock += delay;
        self
    }

    /// Emit a tool-shape signal.
    #[must_use]
    pub fn tool(self, shape: ToolShape, active: bool) -> Self {
        self.push(EventKind::Tool { shape, active })
    }

    /// Emit a touch-down.
    #[must_use]
    pub fn touch_down(self) -> Self {
        self.push(EventKind::Touch { down: true })
    }

    /// Emit a touch-up.
    #[must_use]
    pub fn touch_up(self) -> Self {
        self.push(EventKind::Touch { down: false })
    }

    /// Emit one absolute axis sample.
    #[must_use]
    pub fn sample(self, axis: Axis, value: i32) -> Self {
        self.push(EventKind::Axis { axis, value })
    }

    /// Emit a run of samples on one axis, one millisecond apart.
    #[must_use]
    pub fn stroke(mut self, axis: Axis, values: &[i32]) -> Self {
        for &value in values {
            self = self.after(Duration::from_millis(1)).sample(axis, value);
        }
        self
    }

    /// The built event sequence.
    #[must_use]
    pub fn events(&self) -> &[InputEvent] {
        &self.events
    }

    fn push(mut self, kind: EventKind) -> Self {
        self.events.push(InputEvent::new(self.clock, kind));
        self
    }
}
