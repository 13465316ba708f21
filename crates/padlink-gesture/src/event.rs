//! Input events consumed by the gesture engine.

use std::time::Duration;

/// Absolute axis reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

/// Tool-shape signal reported by the device.
///
/// Trackpads in this class do not report true multi-touch contacts;
/// instead they raise one of three mutually exclusive key signals
/// describing the current contact shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolShape {
    /// Single-finger contact (`BTN_TOOL_FINGER`).
    One,
    /// Two-finger contact (`BTN_TOOL_DOUBLETAP`).
    Two,
    /// Three-finger contact (`BTN_TOOL_TRIPLETAP`).
    Three,
}

impl ToolShape {
    /// Finger count this shape signal represents.
    #[must_use]
    pub fn finger_count(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

/// Event payload. Only the classes that matter to gesture recognition
/// appear here; the source adapter drops everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Absolute position sample on one axis, in raw device units.
    Axis {
        /// Which axis the sample is for.
        axis: Axis,
        /// Raw device-unit position.
        value: i32,
    },
    /// Touch contact state change (`BTN_TOUCH`).
    Touch {
        /// `true` at touch-down, `false` at lift.
        down: bool,
    },
    /// Tool-shape state change.
    Tool {
        /// Which shape signal changed.
        shape: ToolShape,
        /// `true` when the signal asserts, `false` when it clears.
        active: bool,
    },
}

/// One typed input event with its timestamp.
///
/// Timestamps are relative to an arbitrary epoch chosen by the source
/// (the engine only ever subtracts them). Carrying time on the event
/// instead of reading a clock keeps the engine deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    /// Time since the source's epoch.
    pub at: Duration,
    /// Event payload.
    pub kind: EventKind,
}

impl InputEvent {
    /// Convenience constructor.
    #[must_use]
    pub fn new(at: Duration, kind: EventKind) -> Self {
        Self { at, kind }
    }
}
