//! High-level intents produced by the gesture engine.

use padlink_proto::{Button, Command};

/// Delivery class of an intent.
///
/// Taps are latency-sensitive: a user notices a late click far more than a
/// late pointer step, so taps bypass the channel's batching while movement
/// and scroll ride it. The price is that two delivery orders are possible
/// for one logical event stream — see `CommandChannel` in the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Queue behind earlier output and flush in batches.
    Batched,
    /// Write to the transport right away, ahead of anything queued.
    Immediate,
}

/// One high-level gesture outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureIntent {
    /// Relative pointer movement.
    Move {
        /// Horizontal delta.
        dx: i32,
        /// Vertical delta.
        dy: i32,
    },
    /// Scroll by a signed step count.
    Scroll {
        /// Signed wheel steps.
        step: i32,
    },
    /// Hold a button down (drag start).
    Press(Button),
    /// Release a held button (drag end).
    Release(Button),
    /// Synthetic click: an immediate press-and-release pair.
    Tap(Button),
}

impl GestureIntent {
    /// Delivery class for this intent.
    #[must_use]
    pub fn delivery(&self) -> Delivery {
        match self {
            Self::Tap(_) => Delivery::Immediate,
            Self::Move { .. } | Self::Scroll { .. } | Self::Press(_) | Self::Release(_) => {
                Delivery::Batched
            },
        }
    }

    /// Lower this intent to wire commands. Every intent maps to one
    /// command except `Tap`, which expands to its press/release pair.
    #[must_use]
    pub fn commands(&self) -> Vec<Command> {
        match *self {
            Self::Move { dx, dy } => vec![Command::Move { dx, dy }],
            Self::Scroll { step } => vec![Command::Scroll { step }],
            Self::Press(button) => vec![Command::Press(button)],
            Self::Release(button) => vec![Command::Release(button)],
            Self::Tap(button) => vec![Command::Press(button), Command::Release(button)],
        }
    }
}
