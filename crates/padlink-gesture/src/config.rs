//! Gesture engine configuration.

use std::time::Duration;

/// Immutable per-run gesture tunables.
///
/// Defaults match the reference hardware (a Wacom Intuos Pro M used as a
/// trackpad); raw device units are far finer than screen pixels, which is
/// why the scale factors sit well below 1.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    /// Scale factor applied to raw pointer deltas. Lower is slower.
    pub movement_sensitivity: f32,
    /// Minimum scaled delta (exclusive) before a `Move` is emitted.
    /// Suppresses sensor jitter.
    pub movement_threshold: i32,
    /// Scale factor applied to raw two-finger deltas before the scroll
    /// step is computed.
    pub scroll_input_scaling: f32,
    /// Multiplier on the scaled scroll delta; the result is rounded to
    /// whole wheel steps.
    pub scroll_sensitivity: f32,
    /// Flip the scroll direction.
    pub invert_scroll: bool,
    /// Maximum session duration for a lift to still count as a tap.
    pub tap_timeout: Duration,
    /// When set, any mid-session finger-count change cancels tap
    /// eligibility. The default evaluates the finger count only at lift
    /// time, matching the reference behavior.
    pub strict_tap: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            movement_sensitivity: 0.5,
            movement_threshold: 2,
            scroll_input_scaling: 0.05,
            scroll_sensitivity: 1.0,
            invert_scroll: false,
            tap_timeout: Duration::from_millis(400),
            strict_tap: false,
        }
    }
}
