//! Evdev event source adapter.

use std::time::Instant;

use evdev::{AbsoluteAxisType, Device, InputEventKind, Key};
use padlink_gesture::{Axis, EventKind, InputEvent, ToolShape};

use crate::BridgeError;

/// Find an input device by its advertised name.
///
/// # Errors
///
/// [`BridgeError::DeviceNotFound`] if no enumerated device matches —
/// fatal at startup, reported to the operator.
pub fn find_device(name: &str) -> Result<Device, BridgeError> {
    for (path, device) in evdev::enumerate() {
        if device.name() == Some(name) {
            tracing::info!(?path, name, "input device found");
            return Ok(device);
        }
    }
    Err(BridgeError::DeviceNotFound { name: name.to_string() })
}

/// Async adapter over one evdev device.
///
/// Delivers a lazy, infinite, non-restartable stream of typed
/// [`InputEvent`]s. Only the event classes gesture recognition cares
/// about come through; everything else is dropped here. Timestamps are
/// the elapsed time since the source was created.
pub struct EvdevSource {
    stream: evdev::EventStream,
    epoch: Instant,
}

impl EvdevSource {
    /// Wrap a device in an event stream.
    pub fn new(device: Device) -> Result<Self, BridgeError> {
        let stream = device.into_event_stream().map_err(BridgeError::Input)?;
        Ok(Self { stream, epoch: Instant::now() })
    }

    /// Wait for the next raw event. Returns `None` for event classes the
    /// engine does not consume; the caller just polls again.
    ///
    /// # Errors
    ///
    /// [`BridgeError::Input`] when the underlying read fails (typically
    /// the device was unplugged). The stream is not restartable.
    pub async fn next_event(&mut self) -> Result<Option<InputEvent>, BridgeError> {
        let raw = self.stream.next_event().await.map_err(BridgeError::Input)?;
        let at = self.epoch.elapsed();
        Ok(map_event(raw.kind(), raw.value()).map(|kind| InputEvent::new(at, kind)))
    }
}

/// Map a raw evdev event to the engine's input contract.
fn map_event(kind: InputEventKind, value: i32) -> Option<EventKind> {
    match kind {
        InputEventKind::AbsAxis(axis) => {
            if axis == AbsoluteAxisType::ABS_X {
                Some(EventKind::Axis { axis: Axis::X, value })
            } else if axis == AbsoluteAxisType::ABS_Y {
                Some(EventKind::Axis { axis: Axis::Y, value })
            } else {
                None
            }
        },
        InputEventKind::Key(key) => {
            let active = value != 0;
            if key == Key::BTN_TOUCH {
                Some(EventKind::Touch { down: active })
            } else if key == Key::BTN_TOOL_FINGER {
                Some(EventKind::Tool { shape: ToolShape::One, active })
            } else if key == Key::BTN_TOOL_DOUBLETAP {
                Some(EventKind::Tool { shape: ToolShape::Two, active })
            } else if key == Key::BTN_TOOL_TRIPLETAP {
                Some(EventKind::Tool { shape: ToolShape::Three, active })
            } else {
                None
            }
        },
        _ => None,
    }
}
