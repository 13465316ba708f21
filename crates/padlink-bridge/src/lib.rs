//! Padlink host bridge.
//!
//! Production "glue" around [`padlink_gesture`]'s sans-IO engine: reads
//! raw trackpad events from a Linux evdev device, folds them through the
//! gesture state machine, and delivers the resulting wire commands to a
//! serial-attached HID peripheral.
//!
//! # Components
//!
//! - [`EvdevSource`]: input adapter (device discovery, event mapping)
//! - [`CommandChannel`]: batching line sink with an immediate bypass
//! - [`Runtime`]: the event loop, with explicit shutdown and teardown
//! - [`open_serial`]: UART transport setup

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod channel;
mod error;
mod runtime;
mod source;
mod transport;

pub use channel::CommandChannel;
pub use error::BridgeError;
pub use runtime::Runtime;
pub use source::{EvdevSource, find_device};
pub use transport::open_serial;
