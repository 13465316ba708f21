//! Gesture recognition for padlink.
//!
//! This crate is the decision-making core of the bridge: a pure state
//! machine that folds a stream of low-level trackpad events (absolute axis
//! samples, touch contact, tool-shape signals) into a small alphabet of
//! high-level intents — pointer movement, scroll, click, drag.
//!
//! The machine is completely decoupled from I/O. Events carry their own
//! timestamps, so [`GestureEngine`] is a deterministic function of its
//! input history and configuration: replaying an identical event sequence
//! against a fresh engine produces an identical intent sequence. This is
//! what makes the state machine unit-testable without a device or a serial
//! port.
//!
//! # Components
//!
//! - [`InputEvent`] / [`EventKind`]: the input contract
//! - [`TouchSession`]: state of one continuous contact period
//! - [`GestureEngine`]: the transition function, `handle(event) -> intents`
//! - [`GestureIntent`]: outputs, each tagged with a [`Delivery`] class

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod engine;
mod event;
mod intent;
mod session;

pub use config::GestureConfig;
pub use engine::GestureEngine;
pub use event::{Axis, EventKind, InputEvent, ToolShape};
pub use intent::{Delivery, GestureIntent};
pub use session::TouchSession;
