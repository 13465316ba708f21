//! Deterministic replay harness for padlink.
//!
//! Drives scripted event sequences through the real [`padlink_gesture`]
//! engine and the real [`padlink_bridge`] command channel, with a captured
//! in-memory sink instead of a serial port. The same code that runs in
//! production runs here, which is what makes the replays meaningful.
//!
//! # Components
//!
//! - [`Script`]: builder for timed input event sequences
//! - [`Replay`]: engine + channel with a captured wire transcript
//! - [`check_wire`]: invariant checks over a delivered transcript

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod invariants;
mod replay;
mod script;

pub use invariants::{Violation, check_wire};
pub use replay::Replay;
pub use script::Script;
