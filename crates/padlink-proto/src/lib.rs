//! Wire protocol between the padlink host bridge and the HID peripheral.
//!
//! The link is a plain serial byte stream carrying one command per
//! newline-terminated ASCII line. The grammar is deliberately tiny so the
//! peripheral's interpreter stays a few lines of parsing away from the HID
//! report:
//!
//! | Line        | Meaning                                  |
//! |-------------|------------------------------------------|
//! | `M <dx> <dy>` | relative pointer move, signed integers |
//! | `B <L\|M\|R>` | button press                           |
//! | `R <L\|M\|R>` | button release                         |
//! | `S <n>`       | scroll by signed integer step          |
//!
//! Both directions of the contract live here: the host encodes via
//! [`Command::encode_line`], the peripheral parses via [`Command::parse`]
//! and discards malformed lines ([`ProtocolError`]) without ever tearing
//! down its read loop. [`decode_line`] is the best-effort UTF-8 entry point
//! for raw serial reads.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod command;
mod errors;

pub use command::{Button, Command, decode_line};
pub use errors::ProtocolError;
