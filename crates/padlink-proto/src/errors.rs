//! Protocol error types.

use thiserror::Error;

/// Errors produced while parsing a command line.
///
/// Every variant is recoverable by policy: the peripheral logs the error
/// and discards the offending line only. Nothing here is fatal for the
/// read loop.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The line contained no tokens.
    #[error("empty command line")]
    Empty,

    /// The leading token is not a known command tag.
    #[error("unknown command tag {0:?}")]
    UnknownTag(String),

    /// A required argument was missing.
    #[error("missing argument for '{command}' command")]
    MissingArgument {
        /// Command tag the argument belongs to.
        command: char,
    },

    /// More tokens followed a complete command.
    #[error("trailing input after '{command}' command")]
    TrailingInput {
        /// Command tag that was already complete.
        command: char,
    },

    /// An argument failed to parse as a signed integer.
    #[error("invalid integer argument {0:?}")]
    InvalidInteger(String),

    /// A button argument was not one of `L`, `M`, `R`.
    #[error("invalid button token {0:?}")]
    InvalidButton(String),
}
