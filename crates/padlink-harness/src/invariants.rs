//! Invariant checks over a wire transcript.
//!
//! Invariants verify WHAT must hold across every execution path, not a
//! specific scenario: however a replay went, the peripheral must never be
//! asked to release a button it is not holding, and a finished transcript
//! must leave no button held.

use std::collections::HashSet;

use padlink_proto::{Button, Command, ProtocolError};

/// An invariant violation found in a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A line failed to parse as a wire command.
    Malformed {
        /// Offending line.
        line: String,
        /// Parse error.
        error: ProtocolError,
    },
    /// A press arrived for a button that is already held.
    DoublePress(Button),
    /// A release arrived for a button that is not held.
    UnmatchedRelease(Button),
    /// The transcript ended with buttons still held.
    HeldAtEnd(Vec<Button>),
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed { line, error } => write!(f, "malformed line {line:?}: {error}"),
            Self::DoublePress(button) => write!(f, "double press of {button:?}"),
            Self::UnmatchedRelease(button) => write!(f, "unmatched release of {button:?}"),
            Self::HeldAtEnd(buttons) => write!(f, "buttons held at end of transcript: {buttons:?}"),
        }
    }
}

/// Check a complete wire transcript for button-state sanity.
///
/// # Errors
///
/// The first [`Violation`] found, scanning in wire order.
pub fn check_wire(transcript: &str) -> Result<(), Violation> {
    let mut held: HashSet<Button> = HashSet::new();

    for line in transcript.lines() {
        let command = Command::parse(line).map_err(|error| Violation::Malformed {
            line: line.to_string(),
            error,
        })?;
        match command {
            Command::Press(button) => {
                if !held.insert(button) {
                    return Err(Violation::DoublePress(button));
                }
            },
            Command::Release(button) => {
                if !held.remove(&button) {
                    return Err(Violation::UnmatchedRelease(button));
                }
            },
            Command::Move { .. } | Command::Scroll { .. } => {},
        }
    }

    if held.is_empty() {
        Ok(())
    } else {
        let mut buttons: Vec<Button> = held.into_iter().collect();
        buttons.sort_by_key(|b| b.token());
        Err(Violation::HeldAtEnd(buttons))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_balanced_transcript() {
        assert_eq!(check_wire("M 1 0\nB L\nM 0 2\nR L\nS -1\n"), Ok(()));
    }

    #[test]
    fn rejects_release_without_press() {
        assert_eq!(check_wire("R L\n"), Err(Violation::UnmatchedRelease(Button::Left)));
    }

    #[test]
    fn rejects_a_held_button_at_end() {
        assert_eq!(check_wire("B L\n"), Err(Violation::HeldAtEnd(vec![Button::Left])));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(matches!(check_wire("M nope 0\n"), Err(Violation::Malformed { .. })));
    }
}
