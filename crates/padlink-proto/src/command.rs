//! Command type, line encoding and tolerant parsing.

use std::fmt;

use crate::ProtocolError;

/// Mouse button on the peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Left button.
    Left,
    /// Middle button.
    Middle,
    /// Right button.
    Right,
}

impl Button {
    /// Single-character wire token for this button.
    #[must_use]
    pub fn token(self) -> char {
        match self {
            Self::Left => 'L',
            Self::Middle => 'M',
            Self::Right => 'R',
        }
    }

    fn from_token(token: &str) -> Result<Self, ProtocolError> {
        match token {
            "L" => Ok(Self::Left),
            "M" => Ok(Self::Middle),
            "R" => Ok(Self::Right),
            other => Err(ProtocolError::InvalidButton(other.to_string())),
        }
    }
}

/// One wire command. One command maps to exactly one text line.
///
/// # Invariants
///
/// - Encoding is total: every `Command` value renders to a valid line.
/// - `parse(cmd.encode_line().trim_end())` round-trips for all commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Relative pointer move.
    Move {
        /// Horizontal delta, positive rightwards.
        dx: i32,
        /// Vertical delta, positive downwards.
        dy: i32,
    },
    /// Press a button and hold it.
    Press(Button),
    /// Release a previously pressed button.
    Release(Button),
    /// Scroll the wheel by a signed step count.
    Scroll {
        /// Signed step count, positive scrolls down.
        step: i32,
    },
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move { dx, dy } => write!(f, "M {dx} {dy}"),
            Self::Press(button) => write!(f, "B {}", button.token()),
            Self::Release(button) => write!(f, "R {}", button.token()),
            Self::Scroll { step } => write!(f, "S {step}"),
        }
    }
}

impl Command {
    /// Encode this command as a newline-terminated wire line.
    #[must_use]
    pub fn encode_line(&self) -> String {
        format!("{self}\n")
    }

    /// Parse one line of text into a command.
    ///
    /// Accepts a line with or without its trailing newline. Tokens are
    /// split on ASCII whitespace, so repeated separators are tolerated.
    ///
    /// # Errors
    ///
    /// Returns a [`ProtocolError`] describing the first problem found.
    /// Callers on the peripheral side log the error and drop the line.
    pub fn parse(line: &str) -> Result<Self, ProtocolError> {
        let mut tokens = line.split_ascii_whitespace();
        let tag = tokens.next().ok_or(ProtocolError::Empty)?;

        let command = match tag {
            "M" => {
                let dx = parse_int(&mut tokens, 'M')?;
                let dy = parse_int(&mut tokens, 'M')?;
                Self::Move { dx, dy }
            },
            "B" => Self::Press(parse_button(&mut tokens, 'B')?),
            "R" => Self::Release(parse_button(&mut tokens, 'R')?),
            "S" => Self::Scroll { step: parse_int(&mut tokens, 'S')? },
            other => return Err(ProtocolError::UnknownTag(other.to_string())),
        };

        match tokens.next() {
            Some(_) => Err(ProtocolError::TrailingInput { command: first_char(tag) }),
            None => Ok(command),
        }
    }
}

/// Best-effort decode of a raw serial line.
///
/// Returns the trimmed text when the bytes are valid UTF-8 and non-empty,
/// `None` otherwise. An invalid byte sequence is a no-op for the caller,
/// never a fault that could take down the read loop.
#[must_use]
pub fn decode_line(raw: &[u8]) -> Option<&str> {
    let text = std::str::from_utf8(raw).ok()?.trim();
    if text.is_empty() { None } else { Some(text) }
}

fn first_char(tag: &str) -> char {
    tag.chars().next().unwrap_or('?')
}

fn parse_int<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    command: char,
) -> Result<i32, ProtocolError> {
    let token = tokens.next().ok_or(ProtocolError::MissingArgument { command })?;
    token.parse::<i32>().map_err(|_| ProtocolError::InvalidInteger(token.to_string()))
}

fn parse_button<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    command: char,
) -> Result<Button, ProtocolError> {
    let token = tokens.next().ok_or(ProtocolError::MissingArgument { command })?;
    Button::from_token(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_every_command_form() {
        assert_eq!(Command::Move { dx: -3, dy: 12 }.encode_line(), "M -3 12\n");
        assert_eq!(Command::Press(Button::Left).encode_line(), "B L\n");
        assert_eq!(Command::Release(Button::Right).encode_line(), "R R\n");
        assert_eq!(Command::Scroll { step: -1 }.encode_line(), "S -1\n");
    }

    #[test]
    fn parses_with_and_without_newline() {
        assert_eq!(Command::parse("M 4 0\n"), Ok(Command::Move { dx: 4, dy: 0 }));
        assert_eq!(Command::parse("B M"), Ok(Command::Press(Button::Middle)));
        assert_eq!(Command::parse("S 2"), Ok(Command::Scroll { step: 2 }));
    }

    #[test]
    fn rejects_malformed_lines_without_panicking() {
        assert_eq!(Command::parse(""), Err(ProtocolError::Empty));
        assert_eq!(Command::parse("   "), Err(ProtocolError::Empty));
        assert_eq!(Command::parse("X 1"), Err(ProtocolError::UnknownTag("X".to_string())));
        assert_eq!(Command::parse("M 1"), Err(ProtocolError::MissingArgument { command: 'M' }));
        assert_eq!(
            Command::parse("M one 2"),
            Err(ProtocolError::InvalidInteger("one".to_string()))
        );
        assert_eq!(Command::parse("B Q"), Err(ProtocolError::InvalidButton("Q".to_string())));
        assert_eq!(Command::parse("S 1 2"), Err(ProtocolError::TrailingInput { command: 'S' }));
    }

    #[test]
    fn decode_line_is_best_effort() {
        assert_eq!(decode_line(b"M 1 2\n"), Some("M 1 2"));
        assert_eq!(decode_line(b"  \r\n"), None);
        assert_eq!(decode_line(&[0xff, 0xfe, b'M']), None);
    }
}
