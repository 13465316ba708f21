//! Property-based tests for the wire grammar.

use padlink_proto::{Button, Command, decode_line};
use proptest::prelude::*;

fn any_button() -> impl Strategy<Value = Button> {
    prop_oneof![Just(Button::Left), Just(Button::Middle), Just(Button::Right)]
}

fn any_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        (any::<i32>(), any::<i32>()).prop_map(|(dx, dy)| Command::Move { dx, dy }),
        any_button().prop_map(Command::Press),
        any_button().prop_map(Command::Release),
        any::<i32>().prop_map(|step| Command::Scroll { step }),
    ]
}

/// Property: every encoded command parses back to itself.
#[test]
fn prop_encode_parse_round_trip() {
    proptest!(|(command in any_command())| {
        let line = command.encode_line();
        prop_assert!(line.ends_with('\n'));
        prop_assert_eq!(Command::parse(&line), Ok(command));
    });
}

/// Property: the parser returns an error for arbitrary junk, never panics.
#[test]
fn prop_parser_total_on_arbitrary_input() {
    proptest!(|(line in "\\PC*")| {
        let _ = Command::parse(&line);
    });
}

/// Property: decode never faults on arbitrary bytes and never yields an
/// empty line.
#[test]
fn prop_decode_line_total_on_arbitrary_bytes() {
    proptest!(|(raw in prop::collection::vec(any::<u8>(), 0..64))| {
        if let Some(text) = decode_line(&raw) {
            prop_assert!(!text.is_empty());
            prop_assert!(!text.starts_with(char::is_whitespace));
        }
    });
}
