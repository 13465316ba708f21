//! Property-based tests over complete wire transcripts.

use std::time::Duration;

use padlink_gesture::{Axis, EventKind, GestureConfig, InputEvent, ToolShape};
use padlink_harness::{Replay, check_wire};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

fn any_event_kind() -> impl Strategy<Value = EventKind> {
    prop_oneof![
        (prop_oneof![Just(Axis::X), Just(Axis::Y)], 0..10_000i32)
            .prop_map(|(axis, value)| EventKind::Axis { axis, value }),
        Just(EventKind::Touch { down: true }),
        (
            prop_oneof![Just(ToolShape::One), Just(ToolShape::Two), Just(ToolShape::Three)],
            any::<bool>()
        )
            .prop_map(|(shape, active)| EventKind::Tool { shape, active }),
    ]
}

/// Rewrite touch events so contact state alternates, matching the input
/// contract: key events report state *changes*, so a device never emits
/// two touch-downs without a lift in between.
fn well_formed(kinds: Vec<EventKind>) -> Vec<InputEvent> {
    let mut down = false;
    kinds
        .into_iter()
        .enumerate()
        .map(|(i, kind)| {
            let kind = match kind {
                EventKind::Touch { .. } => {
                    down = !down;
                    EventKind::Touch { down }
                },
                other => other,
            };
            InputEvent::new(Duration::from_millis(i as u64), kind)
        })
        .collect()
}

/// Property: whatever a well-formed device stream does, the transcript
/// that reaches the peripheral parses cleanly and never double-presses,
/// releases an unheld button, or leaves a button held after shutdown.
#[test]
fn prop_transcripts_are_button_balanced() {
    proptest!(|(
        kinds in prop::collection::vec(any_event_kind(), 0..300),
        batch_size in 1..8usize,
    )| {
        let events = well_formed(kinds);
        let mut replay = Replay::new(GestureConfig::default(), batch_size);
        replay.feed(&events)?;
        let transcript = replay.shutdown()?;

        if let Err(violation) = check_wire(&transcript) {
            return Err(TestCaseError::fail(format!("{violation}\n{transcript}")));
        }
    });
}
