//! Property-based tests for the gesture engine.

use std::time::Duration;

use padlink_gesture::{
    Axis, EventKind, GestureConfig, GestureEngine, GestureIntent, InputEvent, ToolShape,
};
use padlink_proto::Button;
use proptest::prelude::*;

fn at(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

fn event(ms: u64, kind: EventKind) -> InputEvent {
    InputEvent::new(at(ms), kind)
}

fn any_event_kind() -> impl Strategy<Value = EventKind> {
    prop_oneof![
        (prop_oneof![Just(Axis::X), Just(Axis::Y)], -10_000..10_000i32)
            .prop_map(|(axis, value)| EventKind::Axis { axis, value }),
        any::<bool>().prop_map(|down| EventKind::Touch { down }),
        (
            prop_oneof![Just(ToolShape::One), Just(ToolShape::Two), Just(ToolShape::Three)],
            any::<bool>()
        )
            .prop_map(|(shape, active)| EventKind::Tool { shape, active }),
    ]
}

/// Property: the engine is a deterministic function of its input history.
/// Replaying an identical sequence against a fresh instance reproduces the
/// output exactly.
#[test]
fn prop_replay_is_deterministic() {
    proptest!(|(kinds in prop::collection::vec(any_event_kind(), 0..200))| {
        let events: Vec<InputEvent> =
            kinds.iter().enumerate().map(|(i, &kind)| event(i as u64, kind)).collect();

        let mut first = GestureEngine::default();
        let mut second = GestureEngine::default();
        for ev in &events {
            prop_assert_eq!(first.handle(*ev), second.handle(*ev));
        }
        prop_assert_eq!(first.session(), second.session());
    });
}

/// Property: for a one-finger session, the summed `Move` deltas
/// re-integrate to the raw displacement within the threshold's
/// suppression error (sensitivity 1.0 keeps truncation exact).
#[test]
fn prop_move_deltas_reintegrate() {
    proptest!(|(
        samples in prop::collection::vec(0..5_000i32, 1..60),
        threshold in 0..5i32,
    )| {
        let mut engine = GestureEngine::new(GestureConfig {
            movement_sensitivity: 1.0,
            movement_threshold: threshold,
            ..GestureConfig::default()
        });
        engine.handle(event(0, EventKind::Tool { shape: ToolShape::One, active: true }));
        engine.handle(event(0, EventKind::Touch { down: true }));

        let mut sum = 0i64;
        for (i, &value) in samples.iter().enumerate() {
            let intents =
                engine.handle(event(1 + i as u64, EventKind::Axis { axis: Axis::Y, value }));
            for intent in intents {
                if let GestureIntent::Move { dx, dy } = intent {
                    prop_assert_eq!(dx, 0);
                    sum += i64::from(dy);
                }
            }
        }

        let displacement = i64::from(samples[samples.len() - 1] - samples[0]);
        prop_assert!((sum - displacement).abs() <= i64::from(threshold));
    });
}

/// Property: a three-finger session emits exactly one `Press(Left)` (on
/// the first axis event) and exactly one `Release(Left)` at lift, no
/// matter how many axis events occur in between.
#[test]
fn prop_drag_press_release_exactly_once() {
    proptest!(|(samples in prop::collection::vec(
        (prop_oneof![Just(Axis::X), Just(Axis::Y)], -5_000..5_000i32),
        1..80,
    ))| {
        let mut engine = GestureEngine::default();
        engine.handle(event(0, EventKind::Tool { shape: ToolShape::Three, active: true }));
        engine.handle(event(0, EventKind::Touch { down: true }));

        let mut intents = Vec::new();
        for (i, &(axis, value)) in samples.iter().enumerate() {
            intents.extend(engine.handle(event(1 + i as u64, EventKind::Axis { axis, value })));
        }
        intents.extend(engine.handle(event(1000, EventKind::Touch { down: false })));

        let presses = intents
            .iter()
            .filter(|intent| matches!(intent, GestureIntent::Press(Button::Left)))
            .count();
        let releases = intents
            .iter()
            .filter(|intent| matches!(intent, GestureIntent::Release(Button::Left)))
            .count();
        prop_assert_eq!(presses, 1);
        prop_assert_eq!(releases, 1);
        prop_assert!(!intents.iter().any(|intent| matches!(intent, GestureIntent::Tap(_))));
    });
}

/// Property: any finger-count change mid-session re-baselines, so the
/// immediately following axis sample never emits.
#[test]
fn prop_rebaseline_after_shape_change() {
    proptest!(|(
        prefix in prop::collection::vec(0..5_000i32, 0..20),
        next in -5_000..5_000i32,
        to_shape in prop_oneof![Just(ToolShape::One), Just(ToolShape::Two), Just(ToolShape::Three)],
    )| {
        let mut engine = GestureEngine::default();
        engine.handle(event(0, EventKind::Tool { shape: ToolShape::One, active: true }));
        engine.handle(event(0, EventKind::Touch { down: true }));
        for (i, &value) in prefix.iter().enumerate() {
            engine.handle(event(1 + i as u64, EventKind::Axis { axis: Axis::Y, value }));
        }

        engine.handle(event(100, EventKind::Tool { shape: ToolShape::One, active: false }));
        engine.handle(event(100, EventKind::Tool { shape: to_shape, active: true }));

        let intents = engine.handle(event(101, EventKind::Axis { axis: Axis::Y, value: next }));
        // The only permitted output is a drag press (three fingers); no
        // Move or Scroll can follow a re-baseline.
        for intent in intents {
            prop_assert!(matches!(intent, GestureIntent::Press(Button::Left)));
        }
    });
}
