//! Property tests for the brightness engine and rotation schedule

use proptest::prelude::*;
use status_indicator::{
    brightness::{heartbeat_level, HEARTBEAT_KEYFRAMES},
    encode, format, select_slot, AlertLevel, AnimationMode, BrightnessEngine, FormatRequest,
};

fn mode() -> impl Strategy<Value = AnimationMode> {
    prop_oneof![
        Just(AnimationMode::Classic),
        Just(AnimationMode::Flow),
        Just(AnimationMode::Heartbeat),
    ]
}

fn alert() -> impl Strategy<Value = AlertLevel> {
    prop_oneof![
        Just(AlertLevel::Normal),
        Just(AlertLevel::Warning),
        Just(AlertLevel::Error),
    ]
}

proptest! {
    #[test]
    fn brightness_never_exceeds_max(
        max in any::<u8>(),
        mode in mode(),
        alert in alert(),
        now in any::<u32>(),
        power in any::<i32>(),
    ) {
        let engine = BrightnessEngine::new(max);
        prop_assert!(engine.compute(mode, now, alert, power) <= max);
    }

    #[test]
    fn triangle_modes_repeat_every_period(
        max in any::<u8>(),
        now in 0u32..(u32::MAX - 6000),
        power in -2000i32..2000,
    ) {
        let engine = BrightnessEngine::new(max);
        for offset in [0u32, 1, 750, 1499, 1500, 2999] {
            let t = now + offset;
            for mode in [AnimationMode::Classic, AnimationMode::Flow] {
                prop_assert_eq!(
                    engine.compute(mode, t, AlertLevel::Normal, power),
                    engine.compute(mode, t + 3000, AlertLevel::Normal, power)
                );
            }
        }
    }

    #[test]
    fn heartbeat_repeats_every_alert_period(
        max in any::<u8>(),
        alert in alert(),
        now in 0u32..1_000_000_000,
    ) {
        let engine = BrightnessEngine::new(max);
        let period = alert.heartbeat_period_ms();
        prop_assert_eq!(
            engine.compute(AnimationMode::Heartbeat, now, alert, 0),
            engine.compute(AnimationMode::Heartbeat, now + period, alert, 0)
        );
    }

    #[test]
    fn heartbeat_level_stays_in_curve_bounds(phase in 0.0f32..1.0) {
        let level = heartbeat_level(phase);
        prop_assert!((0.05 - 1e-6..=0.80 + 1e-6).contains(&level));
    }

    #[test]
    fn slot_selection_is_periodic(s in 0u32..(u32::MAX - 16)) {
        prop_assert_eq!(select_slot(s), select_slot(s + 16));
    }

    #[test]
    fn encode_is_case_insensitive(c in proptest::char::range('a', 'z')) {
        prop_assert_eq!(encode(c), encode(c.to_ascii_uppercase()));
    }

    #[test]
    fn integer_always_fills_last_digit(value in any::<i32>(), zeros in any::<bool>()) {
        let frame = format(&FormatRequest::integer(value, zeros));
        prop_assert_ne!(frame.digit(3), 0);
    }
}

#[test]
fn heartbeat_keyframes_are_ordered() {
    for pair in HEARTBEAT_KEYFRAMES.windows(2) {
        assert!(pair[0].0 < pair[1].0);
    }
    assert_eq!(HEARTBEAT_KEYFRAMES[0].1, HEARTBEAT_KEYFRAMES[7].1);
}
