//! Tests for the pure state machine step.

mod common;

use common::at;
use myrtio_ring_composer::{
    BrightnessDirection, BrightnessLevel, Command, LightState, Mode, ModeTimings, NamedColor,
    RING_LED_COUNT, RenderAction, step,
};

fn level(value: u8) -> BrightnessLevel {
    BrightnessLevel::new(value).unwrap()
}

fn timings() -> ModeTimings {
    ModeTimings::default()
}

fn static_state(color: NamedColor, brightness: u8) -> LightState {
    LightState::new()
        .with_color(color)
        .with_brightness(level(brightness))
}

// -----------------------------------------------------------------------------
// Commands
// -----------------------------------------------------------------------------

#[test]
fn default_state_is_static_yellow_at_level_three() {
    let state = LightState::default();

    assert_eq!(state.mode, Mode::Static);
    assert_eq!(state.color, NamedColor::Yellow);
    assert_eq!(state.brightness, level(3));
}

#[test]
fn color_command_keeps_brightness_and_fills() {
    let state = static_state(NamedColor::Red, 2);
    let (next, action) = step(state, at(0), Some(Command::SetColor(NamedColor::Blue)), &timings());

    assert_eq!(next, static_state(NamedColor::Blue, 2));
    assert_eq!(
        action,
        RenderAction::Fill {
            color: NamedColor::Blue,
            brightness: level(2)
        }
    );
}

#[test]
fn color_command_cancels_animated_modes() {
    let animated = [
        Command::StartPulse,
        Command::StartChase,
    ];
    for start in animated {
        let (running, _) = step(static_state(NamedColor::Red, 3), at(0), Some(start), &timings());
        assert_ne!(running.mode, Mode::Static);

        let (next, _) = step(running, at(50), Some(Command::SetColor(NamedColor::Green)), &timings());
        assert_eq!(next.mode, Mode::Static);
        assert_eq!(next.color, NamedColor::Green);
    }
}

#[test]
fn brightness_command_keeps_color_and_goes_static() {
    let (chasing, _) = step(
        static_state(NamedColor::Green, 3),
        at(0),
        Some(Command::StartChase),
        &timings(),
    );
    let (next, action) = step(chasing, at(10), Some(Command::SetBrightness(level(5))), &timings());

    assert_eq!(next, static_state(NamedColor::Green, 5));
    assert_eq!(
        action,
        RenderAction::Fill {
            color: NamedColor::Green,
            brightness: level(5)
        }
    );
}

#[test]
fn invalid_brightness_never_becomes_a_command() {
    for raw in ["9", "0", "abc", "", "6"] {
        assert!(BrightnessLevel::parse_from_str(raw).is_none(), "{raw}");
    }
}

#[test]
fn start_enters_pulsing_upwards_without_drawing() {
    let state = static_state(NamedColor::Blue, 4);
    let (next, action) = step(state, at(1_000), Some(Command::StartPulse), &timings());

    assert_eq!(
        next.mode,
        Mode::Pulsing {
            direction: BrightnessDirection::Up,
            last_step: at(1_000)
        }
    );
    assert_eq!(next.color, NamedColor::Blue);
    assert_eq!(next.brightness, level(4));
    assert_eq!(action, RenderAction::Idle);
}

#[test]
fn stop_twice_equals_stop_once() {
    let (pulsing, _) = step(
        static_state(NamedColor::Red, 3),
        at(0),
        Some(Command::StartPulse),
        &timings(),
    );
    let (pulsing, _) = step(pulsing, at(500), None, &timings());

    let (once, _) = step(pulsing, at(600), Some(Command::StopPulse), &timings());
    let (twice, _) = step(once, at(700), Some(Command::StopPulse), &timings());

    assert_eq!(once, twice);
    assert_eq!(once.mode, Mode::Static);
}

#[test]
fn runstart_resets_index() {
    let state = static_state(NamedColor::Red, 3).with_mode(Mode::Chasing {
        index: 7,
        last_step: at(0),
    });
    let (next, _) = step(state, at(20), Some(Command::StartChase), &timings());

    assert_eq!(
        next.mode,
        Mode::Chasing {
            index: 0,
            last_step: at(20)
        }
    );
}

#[test]
fn runstop_keeps_color() {
    let (chasing, _) = step(
        static_state(NamedColor::Yellow, 2),
        at(0),
        Some(Command::StartChase),
        &timings(),
    );
    let (next, action) = step(chasing, at(250), Some(Command::StopChase), &timings());

    assert_eq!(next, static_state(NamedColor::Yellow, 2));
    assert!(matches!(action, RenderAction::Fill { .. }));
}

// -----------------------------------------------------------------------------
// Periodic steps
// -----------------------------------------------------------------------------

#[test]
fn static_mode_never_draws_on_ticks() {
    let state = static_state(NamedColor::Red, 3);
    for ms in [0, 100, 500, 10_000] {
        let (next, action) = step(state, at(ms), None, &timings());
        assert_eq!(next, state);
        assert_eq!(action, RenderAction::Idle);
    }
}

#[test]
fn pulse_waits_for_full_period() {
    let (pulsing, _) = step(
        static_state(NamedColor::Red, 3),
        at(0),
        Some(Command::StartPulse),
        &timings(),
    );
    let (next, action) = step(pulsing, at(499), None, &timings());

    assert_eq!(next, pulsing);
    assert_eq!(action, RenderAction::Idle);
}

#[test]
fn pulse_draws_current_level_then_advances() {
    let (pulsing, _) = step(
        static_state(NamedColor::Red, 3),
        at(0),
        Some(Command::StartPulse),
        &timings(),
    );
    let (next, action) = step(pulsing, at(500), None, &timings());

    assert_eq!(
        action,
        RenderAction::Fill {
            color: NamedColor::Red,
            brightness: level(3)
        }
    );
    assert_eq!(next.brightness, level(4));
}

#[test]
fn pulse_levels_bounce_between_one_and_five() {
    let (mut state, _) = step(
        static_state(NamedColor::Blue, 1),
        at(0),
        Some(Command::StartPulse),
        &timings(),
    );

    let mut drawn = Vec::new();
    for i in 1..=12u64 {
        let (next, action) = step(state, at(i * 500), None, &timings());
        if let RenderAction::Fill { brightness, .. } = action {
            drawn.push(brightness.value());
        }
        state = next;
    }

    assert_eq!(drawn, [1, 2, 3, 4, 5, 4, 3, 2, 1, 2, 3, 4]);
}

#[test]
fn pulse_level_stays_in_range_and_changes_by_one() {
    let (mut state, _) = step(
        static_state(NamedColor::Green, 5),
        at(0),
        Some(Command::StartPulse),
        &timings(),
    );

    let mut previous = state.brightness.value();
    for i in 1..=40u64 {
        let (next, _) = step(state, at(i * 500), None, &timings());
        let current = next.brightness.value();
        assert!((1..=5).contains(&current));
        assert_eq!(previous.abs_diff(current), 1);
        previous = current;
        state = next;
    }
}

#[test]
fn late_tick_takes_a_single_step() {
    let (pulsing, _) = step(
        static_state(NamedColor::Red, 2),
        at(0),
        Some(Command::StartPulse),
        &timings(),
    );
    let (next, _) = step(pulsing, at(5_000), None, &timings());

    assert_eq!(next.brightness, level(3));
    assert!(matches!(
        next.mode,
        Mode::Pulsing { last_step, .. } if last_step == at(5_000)
    ));
}

#[test]
fn chase_advances_one_pixel_per_period() {
    let (mut state, _) = step(
        static_state(NamedColor::Red, 3),
        at(0),
        Some(Command::StartChase),
        &timings(),
    );

    for i in 0..30u32 {
        let now = at(u64::from(i + 1) * 100);
        let (next, action) = step(state, now, None, &timings());
        assert_eq!(
            action,
            RenderAction::Chase {
                color: NamedColor::Red,
                brightness: level(3),
                index: i % RING_LED_COUNT as u32
            }
        );
        state = next;
    }
}

#[test]
fn chase_stays_continuous_near_counter_limit() {
    let mut state = static_state(NamedColor::Red, 3).with_mode(Mode::Chasing {
        index: u32::MAX - 1,
        last_step: at(0),
    });

    let mut lit = Vec::new();
    for i in 1..=3u64 {
        let (next, action) = step(state, at(i * 100), None, &timings());
        let RenderAction::Chase { index, .. } = action else {
            panic!("expected a chase frame, got {action:?}");
        };
        lit.push(index as usize % RING_LED_COUNT);
        state = next;
    }

    assert_eq!(lit, [2, 3, 4]);
}

#[test]
fn chase_index_wraps_at_ring_length() {
    let state = static_state(NamedColor::Red, 3).with_mode(Mode::Chasing {
        index: RING_LED_COUNT as u32 - 1,
        last_step: at(0),
    });
    let (next, _) = step(state, at(100), None, &timings());

    assert!(matches!(next.mode, Mode::Chasing { index: 0, .. }));
}
