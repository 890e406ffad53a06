//! Lighting modes and the per-tick state machine step
//!
//! [`step`] is a pure function of the current state, the tick time and an
//! optional command. It returns the next state together with the frame that
//! has to be drawn, so the whole state machine can be driven without timers
//! or hardware.

use embassy_time::{Duration, Instant};

use crate::{
    RING_LED_COUNT,
    brightness::{BrightnessDirection, BrightnessLevel},
    color::NamedColor,
    command::Command,
};

const RING_LEN: u32 = RING_LED_COUNT as u32;

const MODE_NAME_STATIC: &str = "static";
const MODE_NAME_PULSING: &str = "pulsing";
const MODE_NAME_CHASING: &str = "chasing";

/// Step periods of the animated modes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeTimings {
    /// Time between two brightness steps while pulsing
    pub pulse_period: Duration,
    /// Time between two pixel moves while chasing
    pub chase_period: Duration,
}

impl Default for ModeTimings {
    fn default() -> Self {
        Self {
            pulse_period: Duration::from_millis(500),
            chase_period: Duration::from_millis(100),
        }
    }
}

/// Currently active lighting behavior
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Solid color, nothing happens between commands
    Static,
    /// Brightness sweeps between the lowest and the highest level
    Pulsing {
        direction: BrightnessDirection,
        last_step: Instant,
    },
    /// A single lit pixel runs around the ring.
    ///
    /// `index` is the next pixel to light, kept below the ring length.
    Chasing { index: u32, last_step: Instant },
}

impl Mode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Static => MODE_NAME_STATIC,
            Self::Pulsing { .. } => MODE_NAME_PULSING,
            Self::Chasing { .. } => MODE_NAME_CHASING,
        }
    }
}

/// Complete light state owned by the mode controller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LightState {
    pub mode: Mode,
    pub color: NamedColor,
    pub brightness: BrightnessLevel,
}

impl LightState {
    /// State the device starts with after every reset
    pub const fn new() -> Self {
        Self {
            mode: Mode::Static,
            color: NamedColor::Yellow,
            brightness: BrightnessLevel::clamped(3),
        }
    }

    #[must_use]
    pub const fn with_color(mut self, color: NamedColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn with_brightness(mut self, brightness: BrightnessLevel) -> Self {
        self.brightness = brightness;
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

/// What the renderer has to draw after a step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderAction {
    /// Nothing changes on the LEDs
    Idle,
    /// Every pixel shows `color` at `brightness`
    Fill {
        color: NamedColor,
        brightness: BrightnessLevel,
    },
    /// Only pixel `index` (taken mod ring length) shows `color`
    Chase {
        color: NamedColor,
        brightness: BrightnessLevel,
        index: u32,
    },
}

/// Advance the state machine by one tick.
///
/// The command, if any, is applied first. The periodic step of the
/// resulting mode runs afterwards when its period has elapsed since the
/// previous step. At most one periodic step is taken per tick.
pub fn step(
    state: LightState,
    now: Instant,
    command: Option<Command>,
    timings: &ModeTimings,
) -> (LightState, RenderAction) {
    let (state, action) = match command {
        Some(command) => apply_command(state, now, command),
        None => (state, RenderAction::Idle),
    };

    match advance(state, now, timings) {
        Some(stepped) => stepped,
        None => (state, action),
    }
}

/// Apply a command. Every command replaces the mode.
pub fn apply_command(
    state: LightState,
    now: Instant,
    command: Command,
) -> (LightState, RenderAction) {
    let next = match command {
        Command::SetColor(color) => state.with_mode(Mode::Static).with_color(color),
        Command::SetBrightness(brightness) => {
            state.with_mode(Mode::Static).with_brightness(brightness)
        }
        Command::StartPulse => state.with_mode(Mode::Pulsing {
            direction: BrightnessDirection::Up,
            last_step: now,
        }),
        Command::StartChase => state.with_mode(Mode::Chasing {
            index: 0,
            last_step: now,
        }),
        Command::StopPulse | Command::StopChase => state.with_mode(Mode::Static),
    };

    log::debug!(
        "mode: {:?} -> {} (color {}, brightness {})",
        command,
        next.mode.as_str(),
        next.color.as_str(),
        next.brightness.value()
    );

    let action = match next.mode {
        Mode::Static => fill(&next),
        Mode::Pulsing { .. } | Mode::Chasing { .. } => RenderAction::Idle,
    };
    (next, action)
}

/// Run the periodic step of the current mode if it is due
fn advance(
    state: LightState,
    now: Instant,
    timings: &ModeTimings,
) -> Option<(LightState, RenderAction)> {
    match state.mode {
        Mode::Static => None,
        Mode::Pulsing {
            direction,
            last_step,
        } => {
            if !is_due(last_step, now, timings.pulse_period) {
                return None;
            }
            let action = fill(&state);
            let (brightness, direction) = state.brightness.bounce(direction);
            let next = state.with_brightness(brightness).with_mode(Mode::Pulsing {
                direction,
                last_step: now,
            });
            Some((next, action))
        }
        Mode::Chasing { index, last_step } => {
            if !is_due(last_step, now, timings.chase_period) {
                return None;
            }
            let action = RenderAction::Chase {
                color: state.color,
                brightness: state.brightness,
                index,
            };
            let next = state.with_mode(Mode::Chasing {
                index: next_chase_index(index),
                last_step: now,
            });
            Some((next, action))
        }
    }
}

fn fill(state: &LightState) -> RenderAction {
    RenderAction::Fill {
        color: state.color,
        brightness: state.brightness,
    }
}

/// Pixel after `index`, wrapping around the ring
fn next_chase_index(index: u32) -> u32 {
    (index % RING_LEN + 1) % RING_LEN
}

fn is_due(last_step: Instant, now: Instant, period: Duration) -> bool {
    now.checked_duration_since(last_step)
        .is_some_and(|elapsed| elapsed >= period)
}
