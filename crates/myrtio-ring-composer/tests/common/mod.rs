#![allow(dead_code)]

use embassy_time::Instant;
use myrtio_ring_composer::{
    LedDriver, ModeController, ModeTimings, NamedColor, RING_LED_COUNT, Rgb, color::OFF,
    mode::LightState,
};

pub const N: usize = RING_LED_COUNT;

/// Driver that keeps every frame written to it
#[derive(Default)]
pub struct RecordingDriver {
    pub frames: Vec<[Rgb; N]>,
}

impl LedDriver<N> for RecordingDriver {
    fn write(&mut self, colors: &[Rgb; N]) {
        self.frames.push(*colors);
    }
}

impl RecordingDriver {
    pub fn last_frame(&self) -> Option<&[Rgb; N]> {
        self.frames.last()
    }
}

pub fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

pub fn controller_with(state: LightState) -> ModeController<RecordingDriver, N> {
    ModeController::new(RecordingDriver::default(), state, ModeTimings::default())
}

/// Indices of the pixels that are not off
pub fn lit_pixels(frame: &[Rgb; N]) -> Vec<usize> {
    frame
        .iter()
        .enumerate()
        .filter(|(_, pixel)| **pixel != OFF)
        .map(|(i, _)| i)
        .collect()
}

pub fn red() -> Rgb {
    NamedColor::Red.rgb()
}
