//! LED renderer
//!
//! Owns the pixel buffer and the global brightness. The buffer always holds
//! full-intensity colors; brightness is applied to a copy at flush time.

use crate::{
    brightness::BrightnessLevel,
    color::{OFF, Rgb},
    driver::LedDriver,
    math8::scale8,
};

/// Pixel buffer bound to a hardware driver
pub struct LedRenderer<D: LedDriver<N>, const N: usize> {
    driver: D,
    buffer: [Rgb; N],
    brightness: BrightnessLevel,
}

impl<D: LedDriver<N>, const N: usize> LedRenderer<D, N> {
    pub fn new(driver: D, brightness: BrightnessLevel) -> Self {
        Self {
            driver,
            buffer: [OFF; N],
            brightness,
        }
    }

    /// Write `color` to every pixel
    pub fn set_all(&mut self, color: Rgb) {
        self.buffer = [color; N];
    }

    /// Write `color` to a single pixel. The index wraps around the buffer.
    pub fn set_pixel(&mut self, index: usize, color: Rgb) {
        if N == 0 {
            return;
        }
        self.buffer[index % N] = color;
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.set_all(OFF);
    }

    pub fn set_brightness(&mut self, level: BrightnessLevel) {
        self.brightness = level;
    }

    /// Push the buffer to the hardware at the current brightness
    pub fn flush(&mut self) {
        let mut frame = self.buffer;
        apply_brightness(&mut frame, self.brightness.scale());
        self.driver.write(&frame);
    }

    pub fn brightness(&self) -> BrightnessLevel {
        self.brightness
    }

    /// Unscaled buffer contents
    pub fn pixels(&self) -> &[Rgb; N] {
        &self.buffer
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }
}

fn apply_brightness<const N: usize>(frame: &mut [Rgb; N], scale: u8) {
    if scale == 255 {
        return;
    }

    for pixel in frame.iter_mut() {
        pixel.r = scale8(pixel.r, scale);
        pixel.g = scale8(pixel.g, scale);
        pixel.b = scale8(pixel.b, scale);
    }
}
