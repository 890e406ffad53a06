use static_cell::make_static;

use esp_hal::xtensa_lx::interrupt;
use esp_hal::{gpio::interconnect::PeripheralOutput, peripherals::RMT, rmt::Rmt, time::Rate};
use esp_hal_smartled::{SmartLedsAdapter, buffer_size, smart_led_buffer};
use smart_leds::SmartLedsWrite;

use myrtio_ring_composer::{Fault, LedDriver, RING_LED_COUNT, Rgb};

use crate::infrastructure::supervisor::escalate;

/// WS2812 ring driver using the RMT peripheral
///
/// The RMT (Remote Control) peripheral generates the precise timing
/// signals the WS2812 data line needs.
pub struct EspLedDriver<'a> {
    adapter: SmartLedsAdapter<'a, { buffer_size(RING_LED_COUNT) }>,
}

impl<'a> EspLedDriver<'a> {
    /// Create a new ring driver
    ///
    /// # Arguments
    /// * `rmt` - RMT peripheral
    /// * `pin` - GPIO pin connected to the LED data line
    pub(crate) fn new<O>(rmt: RMT<'a>, pin: O) -> Self
    where
        O: PeripheralOutput<'a>,
    {
        let Ok(rmt) = Rmt::new(rmt, Rate::from_mhz(80)) else {
            escalate(Fault::Fatal)
        };

        let rmt_buffer = make_static!(smart_led_buffer!(RING_LED_COUNT));
        let adapter = SmartLedsAdapter::new(rmt.channel0, pin, rmt_buffer);

        Self { adapter }
    }
}

impl LedDriver<RING_LED_COUNT> for EspLedDriver<'static> {
    fn write(&mut self, colors: &[Rgb; RING_LED_COUNT]) {
        // A failed frame is dropped, the next flush overwrites it anyway
        let result = interrupt::free(|| self.adapter.write(colors.iter().copied()));
        if let Err(e) = result {
            log::debug!("led: write error: {:?}", e);
        }
    }
}
