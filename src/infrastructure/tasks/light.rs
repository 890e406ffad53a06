use embassy_sync::channel::Channel;
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::peripherals::RMT;

use myrtio_ring_composer::{
    CommandChannel,
    CommandSender,
    ControlLoop,
    LightState,
    ModeController,
    RING_LED_COUNT,
    ShutdownSignal,
};

use crate::infrastructure::config;
use crate::infrastructure::drivers::EspLedDriver;
use crate::infrastructure::types::LightDriver;

static LIGHT_COMMAND_CHANNEL: CommandChannel = Channel::new();

/// Raised to stop the control loop. Nothing raises it in normal operation.
static LIGHT_SHUTDOWN: ShutdownSignal = ShutdownSignal::new();

/// Task running the light control loop
///
/// Starts in the default state and renders it before the first poll.
#[embassy_executor::task]
pub async fn light_task(driver: LightDriver) {
    let controller: ModeController<LightDriver, RING_LED_COUNT> =
        ModeController::new(driver, LightState::new(), config::LIGHT.timings);
    let mut control_loop = ControlLoop::new(controller, LIGHT_COMMAND_CHANNEL.receiver());

    control_loop
        .run(config::LIGHT.poll_period, &LIGHT_SHUTDOWN)
        .await;

    let state = control_loop.controller().state();
    log::warn!("light: control loop stopped in {} mode", state.mode.as_str());
}

pub fn init_light<O>(rmt: RMT<'static>, pin: O) -> (LightDriver, CommandSender)
where
    O: PeripheralOutput<'static>,
{
    let driver = EspLedDriver::new(rmt, pin);

    (driver, LIGHT_COMMAND_CHANNEL.sender())
}
