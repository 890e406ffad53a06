//! Control loop
//!
//! Each iteration takes at most one pending command, reads the clock and
//! ticks the mode controller. The loop ends only when the shutdown signal
//! is raised.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Timer};

use crate::{
    command::CommandReceiver,
    controller::ModeController,
    driver::LedDriver,
    mode::RenderAction,
};

/// Signal that stops [`ControlLoop::run`]
pub type ShutdownSignal = Signal<CriticalSectionRawMutex, ()>;

pub struct ControlLoop<D: LedDriver<N>, const N: usize> {
    controller: ModeController<D, N>,
    commands: CommandReceiver,
}

impl<D: LedDriver<N>, const N: usize> ControlLoop<D, N> {
    pub fn new(controller: ModeController<D, N>, commands: CommandReceiver) -> Self {
        Self {
            controller,
            commands,
        }
    }

    /// Run a single iteration at `now`
    pub fn poll(&mut self, now: Instant) -> RenderAction {
        let command = self.commands.try_receive().ok();
        self.controller.tick(now, command)
    }

    /// Poll every `period` until `shutdown` is signaled
    pub async fn run(&mut self, period: Duration, shutdown: &ShutdownSignal) {
        log::info!("control_loop: started");
        while !shutdown.signaled() {
            self.poll(Instant::now());
            Timer::after(period).await;
        }
        log::info!("control_loop: shutdown requested, stopping");
    }

    pub fn controller(&self) -> &ModeController<D, N> {
        &self.controller
    }
}
