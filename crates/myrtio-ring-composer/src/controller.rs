//! Mode controller
//!
//! Binds the light state machine to a renderer: every tick runs [`step`]
//! and draws the resulting [`RenderAction`].

use embassy_time::Instant;

use crate::{
    command::Command,
    driver::LedDriver,
    mode::{LightState, ModeTimings, RenderAction, step},
    renderer::LedRenderer,
};

pub struct ModeController<D: LedDriver<N>, const N: usize> {
    state: LightState,
    timings: ModeTimings,
    renderer: LedRenderer<D, N>,
}

impl<D: LedDriver<N>, const N: usize> ModeController<D, N> {
    /// Create a controller and draw the initial state
    pub fn new(driver: D, state: LightState, timings: ModeTimings) -> Self {
        let mut controller = Self {
            state,
            timings,
            renderer: LedRenderer::new(driver, state.brightness),
        };
        controller.render(RenderAction::Fill {
            color: state.color,
            brightness: state.brightness,
        });
        controller
    }

    /// Apply an optional command and run the periodic step of the active mode.
    ///
    /// Returns the action that was drawn.
    pub fn tick(&mut self, now: Instant, command: Option<Command>) -> RenderAction {
        let (state, action) = step(self.state, now, command, &self.timings);
        self.state = state;
        self.render(action);
        action
    }

    /// Apply a command immediately
    pub fn handle_command(&mut self, now: Instant, command: Command) -> RenderAction {
        self.tick(now, Some(command))
    }

    pub fn state(&self) -> &LightState {
        &self.state
    }

    pub fn renderer(&self) -> &LedRenderer<D, N> {
        &self.renderer
    }

    fn render(&mut self, action: RenderAction) {
        match action {
            RenderAction::Idle => {}
            RenderAction::Fill { color, brightness } => {
                self.renderer.set_brightness(brightness);
                self.renderer.set_all(color.rgb());
                self.renderer.flush();
            }
            RenderAction::Chase {
                color,
                brightness,
                index,
            } => {
                self.renderer.set_brightness(brightness);
                self.renderer.clear();
                self.renderer.set_pixel(index as usize, color.rgb());
                self.renderer.flush();
            }
        }
    }
}
