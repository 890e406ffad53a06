#![no_std]

//! Ring light composer
//!
//! Hardware-independent core of the ring light firmware:
//! - `driver` - Hardware abstraction ([`LedDriver`] trait)
//! - `renderer` - Pixel buffer with global brightness
//! - `mode` - Lighting modes and the pure per-tick step
//! - `controller` - Mode state machine bound to a renderer
//! - `command` - Commands and the channel that carries them
//! - `http` - Route and query parsing for the control surface
//! - `control_loop` - Polling loop that drives the controller
//! - `supervisor` - Fault classification and restart policy
//!
//! The controller is generic over `LedDriver`, so everything here runs on the
//! host as well as on the device.

pub mod brightness;
pub mod color;
pub mod command;
pub mod control_loop;
pub mod controller;
pub mod driver;
pub mod http;
pub mod math8;
pub mod mode;
pub mod page;
pub mod renderer;
pub mod supervisor;

/// Number of pixels on the ring
pub const RING_LED_COUNT: usize = 12;

pub use brightness::{BrightnessDirection, BrightnessLevel};
pub use color::{NamedColor, Rgb};
pub use command::{Command, CommandChannel, CommandReceiver, CommandSender};
pub use control_loop::{ControlLoop, ShutdownSignal};
pub use controller::ModeController;
pub use driver::LedDriver;
pub use http::{RouteCommands, parse_route};
pub use mode::{LightState, Mode, ModeTimings, RenderAction, step};
pub use page::CONTROL_PAGE_HTML;
pub use renderer::LedRenderer;
pub use supervisor::{Fault, NetworkFault, Recovery, RetryBudget, Supervisor};
