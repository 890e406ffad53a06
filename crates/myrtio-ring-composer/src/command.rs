use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::{brightness::BrightnessLevel, color::NamedColor};

/// Commands that change the light mode or its parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show a solid color, keeping the brightness
    SetColor(NamedColor),
    /// Show a solid color at a new brightness, keeping the color
    SetBrightness(BrightnessLevel),
    /// Start sweeping the brightness up and down
    StartPulse,
    /// Stop the sweep and hold the current brightness
    StopPulse,
    /// Start the running light from the first pixel
    StartChase,
    /// Stop the running light and show a solid color
    StopChase,
}

const COMMAND_CHANNEL_SIZE: usize = 4;

/// Type alias for command sender
pub type CommandSender =
    Sender<'static, CriticalSectionRawMutex, Command, COMMAND_CHANNEL_SIZE>;

/// Type alias for command receiver
pub type CommandReceiver =
    Receiver<'static, CriticalSectionRawMutex, Command, COMMAND_CHANNEL_SIZE>;

/// Type alias for the command channel
pub type CommandChannel = Channel<CriticalSectionRawMutex, Command, COMMAND_CHANNEL_SIZE>;
