//! Infrastructure layer
//!
//! Hardware drivers, embassy tasks and the compile-time configuration
//! the firmware runs with.

pub(crate) mod config;
pub mod drivers;
pub mod supervisor;
pub mod tasks;
pub mod types;

/// Version stamped into the firmware at build time
pub fn firmware_version() -> &'static str {
    config::FIRMWARE.version
}

/// Human readable device name
pub fn device_name() -> &'static str {
    config::DEVICE.name
}
