use crate::infrastructure::drivers::EspLedDriver;

pub type LightDriver = EspLedDriver<'static>;
