#![allow(clippy::unreadable_literal)]

use embassy_time::Duration;
use myrtio_ring_composer::ModeTimings;

pub(crate) struct WifiConfig {
    pub ssid: &'static str,
    pub password: &'static str,
    /// Failed associations in a row before the device restarts
    pub max_connect_attempts: u32,
}

pub(crate) struct DeviceConfig {
    pub name: &'static str,
    pub hostname: &'static str,
}

pub(crate) struct LightConfig {
    pub timings: ModeTimings,
    /// Control loop iteration period
    pub poll_period: Duration,
}

pub(crate) struct HttpConfig {
    pub port: u16,
}

pub(crate) struct FirmwareConfig {
    pub version: &'static str,
}

pub(crate) const WIFI: WifiConfig = WifiConfig {
    ssid: env!("WIFI_SSID"),
    password: env!("WIFI_PASSWORD"),
    max_connect_attempts: 10,
};

pub(crate) const DEVICE: DeviceConfig = DeviceConfig {
    name: "MyrtIO Ring Light",
    hostname: "myrtio-ring-light",
};

pub(crate) const LIGHT: LightConfig = LightConfig {
    timings: ModeTimings {
        pulse_period: Duration::from_millis(500),
        chase_period: Duration::from_millis(100),
    },
    poll_period: Duration::from_millis(10),
};

pub(crate) const HTTP: HttpConfig = HttpConfig { port: 80 };

pub(crate) const FIRMWARE: FirmwareConfig = FirmwareConfig {
    version: env!("BUILD_VERSION"),
};

#[macro_export]
macro_rules! led_gpio {
    ($p:expr) => {
        $p.GPIO25
    };
}
