mod led_ws2812;
mod random;
pub mod wifi_sta;

pub use led_ws2812::EspLedDriver;
pub use wifi_sta::start_wifi_sta;
