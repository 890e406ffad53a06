use core::str::FromStr;

use embassy_executor::Spawner;
use embassy_net::{DhcpConfig, Runner, Stack, StackResources, StaticConfigV4};
use embassy_time::{Duration, Timer};
use esp_hal::peripherals::WIFI;
use esp_radio::wifi::{
    AuthMethod,
    ClientConfig,
    Config,
    ModeConfig,
    WifiController,
    WifiDevice,
    WifiEvent,
    WifiStaState,
};
use myrtio_ring_composer::{Fault, NetworkFault, Recovery, RetryBudget};
use static_cell::make_static;

use super::random::get_seed;
use crate::infrastructure::{
    config,
    supervisor::{device_supervisor, escalate},
};

/// Maximum length of the hostname
const MAX_HOSTNAME_LEN: usize = 32;

const MAX_NETWORK_CONNECTIONS: usize = 4;

const RECONNECT_DELAY: Duration = Duration::from_millis(2000);
const RETRY_DELAY: Duration = Duration::from_millis(5000);

/// Type alias for the hostname
pub type Hostname = heapless::String<MAX_HOSTNAME_LEN>;

/// Start the Wi-Fi STA (Station) mode
///
/// Connects to the configured network and waits until an IPv4 address is
/// obtained. Radio setup failures restart the device.
pub async fn start_wifi_sta(spawner: Spawner, wifi_device: WIFI<'static>) -> Stack<'static> {
    let Ok(radio) = esp_radio::init() else {
        escalate(Fault::Network(NetworkFault::Permanent))
    };
    let esp_radio_ctrl = &*make_static!(radio);
    let Ok((controller, interfaces)) =
        esp_radio::wifi::new(esp_radio_ctrl, wifi_device, Config::default())
    else {
        escalate(Fault::Network(NetworkFault::Permanent))
    };

    let mut dhcp_config = DhcpConfig::default();
    dhcp_config.hostname = Hostname::from_str(config::DEVICE.hostname).ok();

    let net_config = embassy_net::Config::dhcpv4(dhcp_config);

    let network_resources = make_static!(StackResources::<{ MAX_NETWORK_CONNECTIONS }>::new());
    let (stack, runner) =
        embassy_net::new(interfaces.sta, net_config, network_resources, get_seed());

    spawner.spawn(wifi_connection_task(controller)).ok();
    spawner.spawn(network_runner_task(runner)).ok();

    let ip_config = wait_for_connection(stack).await;
    log::info!("network: connected, address {}", ip_config.address);

    stack
}

/// Background task for connecting to the Wi-Fi network and reconnecting if needed
///
/// Association failures are transient until `max_connect_attempts` of them
/// happen in a row; then the device restarts.
#[embassy_executor::task]
pub async fn wifi_connection_task(mut controller: WifiController<'static>) {
    let mut supervisor = device_supervisor();
    let mut budget = RetryBudget::new(config::WIFI.max_connect_attempts);

    loop {
        // Wait until we're no longer connected
        if esp_radio::wifi::sta_state() == WifiStaState::Connected {
            controller.wait_for_event(WifiEvent::StaDisconnected).await;
            log::warn!("network: disconnected");
            Timer::after(RECONNECT_DELAY).await;
        }
        if !matches!(controller.is_started(), Ok(true)) {
            let client_config = if config::WIFI.password.is_empty() {
                ClientConfig::default()
                    .with_ssid(config::WIFI.ssid.into())
                    .with_auth_method(AuthMethod::None)
            } else {
                ClientConfig::default()
                    .with_ssid(config::WIFI.ssid.into())
                    .with_password(config::WIFI.password.into())
            };
            let mode_config = ModeConfig::Client(client_config);
            if let Err(e) = controller.set_config(&mode_config) {
                log::error!("network: invalid client config: {:?}", e);
                escalate(Fault::Network(NetworkFault::Permanent));
            }
            if let Err(e) = controller.start_async().await {
                log::error!("network: cannot start radio: {:?}", e);
                escalate(Fault::Network(NetworkFault::Permanent));
            }
        }

        log::info!("network: connecting to '{}'", config::WIFI.ssid);
        match controller.connect_async().await {
            Ok(()) => budget.reset(),
            Err(e) => {
                log::warn!("network: error connecting: {:?}", e);
                if supervisor.handle(Fault::Network(budget.fail())) == Recovery::Retry {
                    Timer::after(RETRY_DELAY).await;
                }
            }
        }
    }
}

/// Background task for running the network stack
#[embassy_executor::task]
pub async fn network_runner_task(mut runner: Runner<'static, WifiDevice<'static>>) {
    runner.run().await;
}

/// Wait for full network connectivity (link + IP address)
/// Returns the obtained IPv4 configuration
async fn wait_for_connection(stack: Stack<'_>) -> StaticConfigV4 {
    // Wait for the network link to become active
    loop {
        if stack.is_link_up() {
            break;
        }
        Timer::after(Duration::from_millis(100)).await;
    }

    // Wait for the network stack to obtain an IPv4 address via DHCP
    loop {
        if let Some(config) = stack.config_v4() {
            return config;
        }
        Timer::after(Duration::from_millis(100)).await;
    }
}
