#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};
use esp_println::println;

use myrtio_ring_light::controllers::init_controllers;
use myrtio_ring_light::infrastructure::drivers::start_wifi_sta;
use myrtio_ring_light::infrastructure::tasks::{http_server_task, init_light, light_task};
use myrtio_ring_light::infrastructure::{device_name, firmware_version};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();
    println!("{} v{}", device_name(), firmware_version());

    // Initialize hardware
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Allocate heap memory (64 + 32 KB), the radio needs it
    esp_alloc::heap_allocator!(
        #[unsafe(link_section = ".dram2_uninit")] size: 64 * 1024
    );
    esp_alloc::heap_allocator!(size: 32 * 1024);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // The ring shows the default state before the network is up
    let (driver, commands) =
        init_light(peripherals.RMT, myrtio_ring_light::led_gpio!(peripherals));
    spawner.spawn(light_task(driver)).ok();

    let controller = init_controllers(commands);

    // Connect to Wi-Fi, then start serving the control page
    let stack = start_wifi_sta(spawner, peripherals.WIFI).await;
    spawner.spawn(http_server_task(stack, controller)).ok();

    loop {
        Timer::after(Duration::from_secs(5)).await;
    }
}
