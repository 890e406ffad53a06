//! HTTP server task
//!
//! Serves the light control page with the `LightHttpController`.

use embassy_net::Stack;

use crate::controllers::LightHttpController;
use crate::net::http::HttpServer;
use crate::infrastructure::config;
use crate::infrastructure::supervisor::device_supervisor;

const RX_BUFFER_SIZE: usize = 4096;
const TX_BUFFER_SIZE: usize = 4096;

/// Runs the HTTP server forever.
///
/// Allocates 8KB of buffers on the task stack (4KB RX + 4KB TX).
#[embassy_executor::task]
pub async fn http_server_task(stack: Stack<'static>, handler: &'static LightHttpController) {
    let server = HttpServer::new(handler);
    let mut supervisor = device_supervisor();
    let mut rx_buffer = [0u8; RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TX_BUFFER_SIZE];

    log::info!("http_server: listening on port {}", config::HTTP.port);
    server
        .listen_and_serve(
            stack,
            config::HTTP.port,
            &mut rx_buffer,
            &mut tx_buffer,
            &mut supervisor,
        )
        .await
}
