use embassy_net::{Stack, tcp::TcpSocket};
use embassy_time::{Duration, Timer};
use myrtio_ring_composer::{Fault, NetworkFault, Recovery};

use super::{HttpResult, connection::HttpConnection};
use crate::infrastructure::supervisor::DeviceSupervisor;

const SOCKET_TIMEOUT: Duration = Duration::from_secs(30);
const RETRY_BACKOFF: Duration = Duration::from_millis(100);

pub(crate) trait HttpHandler {
    async fn handle_request(&self, conn: &mut HttpConnection<'_>) -> HttpResult;
}

/// Single-connection HTTP server, one request per connection
pub(crate) struct HttpServer<'a, T: HttpHandler> {
    handler: &'a T,
}

impl<'a, T: HttpHandler> HttpServer<'a, T> {
    pub(crate) fn new(handler: &'a T) -> Self {
        Self { handler }
    }

    /// Accept and serve connections forever.
    ///
    /// The socket is closed once the handler has answered and aborted if it
    /// failed. Network errors are reported to the supervisor; malformed
    /// requests are dropped.
    pub(crate) async fn listen_and_serve(
        &self,
        stack: Stack<'static>,
        port: u16,
        rx_buffer: &mut [u8],
        tx_buffer: &mut [u8],
        supervisor: &mut DeviceSupervisor,
    ) -> ! {
        loop {
            let mut socket = TcpSocket::new(stack, rx_buffer, tx_buffer);
            socket.set_timeout(Some(SOCKET_TIMEOUT));

            if let Err(e) = socket.accept(port).await {
                log::warn!("http_server: accept error: {:?}", e);
                report(supervisor, Fault::Network(NetworkFault::Transient)).await;
                continue;
            }

            let mut conn = match HttpConnection::from_socket(socket).await {
                Ok(connection) => connection,
                Err(e) => {
                    log::debug!("http_server: dropping request: {:?}", e);
                    if let Some(fault) = e.as_fault() {
                        report(supervisor, fault).await;
                    }
                    continue;
                }
            };

            let result = match self.handler.handle_request(&mut conn).await {
                Ok(()) => conn.close().await,
                Err(e) => {
                    conn.abort().await;
                    Err(e)
                }
            };
            if let Err(e) = result {
                log::warn!("http_server: connection error: {:?}", e);
                if let Some(fault) = e.as_fault() {
                    report(supervisor, fault).await;
                }
            }
        }
    }
}

/// Hand a fault to the supervisor and back off before the next accept
async fn report(supervisor: &mut DeviceSupervisor, fault: Fault) {
    if supervisor.handle(fault) == Recovery::Retry {
        Timer::after(RETRY_BACKOFF).await;
    }
}
