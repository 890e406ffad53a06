use myrtio_ring_composer::{CONTROL_PAGE_HTML, CommandSender, parse_route};

use crate::net::http::{
    HttpConnection,
    HttpHandler,
    HttpMethod,
    HttpResult,
    ResponseHeaders,
};

/// Serves the control page and turns routes into light commands
pub struct LightHttpController {
    commands: CommandSender,
}

impl LightHttpController {
    pub fn new(commands: CommandSender) -> Self {
        Self { commands }
    }
}

impl HttpHandler for LightHttpController {
    async fn handle_request(&self, conn: &mut HttpConnection<'_>) -> HttpResult {
        let (method, target) = conn.route();
        log::debug!("http: {:?} {}", method, target);

        if method != HttpMethod::Get {
            return conn
                .write_text(ResponseHeaders::method_not_allowed("GET"), "Method Not Allowed")
                .await;
        }

        let Some(commands) = parse_route(target) else {
            return conn.write_text(ResponseHeaders::not_found(), "Not Found").await;
        };

        for command in commands {
            self.commands.send(command).await;
        }

        conn.write_html(CONTROL_PAGE_HTML).await
    }
}
