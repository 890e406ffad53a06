mod http_server;
mod light;

pub use http_server::http_server_task;
pub use light::{init_light, light_task};
