mod http;

use myrtio_ring_composer::CommandSender;

pub use http::LightHttpController;

use crate::mk_static;

/// Create the controllers that feed the light command channel
pub fn init_controllers(commands: CommandSender) -> &'static LightHttpController {
    mk_static!(LightHttpController, LightHttpController::new(commands))
}
