//! Device-level fault handling
//!
//! Binds the composer supervisor to a chip reset. After a reset the
//! firmware boots from scratch and every state is back at its default.

use myrtio_ring_composer::{Fault, Supervisor};

/// Supervisor restarting the chip on permanent faults
pub type DeviceSupervisor = Supervisor<fn()>;

pub fn device_supervisor() -> DeviceSupervisor {
    Supervisor::new(restart_device as fn())
}

/// Hand an unrecoverable fault to the supervisor. Does not return.
pub fn escalate(fault: Fault) -> ! {
    let recovery = device_supervisor().handle(fault);
    unreachable!("device restart returned, recovery {:?}", recovery)
}

fn restart_device() {
    esp_println::println!("supervisor: restarting device");
    esp_hal::system::software_reset();
}
