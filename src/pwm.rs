//! PWM output (full map only).

use crate::address::{index_of, slot_of};
use crate::device::PbHub;
use crate::register::Function;
use crate::transport::Transport;
use log::trace;

impl<T: Transport> PbHub<T> {
    /// Sets the raw 8-bit duty of a channel (0 = off, 255 = fully on).
    pub fn set_pwm(&mut self, pin: u8, duty: u8) {
        let (slot, idx) = (slot_of(pin), index_of(pin));
        let Some(reg) = self.resolve_write(Function::WritePwm, slot, idx) else {
            return;
        };
        let ok = self.write_register(reg, &[duty]);
        trace!(
            "PWM slot={} idx={} duty={} (reg=0x{:02X} ok={})",
            slot,
            idx,
            duty,
            reg,
            ok
        );
    }
}
