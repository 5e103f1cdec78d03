//! Servo control by angle or pulse width.

use crate::address::{index_of, slot_of};
use crate::codec;
use crate::device::PbHub;
use crate::register::Function;
use crate::transport::Transport;
use log::trace;

impl<T: Transport> PbHub<T> {
    /// Sets the servo angle in degrees. The hub expects 0-180; larger values are sent as-is.
    pub fn set_servo_angle(&mut self, pin: u8, angle: u8) {
        let (slot, idx) = (slot_of(pin), index_of(pin));
        let Some(reg) = self.resolve_write(Function::ServoAngle, slot, idx) else {
            return;
        };
        let ok = self.write_register(reg, &[angle]);
        trace!(
            "SERVO slot={} idx={} angle={} (reg=0x{:02X} ok={})",
            slot,
            idx,
            angle,
            reg,
            ok
        );
    }

    /// Sets the servo pulse width in microseconds.
    pub fn set_servo_pulse(&mut self, pin: u8, micros: u16) {
        let (slot, idx) = (slot_of(pin), index_of(pin));
        let Some(reg) = self.resolve_write(Function::ServoPulse, slot, idx) else {
            return;
        };
        let data = codec::encode_servo_pulse(micros);
        let ok = self.write_register(reg, &data);
        trace!(
            "SERVO slot={} idx={} pulse={}us (reg=0x{:02X} data={:02X} {:02X} ok={})",
            slot,
            idx,
            micros,
            reg,
            data[0],
            data[1],
            ok
        );
    }
}
