//! Digital I/O and analog input.

use crate::address::{index_of, slot_of};
use crate::codec;
use crate::device::PbHub;
use crate::register::Function;
use crate::transport::Transport;
use log::{debug, trace};

/// Requested direction of a hub channel. The hub switches direction by
/// itself depending on which register is touched, so this is bookkeeping only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinMode {
    pub input: bool,
    pub output: bool,
}

impl PinMode {
    pub const NONE: PinMode = PinMode {
        input: false,
        output: false,
    };
    pub const INPUT: PinMode = PinMode {
        input: true,
        output: false,
    };
    pub const OUTPUT: PinMode = PinMode {
        input: false,
        output: true,
    };
}

impl<T: Transport> PbHub<T> {
    /// Kept for API symmetry with other expanders; issues no transaction.
    pub fn pin_mode(&mut self, pin: u8, mode: PinMode) {
        debug!("pin_mode(pin={}, mode={:?}) -> no-op", pin, mode);
    }

    /// Drives a channel high or low. Failures are recorded, not returned.
    pub fn digital_write(&mut self, pin: u8, state: bool) {
        let (slot, idx) = (slot_of(pin), index_of(pin));
        let Some(reg) = self.resolve_write(Function::WriteDigital, slot, idx) else {
            return;
        };
        let payload = codec::encode_digital(state);
        let ok = self.write_register(reg, &payload);
        debug!(
            "DWRITE pin {} (slot={} idx={}) -> {} (reg=0x{:02X} val=0x{:02X} ok={})",
            pin,
            slot,
            idx,
            if state { "ON" } else { "OFF" },
            reg,
            payload[0],
            ok
        );
    }

    /// Reads a channel level. Returns `false` if the transaction fails.
    pub fn digital_read(&mut self, pin: u8) -> bool {
        let (slot, idx) = (slot_of(pin), index_of(pin));
        let Some(reg) = self.resolve_read(Function::ReadDigital, slot, idx) else {
            return false;
        };
        let buf = self.read_register::<1>(reg);
        let state = codec::decode_digital(buf);
        trace!(
            "DREAD pin {} (slot={} idx={}) <- {} (reg=0x{:02X} val=0x{:02X})",
            pin,
            slot,
            idx,
            if state { "ON" } else { "OFF" },
            reg,
            buf[0]
        );
        state
    }

    /// Reads the ADC behind a logical pin. Returns 0 if the transaction fails.
    ///
    /// On the full map the ADC is per slot, so both channels of a slot read
    /// the same register.
    pub fn analog_read(&mut self, pin: u8) -> u16 {
        let (slot, idx) = (slot_of(pin), index_of(pin));
        let Some(reg) = self.resolve_read(Function::ReadAnalog, slot, idx) else {
            return 0;
        };
        let buf = self.read_register::<2>(reg);
        let value = codec::decode_analog(buf);
        trace!(
            "AREAD pin {} (slot={} idx={}) <- {} (reg=0x{:02X} raw={:02X} {:02X})",
            pin,
            slot,
            idx,
            value,
            reg,
            buf[0],
            buf[1]
        );
        value
    }
}
