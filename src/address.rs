//! Logical pin decoding and slot base addresses.
//!
//! Calling code names a channel with a logical pin `slot * 10 + idx`,
//! e.g. pin 31 is channel 1 of slot 3.

use crate::consts;
use crate::error::{Error, Result};
use std::fmt;

/// Slot part of a logical pin (`31 -> 3`).
#[inline]
pub fn slot_of(pin: u8) -> u8 {
    pin / 10
}

/// Channel part of a logical pin (`31 -> 1`).
#[inline]
pub fn index_of(pin: u8) -> u8 {
    pin % 10
}

/// Base register of a slot. Slots past the table fall back to slot 0.
#[inline]
pub fn base_for_slot(slot: u8) -> u8 {
    consts::SLOT_BASES
        .get(slot as usize)
        .copied()
        .unwrap_or(consts::SLOT_BASES[0])
}

/// A validated logical pin: slot 0-5, channel 0-1.
/// Use `HubPin::new(num)` to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HubPin(u8);

impl HubPin {
    /// Creates a new HubPin, returning an error unless `pin` decodes to a real channel.
    pub fn new(pin: u8) -> Result<Self> {
        if slot_of(pin) >= consts::SLOT_COUNT {
            return Err(Error::PinArgumentOutOfRange {
                pin,
                message: format!("slot must be 0-{}", consts::SLOT_COUNT - 1),
            });
        }
        if index_of(pin) >= consts::CHANNELS_PER_SLOT {
            return Err(Error::PinArgumentOutOfRange {
                pin,
                message: "channel must be 0 or 1".to_string(),
            });
        }
        Ok(HubPin(pin))
    }

    /// Builds the pin for channel `idx` of `slot`.
    pub fn from_parts(slot: u8, idx: u8) -> Result<Self> {
        let pin = slot
            .checked_mul(10)
            .and_then(|p| p.checked_add(idx))
            .ok_or_else(|| {
                Error::ArgumentOutOfRange(format!("slot {} / channel {} overflow", slot, idx))
            })?;
        Self::new(pin)
    }

    /// Returns the logical pin number.
    #[inline]
    pub fn number(&self) -> u8 {
        self.0
    }

    #[inline]
    pub fn slot(&self) -> u8 {
        slot_of(self.0)
    }

    #[inline]
    pub fn index(&self) -> u8 {
        index_of(self.0)
    }
}

impl TryFrom<u8> for HubPin {
    type Error = Error;

    fn try_from(pin: u8) -> Result<Self> {
        HubPin::new(pin)
    }
}

impl From<HubPin> for u8 {
    fn from(pin: HubPin) -> u8 {
        pin.0
    }
}

impl fmt::Display for HubPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (slot {} ch {})", self.0, self.slot(), self.index())
    }
}
