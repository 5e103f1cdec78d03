//! Register maps of the two hub firmware layouts.
//!
//! A register is `slot base | function offset`, except for the global
//! registers (LED show mode, firmware version) which are used as-is.
//! The two layouts disagree on several offsets for the same function,
//! so each one keeps its own table.

use crate::address;
use crate::consts;
use std::fmt;

/// Register layout family of the connected hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// GPIO, per-channel ADC and servo only.
    ReducedMap,
    /// Adds PWM, RGB LED strips, show mode and firmware version.
    #[default]
    FullMap,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::ReducedMap => write!(f, "reduced"),
            Variant::FullMap => write!(f, "full"),
        }
    }
}

/// Logical hub function a register serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    WriteDigital,
    ReadDigital,
    ReadAnalog,
    WritePwm,
    ServoAngle,
    ServoPulse,
    LedNum,
    LedColor,
    LedFill,
    LedBrightness,
    LedShowMode,
    FirmwareVersion,
}

impl Function {
    /// Global functions ignore the slot entirely.
    pub fn is_global(self) -> bool {
        matches!(self, Function::LedShowMode | Function::FirmwareVersion)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Function::WriteDigital => "digital write",
            Function::ReadDigital => "digital read",
            Function::ReadAnalog => "analog read",
            Function::WritePwm => "PWM",
            Function::ServoAngle => "servo angle",
            Function::ServoPulse => "servo pulse",
            Function::LedNum => "LED count",
            Function::LedColor => "LED color",
            Function::LedFill => "LED fill",
            Function::LedBrightness => "LED brightness",
            Function::LedShowMode => "LED show mode",
            Function::FirmwareVersion => "firmware version",
        };
        f.write_str(name)
    }
}

// Any non-zero channel selects the second entry.
#[inline]
fn by_index(pair: [u8; 2], idx: u8) -> u8 {
    if idx == 0 {
        pair[0]
    } else {
        pair[1]
    }
}

fn reduced_offset(function: Function, idx: u8) -> Option<u8> {
    use consts::reduced::*;
    match function {
        Function::WriteDigital => Some(by_index(WRITE_DIGITAL, idx)),
        Function::ReadDigital => Some(by_index(READ_DIGITAL, idx)),
        Function::ReadAnalog => Some(by_index(READ_ANALOG, idx)),
        Function::ServoAngle => Some(by_index(SERVO_ANGLE, idx)),
        Function::ServoPulse => Some(by_index(SERVO_PULSE, idx)),
        _ => None,
    }
}

fn full_offset(function: Function, idx: u8) -> Option<u8> {
    use consts::full::*;
    let offset = match function {
        Function::WriteDigital => by_index(WRITE_DIGITAL, idx),
        Function::WritePwm => by_index(WRITE_PWM, idx),
        Function::ReadDigital => by_index(READ_DIGITAL, idx),
        Function::ReadAnalog => READ_ANALOG,
        Function::LedNum => LED_NUM,
        Function::LedColor => LED_COLOR,
        Function::LedFill => LED_FILL,
        Function::LedBrightness => LED_BRIGHTNESS,
        Function::ServoAngle => by_index(SERVO_ANGLE, idx),
        Function::ServoPulse => by_index(SERVO_PULSE, idx),
        Function::LedShowMode => LED_SHOW_MODE,
        Function::FirmwareVersion => FW_VERSION,
    };
    Some(offset)
}

impl Variant {
    /// Offset of `function` for channel `idx`, or `None` if this layout lacks it.
    pub fn offset(self, function: Function, idx: u8) -> Option<u8> {
        match self {
            Variant::ReducedMap => reduced_offset(function, idx),
            Variant::FullMap => full_offset(function, idx),
        }
    }

    /// Full register address of `function` on channel `idx` of `slot`.
    pub fn register(self, function: Function, slot: u8, idx: u8) -> Option<u8> {
        let offset = self.offset(function, idx)?;
        if function.is_global() {
            Some(offset)
        } else {
            Some(address::base_for_slot(slot) | offset)
        }
    }

    /// Whether this layout has a register for `function`.
    pub fn supports(self, function: Function) -> bool {
        self.offset(function, 0).is_some()
    }
}
