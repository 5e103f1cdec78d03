//! Configuration for a hub and the adapters attached to it.
//!
//! Each struct validates itself; constructors taking a config call
//! `validate()` before using it.

use crate::address::HubPin;
use crate::consts;
use crate::error::{Error, Result};
use crate::gpio::PinMode;
use crate::register::Variant;
use std::time::Duration;

/// Default polling interval of an [`AnalogSensor`](crate::capability::AnalogSensor).
pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_secs(60);

/// Hub-level settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HubConfig {
    /// 7-bit bus address, 0x61 unless re-strapped.
    pub address: u8,
    pub variant: Variant,
}

impl Default for HubConfig {
    fn default() -> Self {
        HubConfig {
            address: consts::DEFAULT_ADDRESS,
            variant: Variant::default(),
        }
    }
}

impl HubConfig {
    pub fn validate(&self) -> Result<()> {
        if self.address > 0x7F {
            return Err(Error::InvalidConfig(format!(
                "bus address 0x{:02X} is not a 7-bit address",
                self.address
            )));
        }
        if !consts::HUB_ADDRESSES.contains(&self.address) {
            log::warn!(
                "Address 0x{:02X} is outside the hub's strap range 0x61-0x68",
                self.address
            );
        }
        Ok(())
    }
}

/// A digital pin on the hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinConfig {
    /// Logical pin, `slot * 10 + channel`.
    pub number: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub inverted: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: PinMode,
}

impl PinConfig {
    pub fn new(number: u8) -> Self {
        PinConfig {
            number,
            inverted: false,
            mode: PinMode::NONE,
        }
    }

    pub fn validate(&self) -> Result<HubPin> {
        if self.mode.input && self.mode.output {
            return Err(Error::InvalidConfig(
                "Only one of 'input' or 'output' can be true".to_string(),
            ));
        }
        HubPin::new(self.number)
    }
}

/// A PWM output channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutputConfig {
    pub number: u8,
}

impl OutputConfig {
    pub fn validate(&self) -> Result<HubPin> {
        HubPin::new(self.number)
    }
}

/// How a servo channel is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ServoDrive {
    /// 0-180 degrees through the angle register.
    #[default]
    Angle,
    /// Pulse width between `min_us` and `max_us` through the pulse register.
    Pulse { min_us: u16, max_us: u16 },
}

/// A servo channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServoConfig {
    pub number: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub drive: ServoDrive,
}

impl ServoConfig {
    pub fn validate(&self) -> Result<HubPin> {
        if let ServoDrive::Pulse { min_us, max_us } = self.drive {
            if min_us >= max_us {
                return Err(Error::InvalidConfig(format!(
                    "servo pulse range {}-{}us is empty",
                    min_us, max_us
                )));
            }
        }
        HubPin::new(self.number)
    }
}

/// A polled ADC channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorConfig {
    pub number: u8,
    pub update_interval: Duration,
}

impl SensorConfig {
    pub fn new(number: u8) -> Self {
        SensorConfig {
            number,
            update_interval: DEFAULT_UPDATE_INTERVAL,
        }
    }

    pub fn validate(&self) -> Result<HubPin> {
        if self.update_interval.is_zero() {
            return Err(Error::InvalidConfig(
                "update interval must be non-zero".to_string(),
            ));
        }
        HubPin::new(self.number)
    }
}

/// An RGB LED strip on one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightConfig {
    pub slot: u8,
    pub led_count: u16,
}

impl LightConfig {
    pub fn new(slot: u8) -> Self {
        LightConfig { slot, led_count: 1 }
    }

    pub fn validate(&self) -> Result<()> {
        if self.slot >= consts::SLOT_COUNT {
            return Err(Error::InvalidConfig(format!(
                "slot {} out of range (0-{})",
                self.slot,
                consts::SLOT_COUNT - 1
            )));
        }
        if self.led_count == 0 {
            return Err(Error::InvalidConfig(
                "led_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hub_defaults() {
        let config = HubConfig::default();
        assert_eq!(config.address, 0x61);
        assert_eq!(config.variant, Variant::FullMap);
        assert!(config.validate().is_ok());
        assert!(HubConfig {
            address: 0x80,
            ..config
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_pin_mode_exclusive() {
        let mut config = PinConfig::new(31);
        config.mode = PinMode {
            input: true,
            output: true,
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        config.mode = PinMode::OUTPUT;
        assert_eq!(config.validate().unwrap().number(), 31);
        assert!(PinConfig::new(52).validate().is_err());
    }

    #[test]
    fn test_light_and_sensor_validation() {
        assert!(LightConfig::new(5).validate().is_ok());
        assert!(LightConfig::new(6).validate().is_err());
        assert!(LightConfig {
            slot: 0,
            led_count: 0
        }
        .validate()
        .is_err());

        let sensor = SensorConfig::new(20);
        assert_eq!(sensor.update_interval, Duration::from_secs(60));
        assert!(sensor.validate().is_ok());
        assert!(SensorConfig {
            number: 20,
            update_interval: Duration::ZERO
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_servo_pulse_range() {
        let ok = ServoConfig {
            number: 11,
            drive: ServoDrive::Pulse {
                min_us: 500,
                max_us: 2500,
            },
        };
        assert!(ok.validate().is_ok());
        let empty = ServoConfig {
            drive: ServoDrive::Pulse {
                min_us: 2500,
                max_us: 500,
            },
            ..ok
        };
        assert!(empty.validate().is_err());
    }
}
