//! # pbhub
//!
//! A Rust driver for the PbHub I/O expansion unit: six "hub slots" behind one
//! I2C address, each with two channels usable as digital I/O, analog input,
//! PWM, servo, or (per slot) an addressable RGB LED strip.
//!
//! ## Features
//!
//! *   Logical pin addressing (`pin = slot * 10 + channel`, e.g. `31`).
//! *   Two register layouts, selected with [`Variant`]:
//!     *   **`ReducedMap`:** GPIO, per-channel ADC, servo.
//!     *   **`FullMap`:** GPIO, per-slot ADC, PWM, servo, RGB LED strips,
//!         global LED show mode and firmware version.
//! *   Any `embedded-hal` 1.0 I2C bus as transport, or an XR2280x USB-HID
//!     I2C bridge (feature `hid`).
//! *   Capability traits and host adapters (`GpioPin`, `PwmPin`, `ServoPin`,
//!     `AnalogSensor`, `RgbStrip`).
//!
//! ## Failure Policy
//!
//! Every feature operation is exactly one bus transaction with no retry.
//! A failed write is logged and dropped; a failed read is logged and returns
//! `0`/`false`. The failure is kept in [`PbHub::diagnostics`], which is the
//! only way to tell a defaulted read from a real zero. Use
//! [`PbHub::executor`] when errors should be returned instead.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use pbhub::{PbHub, Rgb, Variant, DEFAULT_ADDRESS};
//! # fn demo<I: embedded_hal::i2c::I2c>(i2c: I) {
//! let mut hub = PbHub::new(i2c, DEFAULT_ADDRESS, Variant::FullMap);
//!
//! hub.digital_write(30, true); // slot 3, channel 0
//! let level = hub.analog_read(21);
//! hub.set_servo_angle(11, 90);
//!
//! hub.set_led_num(0, 16);
//! hub.fill_led_color(0, 0, 16, Rgb::new(0, 32, 0));
//!
//! if let Some(err) = hub.last_error() {
//!     eprintln!("hub reported: {err} (level {level} may be a default)");
//! }
//! # }
//! ```
//!
//! ## License
//!
//! This project is licensed under the WTFPL.

mod address;
pub mod bridge;
pub mod capability;
pub mod codec;
pub mod config;
mod consts;
mod device;
mod error;
pub mod gpio;
mod led;
mod pwm;
pub mod register;
mod servo;
pub mod transport;

pub use address::{base_for_slot, index_of, slot_of, HubPin};
pub use capability::{
    AnalogInput, AnalogSensor, DigitalIo, GpioPin, LedStrip, LedStripState, PwmOutput, PwmPin,
    RgbStrip, ServoOutput, ServoPin,
};
pub use codec::Rgb;
pub use config::{
    HubConfig, LightConfig, OutputConfig, PinConfig, SensorConfig, ServoConfig, ServoDrive,
};
pub use consts::{DEFAULT_ADDRESS, HUB_ADDRESSES, SLOT_BASES, SLOT_COUNT};
pub use device::PbHub;
pub use error::{Error, Result, TransportError};
pub use gpio::PinMode;
pub use register::{Function, Variant};
pub use transport::{Diagnostics, Executor, Transport};

#[cfg(feature = "hid")]
pub use bridge::HidBridge;
#[cfg(feature = "hid")]
pub use consts::bridge::{EXAR_VID, XR2280X_I2C_PID};
