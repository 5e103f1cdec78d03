//! Capability traits and the host-side adapters built on them.
//!
//! Host frameworks (pin, float output, polling sensor, RGB light) talk to
//! the hub through these traits rather than to [`PbHub`] directly, so an
//! adapter can be driven by anything that offers the capability.

use crate::address::HubPin;
use crate::codec::Rgb;
use crate::config::{
    LightConfig, OutputConfig, PinConfig, SensorConfig, ServoConfig, ServoDrive,
};
use crate::device::PbHub;
use crate::error::Result;
use crate::gpio::PinMode;
use crate::transport::Transport;
use log::debug;
use std::fmt;
use std::time::Duration;

pub trait DigitalIo {
    fn write_level(&mut self, pin: u8, high: bool);
    fn read_level(&mut self, pin: u8) -> bool;
}

pub trait AnalogInput {
    fn read_analog(&mut self, pin: u8) -> u16;
}

pub trait PwmOutput {
    fn write_duty(&mut self, pin: u8, duty: u8);
}

pub trait ServoOutput {
    fn write_angle(&mut self, pin: u8, angle: u8);
    fn write_pulse_us(&mut self, pin: u8, micros: u16);
}

pub trait LedStrip {
    fn set_length(&mut self, slot: u8, count: u16);
    fn set_pixel(&mut self, slot: u8, index: u16, color: Rgb);
    fn fill(&mut self, slot: u8, start: u16, count: u16, color: Rgb);
    fn set_strip_brightness(&mut self, slot: u8, value: u8);
}

impl<T: Transport> DigitalIo for PbHub<T> {
    fn write_level(&mut self, pin: u8, high: bool) {
        self.digital_write(pin, high)
    }

    fn read_level(&mut self, pin: u8) -> bool {
        self.digital_read(pin)
    }
}

impl<T: Transport> AnalogInput for PbHub<T> {
    fn read_analog(&mut self, pin: u8) -> u16 {
        self.analog_read(pin)
    }
}

impl<T: Transport> PwmOutput for PbHub<T> {
    fn write_duty(&mut self, pin: u8, duty: u8) {
        self.set_pwm(pin, duty)
    }
}

impl<T: Transport> ServoOutput for PbHub<T> {
    fn write_angle(&mut self, pin: u8, angle: u8) {
        self.set_servo_angle(pin, angle)
    }

    fn write_pulse_us(&mut self, pin: u8, micros: u16) {
        self.set_servo_pulse(pin, micros)
    }
}

impl<T: Transport> LedStrip for PbHub<T> {
    fn set_length(&mut self, slot: u8, count: u16) {
        self.set_led_num(slot, count)
    }

    fn set_pixel(&mut self, slot: u8, index: u16, color: Rgb) {
        self.set_led_color(slot, index, color)
    }

    fn fill(&mut self, slot: u8, start: u16, count: u16, color: Rgb) {
        self.fill_led_color(slot, start, count, color)
    }

    fn set_strip_brightness(&mut self, slot: u8, value: u8) {
        self.set_led_brightness(slot, value)
    }
}

/// A digital pin with optional inversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioPin {
    pin: HubPin,
    inverted: bool,
    mode: PinMode,
}

impl GpioPin {
    pub fn new(pin: HubPin) -> Self {
        GpioPin {
            pin,
            inverted: false,
            mode: PinMode::NONE,
        }
    }

    pub fn from_config(config: &PinConfig) -> Result<Self> {
        let pin = config.validate()?;
        Ok(GpioPin {
            pin,
            inverted: config.inverted,
            mode: config.mode,
        })
    }

    pub fn pin(&self) -> HubPin {
        self.pin
    }

    pub fn set_inverted(&mut self, inverted: bool) {
        self.inverted = inverted;
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn mode(&self) -> PinMode {
        self.mode
    }

    /// Records the mode. No bus traffic.
    pub fn pin_mode(&mut self, mode: PinMode) {
        self.mode = mode;
        debug!("GpioPin pin_mode pin={} mode={:?}", self.pin.number(), mode);
    }

    pub fn digital_read(&self, hub: &mut impl DigitalIo) -> bool {
        hub.read_level(self.pin.number()) != self.inverted
    }

    pub fn digital_write(&self, hub: &mut impl DigitalIo, value: bool) {
        hub.write_level(self.pin.number(), value != self.inverted);
    }
}

impl fmt::Display for GpioPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pbhub pin {} (inverted={})",
            self.pin.number(),
            if self.inverted { "yes" } else { "no" }
        )
    }
}

/// A float output in `[0, 1]` driving a PWM channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PwmPin {
    pin: HubPin,
}

impl PwmPin {
    pub fn new(pin: HubPin) -> Self {
        PwmPin { pin }
    }

    pub fn from_config(config: &OutputConfig) -> Result<Self> {
        Ok(PwmPin::new(config.validate()?))
    }

    pub fn pin(&self) -> HubPin {
        self.pin
    }

    /// Duty byte for a float state; out-of-range states saturate.
    pub fn duty_for(state: f32) -> u8 {
        (state * 255.0) as u8
    }

    pub fn write_state(&self, hub: &mut impl PwmOutput, state: f32) {
        hub.write_duty(self.pin.number(), Self::duty_for(state));
    }
}

/// A float output in `[0, 1]` driving a servo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServoPin {
    pin: HubPin,
    drive: ServoDrive,
}

impl ServoPin {
    pub fn new(pin: HubPin, drive: ServoDrive) -> Self {
        ServoPin { pin, drive }
    }

    pub fn from_config(config: &ServoConfig) -> Result<Self> {
        Ok(ServoPin::new(config.validate()?, config.drive))
    }

    pub fn pin(&self) -> HubPin {
        self.pin
    }

    pub fn angle_for(state: f32) -> u8 {
        (state * 180.0) as u8
    }

    /// Pulse width for `state`, clamped to `[min_us, max_us]`.
    pub fn pulse_for(state: f32, min_us: u16, max_us: u16) -> u16 {
        let span = f32::from(max_us.saturating_sub(min_us));
        let micros = f32::from(min_us) + state.clamp(0.0, 1.0) * span;
        micros.round() as u16
    }

    /// Inverse of [`pulse_for`](Self::pulse_for).
    pub fn state_for_pulse(micros: u16, min_us: u16, max_us: u16) -> f32 {
        let span = f32::from(max_us.saturating_sub(min_us));
        if span == 0.0 {
            return 0.0;
        }
        (f32::from(micros.clamp(min_us, max_us) - min_us) / span).clamp(0.0, 1.0)
    }

    pub fn write_state(&self, hub: &mut impl ServoOutput, state: f32) {
        match self.drive {
            ServoDrive::Angle => hub.write_angle(self.pin.number(), Self::angle_for(state)),
            ServoDrive::Pulse { min_us, max_us } => hub.write_pulse_us(
                self.pin.number(),
                Self::pulse_for(state, min_us, max_us),
            ),
        }
    }
}

/// Polled ADC channel. The host calls [`update`](Self::update) every
/// [`update_interval`](Self::update_interval).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalogSensor {
    pin: HubPin,
    update_interval: Duration,
    last_value: Option<u16>,
}

impl AnalogSensor {
    pub fn new(pin: HubPin, update_interval: Duration) -> Self {
        AnalogSensor {
            pin,
            update_interval,
            last_value: None,
        }
    }

    pub fn from_config(config: &SensorConfig) -> Result<Self> {
        Ok(AnalogSensor::new(config.validate()?, config.update_interval))
    }

    pub fn pin(&self) -> HubPin {
        self.pin
    }

    pub fn update_interval(&self) -> Duration {
        self.update_interval
    }

    /// Last published value.
    pub fn state(&self) -> Option<u16> {
        self.last_value
    }

    /// Samples the ADC and publishes the raw value.
    pub fn update(&mut self, hub: &mut impl AnalogInput) -> u16 {
        let value = hub.read_analog(self.pin.number());
        self.last_value = Some(value);
        value
    }
}

/// Per-slot strip state: the hub must learn the strip length once before the
/// first fill, and again whenever the length changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedStripState {
    pub led_count: u16,
    pub initialized: bool,
}

/// RGB light filling a whole strip with one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbStrip {
    slot: u8,
    state: LedStripState,
}

impl RgbStrip {
    pub fn new(slot: u8, led_count: u16) -> Self {
        RgbStrip {
            slot,
            state: LedStripState {
                led_count,
                initialized: false,
            },
        }
    }

    pub fn from_config(config: &LightConfig) -> Result<Self> {
        config.validate()?;
        Ok(RgbStrip::new(config.slot, config.led_count))
    }

    pub fn slot(&self) -> u8 {
        self.slot
    }

    pub fn state(&self) -> LedStripState {
        self.state
    }

    /// Changes the strip length; the next write re-sends it.
    pub fn set_led_count(&mut self, led_count: u16) {
        if led_count != self.state.led_count {
            self.state.led_count = led_count;
            self.state.initialized = false;
        }
    }

    /// Brightness is baked into the color; the hub register is left alone.
    pub fn supports_brightness(&self) -> bool {
        false
    }

    pub fn write_color(&mut self, hub: &mut impl LedStrip, color: Rgb) {
        if !self.state.initialized {
            hub.set_length(self.slot, self.state.led_count);
            self.state.initialized = true;
        }
        hub.fill(self.slot, 0, self.state.led_count, color);
    }

    /// Writes float channels in `[0, 1]`.
    pub fn write_state(&mut self, hub: &mut impl LedStrip, r: f32, g: f32, b: f32) {
        self.write_color(hub, Rgb::from_f32(r, g, b));
    }
}
