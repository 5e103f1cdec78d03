//! Payload encoding for each hub function.
//!
//! Multi-byte integers are little-endian on the wire. Nothing here clamps:
//! values only get as far as their integer width allows.

/// 8-bit RGB color as sent to an LED strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Scales float channels in `[0, 1]` to bytes (saturating).
    pub fn from_f32(r: f32, g: f32, b: f32) -> Self {
        Rgb {
            r: (r * 255.0) as u8,
            g: (g * 255.0) as u8,
            b: (b * 255.0) as u8,
        }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb::new(r, g, b)
    }
}

#[inline]
pub fn encode_digital(on: bool) -> [u8; 1] {
    [if on { 0x01 } else { 0x00 }]
}

/// Any non-zero byte reads as on.
#[inline]
pub fn decode_digital(buf: [u8; 1]) -> bool {
    buf[0] != 0
}

#[inline]
pub fn encode_u16(value: u16) -> [u8; 2] {
    value.to_le_bytes()
}

#[inline]
pub fn decode_u16(buf: [u8; 2]) -> u16 {
    u16::from_le_bytes(buf)
}

/// ADC sample, `[lo, hi]`.
#[inline]
pub fn decode_analog(buf: [u8; 2]) -> u16 {
    decode_u16(buf)
}

/// Servo pulse width in microseconds.
#[inline]
pub fn encode_servo_pulse(micros: u16) -> [u8; 2] {
    encode_u16(micros)
}

#[inline]
pub fn encode_led_count(count: u16) -> [u8; 2] {
    encode_u16(count)
}

/// `[index_lo, index_hi, r, g, b]`
pub fn encode_led_color(index: u16, color: Rgb) -> [u8; 5] {
    let [lo, hi] = index.to_le_bytes();
    [lo, hi, color.r, color.g, color.b]
}

/// `[start_lo, start_hi, count_lo, count_hi, r, g, b]`
pub fn encode_led_fill(start: u16, count: u16, color: Rgb) -> [u8; 7] {
    let [start_lo, start_hi] = start.to_le_bytes();
    let [count_lo, count_hi] = count.to_le_bytes();
    [start_lo, start_hi, count_lo, count_hi, color.r, color.g, color.b]
}
