//! Addressable RGB LED strips, one per slot (full map only).
//!
//! The strip length must be set with [`PbHub::set_led_num`] before colors
//! land where expected. The handle does not enforce that; see
//! [`RgbStrip`](crate::capability::RgbStrip) for an adapter that does.

use crate::codec::{self, Rgb};
use crate::device::PbHub;
use crate::register::Function;
use crate::transport::Transport;
use log::debug;

impl<T: Transport> PbHub<T> {
    /// Tells the hub how many LEDs hang off `slot`.
    pub fn set_led_num(&mut self, slot: u8, count: u16) {
        let Some(reg) = self.resolve_write(Function::LedNum, slot, 0) else {
            return;
        };
        let ok = self.write_register(reg, &codec::encode_led_count(count));
        debug!("LED_NUM slot={} count={} (reg=0x{:02X} ok={})", slot, count, reg, ok);
    }

    /// Sets a single LED.
    pub fn set_led_color(&mut self, slot: u8, index: u16, color: Rgb) {
        let Some(reg) = self.resolve_write(Function::LedColor, slot, 0) else {
            return;
        };
        let ok = self.write_register(reg, &codec::encode_led_color(index, color));
        debug!(
            "LED_COLOR slot={} index={} color=({},{},{}) (reg=0x{:02X} ok={})",
            slot, index, color.r, color.g, color.b, reg, ok
        );
    }

    /// Sets `count` LEDs starting at `start` to one color.
    pub fn fill_led_color(&mut self, slot: u8, start: u16, count: u16, color: Rgb) {
        let Some(reg) = self.resolve_write(Function::LedFill, slot, 0) else {
            return;
        };
        let ok = self.write_register(reg, &codec::encode_led_fill(start, count, color));
        debug!(
            "LED_FILL slot={} start={} count={} color=({},{},{}) (reg=0x{:02X} ok={})",
            slot, start, count, color.r, color.g, color.b, reg, ok
        );
    }

    pub fn set_led_brightness(&mut self, slot: u8, value: u8) {
        let Some(reg) = self.resolve_write(Function::LedBrightness, slot, 0) else {
            return;
        };
        let ok = self.write_register(reg, &[value]);
        debug!("LED_BRIGHTNESS slot={} value={} (reg=0x{:02X} ok={})", slot, value, reg, ok);
    }

    /// Writes the global show mode, shared by all slots.
    pub fn set_led_show_mode(&mut self, mode: u8) {
        let Some(reg) = self.resolve_write(Function::LedShowMode, 0, 0) else {
            return;
        };
        let ok = self.write_register(reg, &[mode]);
        debug!("LED_SHOW_MODE mode={} (reg=0x{:02X} ok={})", mode, reg, ok);
    }

    /// Reads the global show mode. Returns 0 on failure.
    pub fn led_show_mode(&mut self) -> u8 {
        let Some(reg) = self.resolve_read(Function::LedShowMode, 0, 0) else {
            return 0;
        };
        let [mode] = self.read_register::<1>(reg);
        debug!("LED_SHOW_MODE read -> {} (reg=0x{:02X})", mode, reg);
        mode
    }
}
