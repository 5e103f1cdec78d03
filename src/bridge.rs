//! Transport over an XR2280x USB-HID I2C bridge.
//!
//! Lets a desktop host talk to a hub plugged into the bridge's I2C port.
//! Report framing is always available; the [`HidBridge`] handle needs the
//! `hid` feature.

use crate::consts::bridge::{self as consts, in_flags, out_flags};
use crate::error::{Error, Result, TransportError};

/// Builds an I2C OUT report (no report ID byte; hidapi adds it).
///
/// Layout: flags, write length, read length, 8-bit address, data.
pub fn encode_request(
    address: u8,
    write: &[u8],
    read_len: usize,
) -> Result<[u8; consts::OUT_REPORT_WRITE_BUF_SIZE]> {
    if address > 0x7F {
        return Err(Error::ArgumentOutOfRange(format!(
            "7-bit I2C address must be 0-127 (got 0x{:02X})",
            address
        )));
    }
    for len in [write.len(), read_len] {
        if len > consts::REPORT_MAX_DATA_SIZE {
            return Err(Error::OperationTooLarge {
                max: consts::REPORT_MAX_DATA_SIZE,
                actual: len,
            });
        }
    }
    let mut out = [0u8; consts::OUT_REPORT_WRITE_BUF_SIZE];
    out[0] = out_flags::START_BIT | out_flags::STOP_BIT;
    out[1] = write.len() as u8;
    out[2] = read_len as u8;
    // R/W bit lives in bit 0
    out[3] = address << 1;
    out[4..4 + write.len()].copy_from_slice(write);
    Ok(out)
}

/// Checks the status of an I2C IN report and copies read data out of it.
pub fn decode_response(
    address: u8,
    report: &[u8],
    read_buf: &mut [u8],
) -> std::result::Result<(), TransportError> {
    if report.len() < consts::IN_REPORT_HEADER_LEN {
        return Err(TransportError::Bus {
            address,
            message: Error::InvalidReport(report.len()).to_string(),
        });
    }
    let status = report[0];
    if status & in_flags::NAK_RECEIVED != 0 {
        return Err(TransportError::Nack { address });
    }
    if status & in_flags::ARBITRATION_LOST != 0 {
        return Err(TransportError::ArbitrationLost { address });
    }
    if status & in_flags::TIMEOUT != 0 {
        return Err(TransportError::Timeout { address });
    }
    if status & in_flags::REQUEST_ERROR != 0 {
        return Err(TransportError::Bus {
            address,
            message: "bridge rejected the request".to_string(),
        });
    }
    if status & in_flags::ERROR_MASK != 0 {
        return Err(TransportError::Bus {
            address,
            message: format!("unknown bridge status 0x{:02X}", status),
        });
    }

    if !read_buf.is_empty() {
        let reported = report[2] as usize;
        let available = report.len() - consts::IN_REPORT_HEADER_LEN;
        if reported < read_buf.len() || available < read_buf.len() {
            return Err(TransportError::Bus {
                address,
                message: format!(
                    "short read: expected {} bytes, got {}",
                    read_buf.len(),
                    reported.min(available)
                ),
            });
        }
        let start = consts::IN_REPORT_HEADER_LEN;
        read_buf.copy_from_slice(&report[start..start + read_buf.len()]);
    }
    Ok(())
}

/// SCL low/high cycle counts (60 MHz clock) for a bus speed, with the
/// minimums the bridge needs in standard and fast mode.
pub fn scl_cycles(speed_khz: u32) -> Result<(u16, u16)> {
    if speed_khz == 0 || speed_khz > 400 {
        return Err(Error::ArgumentOutOfRange(format!(
            "I2C speed {} kHz out of range (1-400)",
            speed_khz
        )));
    }
    let total = 60_000 / speed_khz;
    let low = total / 2;
    let high = total - low;
    let (min_low, min_high) = if speed_khz <= 100 { (252, 240) } else { (78, 36) };
    Ok((low.max(min_low) as u16, high.max(min_high) as u16))
}

#[cfg(feature = "hid")]
pub use hid::HidBridge;

#[cfg(feature = "hid")]
mod hid {
    use super::*;
    use crate::transport::Transport;
    use hidapi::{HidApi, HidDevice};
    use log::{debug, trace, warn};
    use std::ffi::CStr;

    /// An opened bridge I2C interface.
    /// **Note:** Not thread-safe; one transaction at a time.
    pub struct HidBridge {
        device: HidDevice,
        timeout_ms: i32,
    }

    impl HidBridge {
        /// Opens the first bridge with the default VID/PID.
        /// **Warning:** Ambiguous if multiple bridges are connected.
        pub fn open_first(hid_api: &HidApi) -> Result<Self> {
            let device = hid_api.open(consts::EXAR_VID, consts::XR2280X_I2C_PID)?;
            Ok(Self::from_device(device))
        }

        /// Opens a bridge by its platform-specific path.
        pub fn open_by_path(hid_api: &HidApi, path: &CStr) -> Result<Self> {
            let device = hid_api.open_path(path)?;
            Ok(Self::from_device(device))
        }

        pub fn from_device(device: HidDevice) -> Self {
            HidBridge {
                device,
                timeout_ms: consts::DEFAULT_TIMEOUT_MS,
            }
        }

        pub fn set_timeout_ms(&mut self, timeout_ms: i32) {
            self.timeout_ms = timeout_ms;
        }

        /// Sets the I2C bus speed (approximated). Max supported is 400 kHz.
        pub fn set_speed_khz(&self, speed_khz: u32) -> Result<()> {
            let (low, high) = scl_cycles(speed_khz)?;
            debug!(
                "Setting I2C speed ~{}kHz: SCL_LOW=0x{:04X}, SCL_HIGH=0x{:04X}",
                speed_khz, low, high
            );
            self.write_hid_register(consts::REG_SCL_LOW, low)?;
            self.write_hid_register(consts::REG_SCL_HIGH, high)
        }

        fn write_hid_register(&self, reg_addr: u16, value: u16) -> Result<()> {
            let [reg_lo, reg_hi] = reg_addr.to_le_bytes();
            let [val_lo, val_hi] = value.to_le_bytes();
            let buf = [
                consts::REPORT_ID_WRITE_HID_REGISTER,
                reg_lo,
                reg_hi,
                val_lo,
                val_hi,
            ];
            trace!("Writing Feature Report (Write Reg {:04X} = {:04X})", reg_addr, value);
            self.device.send_feature_report(&buf)?;
            Ok(())
        }

        fn transfer(
            &mut self,
            address: u8,
            write: &[u8],
            read_buf: &mut [u8],
        ) -> std::result::Result<(), TransportError> {
            let bus_error = |e: &dyn std::fmt::Display| TransportError::Bus {
                address,
                message: e.to_string(),
            };
            let out = encode_request(address, write, read_buf.len()).map_err(|e| bus_error(&e))?;
            trace!("I2C OUT buffer: {:02X?}", &out);

            match self.device.write(&out) {
                Ok(written) if written == out.len() => {}
                Ok(written) => {
                    warn!("Partial write: sent {} of {} bytes", written, out.len());
                    return Err(bus_error(&"partial HID write"));
                }
                Err(e) => return Err(bus_error(&e)),
            }

            let mut in_buf = [0u8; consts::IN_REPORT_READ_BUF_SIZE];
            let received = self
                .device
                .read_timeout(&mut in_buf, self.timeout_ms)
                .map_err(|e| bus_error(&e))?;
            if received == 0 {
                return Err(TransportError::Timeout { address });
            }
            trace!("I2C IN buffer: {:02X?}", &in_buf[..received]);
            decode_response(address, &in_buf[..received], read_buf)
        }
    }

    impl Transport for HidBridge {
        fn write(&mut self, address: u8, bytes: &[u8]) -> std::result::Result<(), TransportError> {
            self.transfer(address, bytes, &mut [])
        }

        fn write_read(
            &mut self,
            address: u8,
            bytes: &[u8],
            buffer: &mut [u8],
        ) -> std::result::Result<(), TransportError> {
            self.transfer(address, bytes, buffer)
        }
    }
}
