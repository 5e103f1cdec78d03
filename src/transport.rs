//! Bus transport seam and the single-attempt transaction executor.

use crate::consts;
use crate::error::{Error, Result, TransportError};
use log::{debug, trace, warn};

/// Blocking request/response bus primitive the hub is reached through.
///
/// Implemented for every `embedded_hal::i2c::I2c` bus; the USB bridge in
/// [`crate::bridge`] implements it directly.
pub trait Transport {
    /// Writes `bytes` to the device at `address`.
    fn write(&mut self, address: u8, bytes: &[u8]) -> std::result::Result<(), TransportError>;

    /// Writes `bytes`, then reads `buffer.len()` bytes back in one transaction.
    fn write_read(
        &mut self,
        address: u8,
        bytes: &[u8],
        buffer: &mut [u8],
    ) -> std::result::Result<(), TransportError>;
}

impl<I: embedded_hal::i2c::I2c> Transport for I {
    fn write(&mut self, address: u8, bytes: &[u8]) -> std::result::Result<(), TransportError> {
        embedded_hal::i2c::I2c::write(self, address, bytes).map_err(|e| {
            use embedded_hal::i2c::Error as _;
            TransportError::from_kind(address, e.kind())
        })
    }

    fn write_read(
        &mut self,
        address: u8,
        bytes: &[u8],
        buffer: &mut [u8],
    ) -> std::result::Result<(), TransportError> {
        embedded_hal::i2c::I2c::write_read(self, address, bytes, buffer).map_err(|e| {
            use embedded_hal::i2c::Error as _;
            TransportError::from_kind(address, e.kind())
        })
    }
}

/// Failure record kept by the executor.
#[derive(Debug, Default)]
pub struct Diagnostics {
    /// Write transactions that failed.
    pub failed_writes: u32,
    /// Read transactions that failed and returned a default.
    pub failed_reads: u32,
    /// Most recent failure.
    pub last_error: Option<Error>,
}

impl Diagnostics {
    /// True once anything has failed since the last reset.
    pub fn has_failures(&self) -> bool {
        self.failed_writes > 0 || self.failed_reads > 0 || self.last_error.is_some()
    }

    pub(crate) fn record_write(&mut self, error: Error) {
        self.failed_writes = self.failed_writes.saturating_add(1);
        self.last_error = Some(error);
    }

    pub(crate) fn record_read(&mut self, error: Error) {
        self.failed_reads = self.failed_reads.saturating_add(1);
        self.last_error = Some(error);
    }
}

/// Issues exactly one bus transaction per call against one hub register.
#[derive(Debug)]
pub struct Executor<T> {
    transport: T,
    address: u8,
}

impl<T: Transport> Executor<T> {
    pub fn new(transport: T, address: u8) -> Self {
        Executor { transport, address }
    }

    /// Bus address of the hub.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Writes `payload` to `register` as `[register, payload..]`.
    pub fn write(&mut self, register: u8, payload: &[u8]) -> Result<()> {
        if payload.len() > consts::MAX_PAYLOAD_LEN {
            return Err(Error::OperationTooLarge {
                max: consts::MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }
        let mut frame = [0u8; consts::MAX_PAYLOAD_LEN + 1];
        frame[0] = register;
        frame[1..=payload.len()].copy_from_slice(payload);
        let frame = &frame[..=payload.len()];
        trace!("Write 0x{:02X} frame: {:02X?}", self.address, frame);
        self.transport
            .write(self.address, frame)
            .map_err(|source| Error::Transport { register, source })
    }

    /// Selects `register`, then reads `N` bytes back.
    pub fn read<const N: usize>(&mut self, register: u8) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.transport
            .write_read(self.address, &[register], &mut buf)
            .map_err(|source| Error::Transport { register, source })?;
        trace!("Read 0x{:02X} reg 0x{:02X}: {:02X?}", self.address, register, buf);
        Ok(buf)
    }

    /// Best-effort write: failures are logged and recorded, never returned.
    pub fn write_or_record(
        &mut self,
        diagnostics: &mut Diagnostics,
        register: u8,
        payload: &[u8],
    ) -> bool {
        match self.write(register, payload) {
            Ok(()) => true,
            Err(e) => {
                warn!("Write failed (reg=0x{:02X} data={:02X?}): {}", register, payload, e);
                diagnostics.record_write(e);
                false
            }
        }
    }

    /// Read that substitutes an all-zero buffer on failure.
    pub fn read_or_default<const N: usize>(
        &mut self,
        diagnostics: &mut Diagnostics,
        register: u8,
    ) -> [u8; N] {
        match self.read::<N>(register) {
            Ok(buf) => buf,
            Err(e) => {
                warn!("Read failed (reg=0x{:02X}): {}", register, e);
                diagnostics.record_read(e);
                [0u8; N]
            }
        }
    }

    /// Gives the transport back.
    pub fn release(self) -> T {
        debug!("Releasing transport for hub 0x{:02X}", self.address);
        self.transport
    }
}
