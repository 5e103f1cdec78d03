//! The hub handle and the plumbing shared by every feature.

use crate::address;
use crate::config::HubConfig;
use crate::error::{unsupported, Error, Result};
use crate::register::{Function, Variant};
use crate::transport::{Diagnostics, Executor, Transport};
use log::{debug, info, warn};

/// A handle to one PbHub on a bus.
///
/// Feature operations never fail outward: failed writes are dropped and
/// failed reads return zero/false. What went wrong is kept in
/// [`diagnostics`](PbHub::diagnostics).
///
/// **Note:** Not re-entrant. Share it between contexts only behind a lock.
#[derive(Debug)]
pub struct PbHub<T> {
    pub(crate) executor: Executor<T>,
    pub(crate) variant: Variant,
    pub(crate) diagnostics: Diagnostics,
}

impl<T: Transport> PbHub<T> {
    /// Creates a handle for the hub at `address` using the given register layout.
    pub fn new(transport: T, address: u8, variant: Variant) -> Self {
        debug!("Setting up PbHub at 0x{:02X} ({} map)", address, variant);
        PbHub {
            executor: Executor::new(transport, address),
            variant,
            diagnostics: Diagnostics::default(),
        }
    }

    /// Creates a handle from a validated [`HubConfig`].
    pub fn from_config(transport: T, config: &HubConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(transport, config.address, config.variant))
    }

    /// Bus address of the hub.
    pub fn address(&self) -> u8 {
        self.executor.address()
    }

    /// Register layout in use.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Failure counters and the most recent error.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// The most recent failure, if any.
    pub fn last_error(&self) -> Option<&Error> {
        self.diagnostics.last_error.as_ref()
    }

    /// Takes the most recent failure, leaving the counters alone.
    pub fn take_last_error(&mut self) -> Option<Error> {
        self.diagnostics.last_error.take()
    }

    pub fn reset_diagnostics(&mut self) {
        self.diagnostics = Diagnostics::default();
    }

    /// Direct access to the executor for callers that want errors returned.
    pub fn executor(&mut self) -> &mut Executor<T> {
        &mut self.executor
    }

    /// Consumes the handle and returns the transport.
    pub fn release(self) -> T {
        self.executor.release()
    }

    /// Resolves the register of `function` for a logical pin.
    pub fn register_for_pin(&self, function: Function, pin: u8) -> Option<u8> {
        self.variant
            .register(function, address::slot_of(pin), address::index_of(pin))
    }

    /// Resolves the register of a slot-level function.
    pub fn register_for_slot(&self, function: Function, slot: u8) -> Option<u8> {
        self.variant.register(function, slot, 0)
    }

    // Unsupported functions are recorded against the failed-write/read counters
    // so they show up the same way a bus failure would.
    pub(crate) fn resolve_write(&mut self, function: Function, slot: u8, idx: u8) -> Option<u8> {
        let reg = self.variant.register(function, slot, idx);
        if reg.is_none() {
            warn!("{} skipped: not available on the {} map", function, self.variant);
            self.diagnostics
                .record_write(unsupported(self.variant, function));
        }
        reg
    }

    pub(crate) fn resolve_read(&mut self, function: Function, slot: u8, idx: u8) -> Option<u8> {
        let reg = self.variant.register(function, slot, idx);
        if reg.is_none() {
            warn!("{} skipped: not available on the {} map", function, self.variant);
            self.diagnostics
                .record_read(unsupported(self.variant, function));
        }
        reg
    }

    pub(crate) fn write_register(&mut self, register: u8, payload: &[u8]) -> bool {
        self.executor
            .write_or_record(&mut self.diagnostics, register, payload)
    }

    pub(crate) fn read_register<const N: usize>(&mut self, register: u8) -> [u8; N] {
        self.executor
            .read_or_default::<N>(&mut self.diagnostics, register)
    }

    /// Reads the global firmware version register (full map only). Returns 0 on failure.
    pub fn firmware_version(&mut self) -> u8 {
        let Some(reg) = self.resolve_read(Function::FirmwareVersion, 0, 0) else {
            return 0;
        };
        let failed_before = self.diagnostics.failed_reads;
        let [version] = self.read_register::<1>(reg);
        if self.diagnostics.failed_reads == failed_before {
            info!("Firmware version: {} (reg=0x{:02X})", version, reg);
        }
        version
    }
}
