use crate::register::{Function, Variant};
use thiserror::Error;

/// Bus-level failure reported by a [`Transport`](crate::transport::Transport).
///
/// The hub cannot tell these apart in any useful way; they exist so the
/// recorded diagnostic says *what* the bus reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Device did not acknowledge its address or a data byte.
    #[error("No acknowledge from bus address 0x{address:02X}")]
    Nack {
        /// 7-bit bus address of the hub.
        address: u8,
    },
    /// Another master won arbitration.
    #[error("Bus arbitration lost while addressing 0x{address:02X}")]
    ArbitrationLost {
        /// 7-bit bus address of the hub.
        address: u8,
    },
    /// The transport gave up waiting for the bus.
    #[error("Bus timeout while addressing 0x{address:02X}")]
    Timeout {
        /// 7-bit bus address of the hub.
        address: u8,
    },
    /// Any other bus failure.
    #[error("Bus error at 0x{address:02X}: {message}")]
    Bus {
        /// 7-bit bus address of the hub.
        address: u8,
        /// What the transport reported.
        message: String,
    },
}

impl TransportError {
    /// Maps a generic `embedded-hal` error kind onto a transport error.
    pub fn from_kind(address: u8, kind: embedded_hal::i2c::ErrorKind) -> Self {
        use embedded_hal::i2c::ErrorKind;
        match kind {
            ErrorKind::NoAcknowledge(_) => TransportError::Nack { address },
            ErrorKind::ArbitrationLoss => TransportError::ArbitrationLost { address },
            other => TransportError::Bus {
                address,
                message: format!("{other}"),
            },
        }
    }
}

/// Errors that can occur when driving a PbHub.
#[derive(Error, Debug)]
pub enum Error {
    /// A bus transaction against a hub register failed.
    #[error("Transaction on register 0x{register:02X} failed: {source}")]
    Transport {
        /// Register the transaction addressed.
        register: u8,
        /// The underlying bus failure.
        #[source]
        source: TransportError,
    },
    /// The register map in use has no register for this function.
    #[error("{function} is not available on the {variant} register map")]
    UnsupportedFeature {
        /// Register map of the device.
        variant: Variant,
        /// Function that was requested.
        function: Function,
    },
    /// Logical pin does not decode to a valid slot/channel.
    #[error("Logical pin {pin} out of range: {message}")]
    PinArgumentOutOfRange {
        /// The invalid logical pin.
        pin: u8,
        /// What constraint was violated.
        message: String,
    },
    /// Function argument is outside the valid range.
    #[error("Argument out of range: {0}")]
    ArgumentOutOfRange(String),
    /// Requested transfer exceeds protocol limits.
    #[error("Requested operation size is too large (max {max}, got {actual})")]
    OperationTooLarge {
        /// Maximum allowed size.
        max: usize,
        /// Size requested.
        actual: usize,
    },
    /// Malformed or short report received from a bridge.
    #[error("Invalid report received or unexpected size ({0} bytes)")]
    InvalidReport(usize),
    /// Configuration rejected by validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// Error from the HID API layer of the USB bridge.
    #[cfg(feature = "hid")]
    #[error("HID API error: {0}")]
    Hid(#[from] hidapi::HidError),
}

/// Result type alias for PbHub operations.
pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn unsupported(variant: Variant, function: Function) -> Error {
    Error::UnsupportedFeature { variant, function }
}
