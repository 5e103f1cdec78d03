//! Internal constants: bus addresses, slot bases and register offsets.

/// Factory default 7-bit bus address of the hub.
pub const DEFAULT_ADDRESS: u8 = 0x61;

/// Bus addresses the hub can be strapped to (0x61-0x68).
pub const HUB_ADDRESSES: [u8; 8] = [0x61, 0x62, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68];

/// Number of hub slots.
pub const SLOT_COUNT: u8 = 6;

/// Number of channels per slot.
pub const CHANNELS_PER_SLOT: u8 = 2;

/// Base register of each slot. Note the gap after 0x80.
pub const SLOT_BASES: [u8; SLOT_COUNT as usize] = [0x40, 0x50, 0x60, 0x70, 0x80, 0xA0];

/// Largest payload any feature writes (LED fill).
pub const MAX_PAYLOAD_LEN: usize = 7;

// --- Reduced map (GPIO/ADC/servo only) ---
pub mod reduced {
    pub const WRITE_DIGITAL: [u8; 2] = [0x01, 0x02];
    pub const READ_DIGITAL: [u8; 2] = [0x04, 0x05];
    // Two independent ADC channels per slot
    pub const READ_ANALOG: [u8; 2] = [0x06, 0x07];
    pub const SERVO_ANGLE: [u8; 2] = [0x0C, 0x0D];
    pub const SERVO_PULSE: [u8; 2] = [0x0E, 0x0F];
}

// --- Full map (adds PWM, RGB LED and global registers) ---
pub mod full {
    pub const WRITE_DIGITAL: [u8; 2] = [0x00, 0x01];
    pub const WRITE_PWM: [u8; 2] = [0x02, 0x03];
    pub const READ_DIGITAL: [u8; 2] = [0x04, 0x05];
    // One ADC per slot, shared by both channels
    pub const READ_ANALOG: u8 = 0x06;
    pub const LED_NUM: u8 = 0x08;
    pub const LED_COLOR: u8 = 0x09;
    pub const LED_FILL: u8 = 0x0A;
    pub const LED_BRIGHTNESS: u8 = 0x0B;
    pub const SERVO_ANGLE: [u8; 2] = [0x0C, 0x0D];
    pub const SERVO_PULSE: [u8; 2] = [0x0E, 0x0F];

    // Global registers, never OR-ed with a slot base
    pub const LED_SHOW_MODE: u8 = 0xFA;
    pub const FW_VERSION: u8 = 0xFE;
}

// --- XR2280x USB-HID I2C bridge ---
#[cfg_attr(not(feature = "hid"), allow(dead_code))]
pub mod bridge {
    /// Exar Corporation vendor ID.
    pub const EXAR_VID: u16 = 0x04E2;
    /// Product ID of the bridge's I2C HID interface.
    pub const XR2280X_I2C_PID: u16 = 0x1100;

    pub const REPORT_ID_WRITE_HID_REGISTER: u8 = 0x3C;

    pub const REPORT_MAX_DATA_SIZE: usize = 32;
    // Flags(1) + WrSize(1) + RdSize(1) + SlaveAddr(1) + Data(32)
    pub const OUT_REPORT_WRITE_BUF_SIZE: usize = 36;
    // Flags(1) + WrSize(1) + RdSize(1) + Reserved(1) + Data(32)
    pub const IN_REPORT_READ_BUF_SIZE: usize = 36;
    pub const IN_REPORT_HEADER_LEN: usize = 4;

    pub const REG_SCL_LOW: u16 = 0x0341;
    pub const REG_SCL_HIGH: u16 = 0x0342;

    pub const DEFAULT_TIMEOUT_MS: i32 = 500;

    pub mod out_flags {
        pub const START_BIT: u8 = 1 << 0;
        pub const STOP_BIT: u8 = 1 << 1;
    }

    pub mod in_flags {
        pub const REQUEST_ERROR: u8 = 1 << 0;
        pub const NAK_RECEIVED: u8 = 1 << 1;
        pub const ARBITRATION_LOST: u8 = 1 << 2;
        pub const TIMEOUT: u8 = 1 << 3;
        // Bits 7..4 carry the sequence number
        pub const ERROR_MASK: u8 = 0x0F;
    }
}
