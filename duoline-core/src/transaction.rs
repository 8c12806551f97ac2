//! Display transaction framing
//!
//! Every write to the controller is one addressed I2C transaction:
//!
//! ```text
//! ┌───────┬──────────────┬─────────┬─────────┬──────┐
//! │ START │ ADDRESS << 1 │ CONTROL │ PAYLOAD │ STOP │
//! │       │ 1B (W = 0)   │ 1B      │ 1B      │      │
//! └───────┴──────────────┴─────────┴─────────┴──────┘
//! ```
//!
//! The control byte carries Co (bit 7, always 0 here: one payload per
//! transaction) and RS (bit 6: 0 = instruction, 1 = DDRAM data).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Length of a framed transaction on the wire (without start/stop)
pub const FRAME_LEN: usize = 3;

/// 7-bit I2C device address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceAddress(u8);

impl DeviceAddress {
    /// ST7032i fixed address (write byte 0x7C)
    pub const ST7032: Self = Self(0x3E);

    /// Create an address, or `None` if it does not fit 7 bits
    pub const fn new(address: u8) -> Option<Self> {
        if address > 0x7F {
            None
        } else {
            Some(Self(address))
        }
    }

    /// 7-bit address
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Address byte for a write transfer (R/W = 0)
    pub const fn write_byte(self) -> u8 {
        self.0 << 1
    }
}

/// Control byte selecting how the payload is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Control {
    /// Co = 0, RS = 0
    Command = 0x00,
    /// Co = 0, RS = 1
    Data = 0x40,
}

impl Control {
    pub const fn byte(self) -> u8 {
        self as u8
    }

    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(Control::Command),
            0x40 => Some(Control::Data),
            _ => None,
        }
    }
}

/// Errors decoding a captured frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Frame is not exactly three bytes
    InvalidLength,
    /// Address byte has the read bit set
    ReadTransfer,
    /// Control byte is neither command nor data
    InvalidControl(u8),
}

/// One addressed write to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transaction {
    pub address: DeviceAddress,
    pub control: Control,
    pub payload: u8,
}

impl Transaction {
    /// Instruction write
    pub const fn command(address: DeviceAddress, command: u8) -> Self {
        Self {
            address,
            control: Control::Command,
            payload: command,
        }
    }

    /// DDRAM data write
    pub const fn data(address: DeviceAddress, datum: u8) -> Self {
        Self {
            address,
            control: Control::Data,
            payload: datum,
        }
    }

    /// Bytes sent between start and stop
    pub const fn frame(&self) -> [u8; FRAME_LEN] {
        [self.address.write_byte(), self.control.byte(), self.payload]
    }

    /// Decode the bytes captured between a start and a stop
    pub fn from_frame(frame: &[u8]) -> Result<Self, FrameError> {
        let [address, control, payload] = frame else {
            return Err(FrameError::InvalidLength);
        };

        if address & 0x01 != 0 {
            return Err(FrameError::ReadTransfer);
        }
        let control = Control::from_byte(*control).ok_or(FrameError::InvalidControl(*control))?;

        Ok(Self {
            address: DeviceAddress(address >> 1),
            control,
            payload: *payload,
        })
    }

    pub const fn is_command(&self) -> bool {
        matches!(self.control, Control::Command)
    }

    pub const fn is_data(&self) -> bool {
        matches!(self.control, Control::Data)
    }
}
