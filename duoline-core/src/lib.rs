//! Board-agnostic core logic for the ST7032 character LCD
//!
//! This crate contains everything about the display controller that does
//! not depend on how bytes reach the bus:
//!
//! - ST7032 instruction set and line addressing
//! - Transaction framing (address, control byte, payload)
//! - Controller lifecycle state machine
//! - The mandated power-up sequence
//! - Timing and panel configuration
//! - The character display trait

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod config;
pub mod init;
pub mod state;
pub mod traits;
pub mod transaction;

pub use config::DisplayConfig;
pub use transaction::{Control, DeviceAddress, Transaction};
