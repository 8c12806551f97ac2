//! MSSP-specific HAL for the Duoline firmware
//!
//! This crate implements the `duoline-hal` bus master on the master
//! synchronous serial port found on PIC16F1 class parts (PIC16F18857 on
//! the reference board), driving the peripheral purely through its
//! registers:
//!
//! - [`registers`] - Register names, bit definitions and the
//!   [`MsspRegisters`] access trait, with a memory-mapped implementation
//! - [`clock`] - Compile-time baud rate reload computation
//! - [`i2c`] - The [`Mssp`] master, implementing both
//!   [`duoline_hal::BusMaster`] and the write half of
//!   `embedded_hal::i2c::I2c`
//!
//! Pin routing, oscillator setup and configuration bits are expected to
//! be done by the board before [`Mssp`] is initialized.
//!
//! # Features
//!
//! - `defmt` - Enable debug formatting and bus logging

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
mod fmt;

pub mod clock;
pub mod i2c;
pub mod registers;

#[cfg(test)]
mod sim;

pub use clock::Divisor;
pub use i2c::{Mssp, MsspConfig};
pub use registers::{MmioRegisters, MsspRegisters, Register, RegisterMap};
