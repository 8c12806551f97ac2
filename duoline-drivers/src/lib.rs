//! Display driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in duoline-core on top of any `duoline-hal` bus master:
//!
//! - Display transport (command/data framing with settle delays)
//! - ST7032i character LCD controller (power-up sequence, text output)
//!
//! Settle delays go through `embedded_hal::delay::DelayNs`, so any HAL
//! delay provider can be used.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
mod fmt;

pub mod display;

#[cfg(test)]
mod testing;

pub use display::{DisplayError, DisplayTransport, St7032};
