//! Duoline Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits that the display
//! drivers are written against. Chip-specific HALs implement them on top
//! of their register blocks, so the ST7032 driver never touches a
//! peripheral register directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  duoline-drivers (transport, ST7032)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  duoline-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ duoline-hal-  │
//!             │     mssp      │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::BusMaster`] - Start/stop/byte-level I2C master operations
//!
//! # Policies
//!
//! - [`poll::PollPolicy`] - How long to spin on a completion flag
//! - [`poll::AckPolicy`] - Whether the acknowledge bit is inspected

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;
pub mod poll;

// Re-export key types at crate root for convenience
pub use i2c::{BusError, BusMaster, BusState, I2cConfig};
pub use poll::{AckPolicy, PollPolicy};
