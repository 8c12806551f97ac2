//! Configuration types
//!
//! Compile-time configuration for the display: bus address, controller
//! timing and panel power settings. Everything is `const`-constructible
//! so board crates can define their settings as constants.

pub mod panel;
pub mod timing;

pub use panel::PanelConfig;
pub use timing::Timing;

use crate::transaction::DeviceAddress;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Controller bus address
    pub address: DeviceAddress,
    /// Settle delays
    pub timing: Timing,
    /// Oscillator, contrast and power settings
    pub panel: PanelConfig,
}

impl DisplayConfig {
    /// ST7032i at its fixed address with datasheet timing
    pub const DEFAULT: Self = Self {
        address: DeviceAddress::ST7032,
        timing: Timing::ST7032,
        panel: PanelConfig::DEFAULT,
    };
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
