//! Controller timing
//!
//! The ST7032 has no busy flag readable over I2C, so every write is
//! followed by a fixed wait long enough for the slowest instruction of
//! its kind.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settle delays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timing {
    /// Wait after power-up before the first command (ms)
    pub power_up_ms: u32,
    /// Wait after follower control for the booster to stabilize (ms)
    pub stabilize_ms: u32,
    /// Wait after every command (µs)
    pub command_settle_us: u32,
    /// Wait after every data write (µs)
    pub data_settle_us: u32,
    /// Extra wait after clear display (ms)
    pub clear_settle_ms: u32,
}

impl Timing {
    /// Datasheet-derived timing for a 3.3 V ST7032i
    pub const ST7032: Self = Self {
        power_up_ms: 50,
        stabilize_ms: 200,
        command_settle_us: 2_000,
        data_settle_us: 50,
        clear_settle_ms: 2,
    };
}

impl Default for Timing {
    fn default() -> Self {
        Self::ST7032
    }
}
