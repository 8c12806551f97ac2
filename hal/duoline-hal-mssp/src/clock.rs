//! Baud rate generator
//!
//! In I2C master mode the MSSP derives SCL from the instruction clock:
//! `f_scl = f_osc / (4 * (ADD + 1))`.

use duoline_hal::I2cConfig;

/// Internal high-frequency oscillator at 32 MHz
pub const HFINTOSC_32MHZ: u32 = 32_000_000;

/// Smallest reload value the baud rate generator supports in master mode
const MIN_RELOAD: u32 = 3;

/// Baud rate reload value for the ADD register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Divisor(u8);

/// Compute a [`Divisor`] at compile time
///
/// Expands to an inline `const` block, so an unreachable frequency fails
/// the build instead of misconfiguring the bus:
///
/// ```
/// use duoline_hal::I2cConfig;
/// use duoline_hal_mssp::{divisor, Divisor};
///
/// let divisor: Divisor = divisor!(32_000_000, I2cConfig::STANDARD);
/// assert_eq!(divisor.value(), 79);
/// ```
///
/// ```compile_fail
/// use duoline_hal::I2cConfig;
/// use duoline_hal_mssp::divisor;
///
/// let divisor = divisor!(32_000_000, I2cConfig::with_frequency(10_000));
/// ```
#[macro_export]
macro_rules! divisor {
    ($clock_hz:expr, $config:expr) => {
        const {
            match $crate::Divisor::checked($clock_hz, $config) {
                Some(divisor) => divisor,
                None => panic!("bus frequency not reachable from this clock"),
            }
        }
    };
}

impl Divisor {
    /// 100 kHz from the 32 MHz internal oscillator
    pub const STANDARD_32MHZ: Self = divisor!(HFINTOSC_32MHZ, I2cConfig::STANDARD);

    /// Compute the reload value, or `None` if it does not fit the register
    pub const fn checked(clock_hz: u32, config: I2cConfig) -> Option<Self> {
        let per_bit = 4 * config.frequency as u64;
        if per_bit == 0 {
            return None;
        }

        let ratio = clock_hz as u64 / per_bit;
        if ratio == 0 {
            return None;
        }

        let reload = ratio - 1;
        if reload < MIN_RELOAD as u64 || reload > u8::MAX as u64 {
            return None;
        }

        Some(Self(reload as u8))
    }

    /// Raw ADD register value
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Actual SCL frequency produced from `clock_hz`
    pub const fn frequency(self, clock_hz: u32) -> u32 {
        clock_hz / (4 * (self.0 as u32 + 1))
    }
}
