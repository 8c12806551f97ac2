//! I2C bus abstractions
//!
//! Provides the byte-level master interface used to frame display
//! transactions. Unlike a buffered `write(address, data)` API, every
//! bus condition is an explicit call so drivers control the exact
//! framing on the wire.

/// Bus state as tracked by the master
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusState {
    /// No transaction open; a start condition may be issued
    Idle,
    /// A start condition was issued and no stop has completed yet
    Transmitting,
}

/// Errors reported by a bus master
///
/// With [`PollPolicy::Unbounded`](crate::PollPolicy::Unbounded) and
/// [`AckPolicy::Ignore`](crate::AckPolicy::Ignore) a master never
/// returns `NotResponding` or `Nack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// The completion flag never asserted within the poll budget
    NotResponding,
    /// The addressed device did not acknowledge a byte
    Nack,
    /// A start condition was requested while a transaction was open
    Busy,
    /// The requested operation is not supported by this master
    Unsupported,
}

impl embedded_hal::i2c::Error for BusError {
    fn kind(&self) -> embedded_hal::i2c::ErrorKind {
        use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};

        match self {
            BusError::Nack => ErrorKind::NoAcknowledge(NoAcknowledgeSource::Unknown),
            BusError::Busy => ErrorKind::Bus,
            BusError::NotResponding | BusError::Unsupported => ErrorKind::Other,
        }
    }
}

/// I2C bus master
///
/// Byte-level master operations. All calls block until the peripheral
/// reports completion (or the implementation's poll policy gives up).
pub trait BusMaster {
    /// Configure the peripheral as bus master and return it to idle
    fn init(&mut self);

    /// Issue a start condition
    ///
    /// Only valid while the bus is [`BusState::Idle`].
    fn start(&mut self) -> Result<(), BusError>;

    /// Issue a stop condition, returning the bus to [`BusState::Idle`]
    fn stop(&mut self) -> Result<(), BusError>;

    /// Shift one byte out on the bus
    fn write_byte(&mut self, byte: u8) -> Result<(), BusError>;

    /// Current bus state
    fn state(&self) -> BusState;

    /// Check if a new transaction may be started
    fn is_idle(&self) -> bool {
        self.state() == BusState::Idle
    }
}

impl<T: BusMaster + ?Sized> BusMaster for &mut T {
    fn init(&mut self) {
        T::init(self)
    }

    fn start(&mut self) -> Result<(), BusError> {
        T::start(self)
    }

    fn stop(&mut self) -> Result<(), BusError> {
        T::stop(self)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), BusError> {
        T::write_byte(self, byte)
    }

    fn state(&self) -> BusState {
        T::state(self)
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };

    /// Custom bus frequency
    pub const fn with_frequency(frequency: u32) -> Self {
        Self { frequency }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        use embedded_hal::i2c::{Error, ErrorKind, NoAcknowledgeSource};

        assert_eq!(
            BusError::Nack.kind(),
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Unknown)
        );
        assert_eq!(BusError::Busy.kind(), ErrorKind::Bus);
        assert_eq!(BusError::NotResponding.kind(), ErrorKind::Other);
    }

    #[test]
    fn test_default_is_standard_mode() {
        assert_eq!(I2cConfig::default(), I2cConfig::STANDARD);
        assert_eq!(I2cConfig::default().frequency, 100_000);
    }

    struct Counting {
        state: BusState,
        bytes: usize,
    }

    impl BusMaster for Counting {
        fn init(&mut self) {
            self.state = BusState::Idle;
        }

        fn start(&mut self) -> Result<(), BusError> {
            if self.state != BusState::Idle {
                return Err(BusError::Busy);
            }
            self.state = BusState::Transmitting;
            Ok(())
        }

        fn stop(&mut self) -> Result<(), BusError> {
            self.state = BusState::Idle;
            Ok(())
        }

        fn write_byte(&mut self, _byte: u8) -> Result<(), BusError> {
            self.bytes += 1;
            Ok(())
        }

        fn state(&self) -> BusState {
            self.state
        }
    }

    fn open_and_write<B: BusMaster>(mut bus: B) -> Result<(), BusError> {
        bus.start()?;
        bus.write_byte(0x7C)?;
        assert!(!bus.is_idle());
        assert_eq!(bus.start(), Err(BusError::Busy));
        bus.stop()
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut bus = Counting {
            state: BusState::Idle,
            bytes: 0,
        };

        open_and_write(&mut bus).unwrap();

        assert!(bus.is_idle());
        assert_eq!(bus.bytes, 1);
    }
}
