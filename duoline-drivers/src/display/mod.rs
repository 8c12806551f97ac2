//! Character LCD drivers

pub mod st7032;
pub mod transport;

pub use st7032::St7032;
pub use transport::DisplayTransport;

use duoline_hal::BusError;

/// Display driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// The bus master reported a failure
    Bus(BusError),
    /// The controller has not completed its power-up sequence
    NotReady,
}

impl From<BusError> for DisplayError {
    fn from(e: BusError) -> Self {
        DisplayError::Bus(e)
    }
}
