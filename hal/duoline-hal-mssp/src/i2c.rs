//! I2C master on the MSSP peripheral
//!
//! Each bus condition and byte transfer is requested through a control
//! register and completes when the peripheral raises SSPxIF. The flag is
//! cleared before every request, so a completion left over from an
//! earlier timed-out operation is never mistaken for the new one, and
//! cleared again once it has been observed.

use duoline_hal::{AckPolicy, BusError, BusMaster, BusState, PollPolicy};
use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};

use crate::clock::Divisor;
use crate::registers::{bits, MsspRegisters, Register};

/// MSSP master configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MsspConfig {
    /// Baud rate reload value
    pub divisor: Divisor,
    /// How long to wait for SSPxIF
    pub poll: PollPolicy,
    /// Whether ACKSTAT is inspected after each byte
    pub ack: AckPolicy,
}

impl Default for MsspConfig {
    fn default() -> Self {
        Self {
            divisor: Divisor::STANDARD_32MHZ,
            poll: PollPolicy::DEFAULT,
            ack: AckPolicy::Ignore,
        }
    }
}

impl MsspConfig {
    /// Spin forever and never inspect ACKSTAT
    pub const fn unbounded(divisor: Divisor) -> Self {
        Self {
            divisor,
            poll: PollPolicy::Unbounded,
            ack: AckPolicy::Ignore,
        }
    }
}

/// MSSP I2C master
pub struct Mssp<R> {
    regs: R,
    config: MsspConfig,
    state: BusState,
}

impl<R: MsspRegisters> Mssp<R> {
    /// Take ownership of the register block
    ///
    /// The peripheral is not touched until [`BusMaster::init`] is called.
    pub fn new(regs: R, config: MsspConfig) -> Self {
        Self {
            regs,
            config,
            state: BusState::Idle,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &MsspConfig {
        &self.config
    }

    /// Release the register block
    pub fn free(self) -> R {
        self.regs
    }

    fn clear_flag(&mut self) {
        self.regs.modify(Register::Pir, |v| v & !bits::SSPIF);
    }

    /// Spin on SSPxIF, then clear it
    fn await_completion(&mut self) -> Result<(), BusError> {
        let poll = self.config.poll;
        let regs = &mut self.regs;
        if let Err(e) = poll.wait(|| regs.read(Register::Pir) & bits::SSPIF != 0) {
            error!("mssp: completion flag never raised");
            return Err(e);
        }
        self.clear_flag();
        Ok(())
    }

    fn write_frame(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), BusError> {
        self.write_byte(address << 1)?;
        for operation in operations.iter() {
            if let Operation::Write(bytes) = operation {
                for &byte in bytes.iter() {
                    self.write_byte(byte)?;
                }
            }
        }
        Ok(())
    }
}

impl<R: MsspRegisters> BusMaster for Mssp<R> {
    fn init(&mut self) {
        debug!("mssp: init, ADD = {}", self.config.divisor.value());
        self.regs.write(Register::Con1, bits::CON1_MASTER);
        self.regs.write(Register::Con2, 0x00);
        self.regs.write(Register::Con3, 0x00);
        self.regs.write(Register::Add, self.config.divisor.value());
        self.clear_flag();
        self.state = BusState::Idle;
    }

    fn start(&mut self) -> Result<(), BusError> {
        if self.state != BusState::Idle {
            warn!("mssp: start requested while transmitting");
            return Err(BusError::Busy);
        }
        self.clear_flag();
        self.regs.modify(Register::Con2, |v| v | bits::SEN);
        self.await_completion()?;
        self.state = BusState::Transmitting;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), BusError> {
        self.clear_flag();
        self.regs.modify(Register::Con2, |v| v | bits::PEN);
        // Once a stop is requested the master no longer owns the bus,
        // even if the peripheral never reports completion.
        self.state = BusState::Idle;
        self.await_completion()
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), BusError> {
        trace!("mssp: tx {=u8:#x}", byte);
        self.clear_flag();
        self.regs.write(Register::Buf, byte);
        self.await_completion()?;

        let acknowledged = self.regs.read(Register::Con2) & bits::ACKSTAT == 0;
        if !acknowledged {
            trace!("mssp: {=u8:#x} not acknowledged", byte);
        }
        self.config.ack.check(acknowledged).inspect_err(|_| {
            warn!("mssp: NACK on {=u8:#x}", byte);
        })
    }

    fn state(&self) -> BusState {
        self.state
    }
}

impl<R> ErrorType for Mssp<R> {
    type Error = BusError;
}

/// Write-only embedded-hal I2C
///
/// Read operations are rejected with [`BusError::Unsupported`] before
/// anything is put on the bus.
impl<R: MsspRegisters> I2c<SevenBitAddress> for Mssp<R> {
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if operations
            .iter()
            .any(|operation| matches!(operation, Operation::Read(_)))
        {
            return Err(BusError::Unsupported);
        }

        self.start()?;
        match self.write_frame(address, operations) {
            Ok(()) => self.stop(),
            Err(e) => {
                if let Err(stop) = self.stop() {
                    warn!("mssp: stop after {} failed: {}", e, stop);
                }
                Err(e)
            }
        }
    }
}
