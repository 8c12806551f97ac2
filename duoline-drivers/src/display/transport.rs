//! Display transport
//!
//! Frames single command or data bytes as addressed transactions and
//! applies the settle delay the controller needs after each one. The
//! ST7032 offers no busy flag over I2C, so success is assumed once the
//! transaction and its delay have completed.

use duoline_core::config::Timing;
use duoline_core::{Control, DeviceAddress, Transaction};
use duoline_hal::{BusError, BusMaster};
use embedded_hal::delay::DelayNs;

/// Addressed command/data writer
///
/// The bus must already be initialized with [`BusMaster::init`].
pub struct DisplayTransport<B, D> {
    bus: B,
    delay: D,
    address: DeviceAddress,
    timing: Timing,
}

impl<B, D> DisplayTransport<B, D>
where
    B: BusMaster,
    D: DelayNs,
{
    pub fn new(bus: B, delay: D, address: DeviceAddress, timing: Timing) -> Self {
        Self {
            bus,
            delay,
            address,
            timing,
        }
    }

    /// Send an instruction, then wait the command settle time
    pub fn send_command(&mut self, command: u8) -> Result<(), BusError> {
        self.send(Transaction::command(self.address, command))
    }

    /// Send a DDRAM data byte, then wait the data settle time
    pub fn send_data(&mut self, datum: u8) -> Result<(), BusError> {
        self.send(Transaction::data(self.address, datum))
    }

    /// Send a transaction and wait the settle time for its kind
    ///
    /// A failure after the start condition closes the transaction with a
    /// stop condition before the error is returned, so the bus is free
    /// for the next transaction.
    pub fn send(&mut self, transaction: Transaction) -> Result<(), BusError> {
        trace!(
            "st7032: {} {=u8:#x}",
            transaction.control,
            transaction.payload
        );

        self.bus.start()?;
        if let Err(e) = self.write_frame(&transaction.frame()) {
            warn!("st7032: {} mid-frame, releasing bus", e);
            if let Err(stop) = self.bus.stop() {
                warn!("st7032: stop failed: {}", stop);
            }
            return Err(e);
        }
        self.bus.stop()?;

        match transaction.control {
            Control::Command => self.delay.delay_us(self.timing.command_settle_us),
            Control::Data => self.delay.delay_us(self.timing.data_settle_us),
        }

        Ok(())
    }

    /// Busy-wait without touching the bus
    pub fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    fn write_frame(&mut self, frame: &[u8]) -> Result<(), BusError> {
        for &byte in frame {
            self.bus.write_byte(byte)?;
        }
        Ok(())
    }

    pub fn address(&self) -> DeviceAddress {
        self.address
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Get access to the underlying bus
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Get mutable access to the underlying bus
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Release the bus and delay
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }
}
