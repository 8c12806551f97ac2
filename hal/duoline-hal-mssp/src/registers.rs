//! MSSP register block
//!
//! The master synchronous serial port exposes a handful of 8-bit
//! registers. Only the master owns them; everything above the master
//! goes through [`BusMaster`](duoline_hal::BusMaster).

/// MSSP registers used in I2C master mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Transmit/receive buffer (SSPxBUF)
    Buf,
    /// Baud rate reload (SSPxADD in master mode)
    Add,
    /// Control 1: enable and mode select (SSPxCON1)
    Con1,
    /// Control 2: bus condition requests and ACK status (SSPxCON2)
    Con2,
    /// Control 3 (SSPxCON3)
    Con3,
    /// Peripheral interrupt flags holding SSPxIF
    Pir,
}

/// Register bit definitions
pub mod bits {
    /// CON1: synchronous serial port enable
    pub const SSPEN: u8 = 1 << 5;
    /// CON1: mode field, I2C master with clock = Fosc / (4 * (ADD + 1))
    pub const SSPM_I2C_MASTER: u8 = 0b1000;
    /// CON1 value for an enabled I2C master
    pub const CON1_MASTER: u8 = SSPEN | SSPM_I2C_MASTER;

    /// CON2: start condition enable
    pub const SEN: u8 = 1 << 0;
    /// CON2: stop condition enable
    pub const PEN: u8 = 1 << 2;
    /// CON2: acknowledge status, set when the slave did NOT acknowledge
    pub const ACKSTAT: u8 = 1 << 6;

    /// PIR: MSSP completion flag
    pub const SSPIF: u8 = 1 << 0;
}

/// Access to an MSSP register block
///
/// Reads take `&mut self` because reading a status register on real
/// hardware is an observable bus access.
pub trait MsspRegisters {
    /// Read a register
    fn read(&mut self, reg: Register) -> u8;

    /// Write a register
    fn write(&mut self, reg: Register, value: u8);

    /// Read-modify-write a register
    fn modify<F>(&mut self, reg: Register, f: F)
    where
        F: FnOnce(u8) -> u8,
    {
        let value = self.read(reg);
        self.write(reg, f(value));
    }
}

/// Addresses of the MSSP registers in data memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterMap {
    pub buf: usize,
    pub add: usize,
    pub con1: usize,
    pub con2: usize,
    pub con3: usize,
    pub pir: usize,
}

impl RegisterMap {
    fn address(&self, reg: Register) -> usize {
        match reg {
            Register::Buf => self.buf,
            Register::Add => self.add,
            Register::Con1 => self.con1,
            Register::Con2 => self.con2,
            Register::Con3 => self.con3,
            Register::Pir => self.pir,
        }
    }
}

/// Memory-mapped MSSP registers accessed with volatile loads and stores
pub struct MmioRegisters {
    map: RegisterMap,
}

impl MmioRegisters {
    /// Bind to a register block
    ///
    /// # Safety
    ///
    /// Every address in `map` must be a valid, byte-addressable register
    /// (or memory) location for the lifetime of the returned value, and
    /// nothing else may access those locations concurrently.
    pub const unsafe fn new(map: RegisterMap) -> Self {
        Self { map }
    }

    /// Register addresses this block is bound to
    pub fn map(&self) -> &RegisterMap {
        &self.map
    }
}

impl MsspRegisters for MmioRegisters {
    fn read(&mut self, reg: Register) -> u8 {
        let ptr = self.map.address(reg) as *const u8;
        // SAFETY: validity of every mapped address is the contract of `new`.
        unsafe { core::ptr::read_volatile(ptr) }
    }

    fn write(&mut self, reg: Register, value: u8) {
        let ptr = self.map.address(reg) as *mut u8;
        // SAFETY: validity of every mapped address is the contract of `new`.
        unsafe { core::ptr::write_volatile(ptr, value) }
    }
}
