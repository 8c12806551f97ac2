//! Simulated MSSP register block for host tests

use heapless::Vec;

use crate::registers::{bits, MsspRegisters, Register};

/// Bus activity observed by the simulated peripheral
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    Start,
    Stop,
    Byte(u8),
}

/// How the simulated peripheral answers requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Raise the completion flag after this many flag reads
    After(u8),
    /// Never raise the completion flag
    Stuck,
}

pub struct SimRegisters {
    regs: [u8; 6],
    response: Response,
    nack: bool,
    pending: Option<u8>,
    pub events: Vec<SimEvent, 64>,
    pub flag_clears: usize,
}

impl SimRegisters {
    pub fn new(response: Response) -> Self {
        Self {
            regs: [0; 6],
            response,
            nack: false,
            pending: None,
            events: Vec::new(),
            flag_clears: 0,
        }
    }

    /// Make the addressed device stop acknowledging
    pub fn with_nack(mut self) -> Self {
        self.nack = true;
        self
    }

    /// Change how later requests are answered
    pub fn respond(&mut self, response: Response) {
        self.response = response;
    }

    /// Raise the completion flag without a pending request
    pub fn raise_flag(&mut self) {
        self.regs[index(Register::Pir)] |= bits::SSPIF;
    }

    /// Register value without side effects
    pub fn peek(&self, reg: Register) -> u8 {
        self.regs[index(reg)]
    }

    pub fn flag_raised(&self) -> bool {
        self.peek(Register::Pir) & bits::SSPIF != 0
    }

    fn schedule(&mut self, event: SimEvent) {
        let _ = self.events.push(event);
        if let Response::After(latency) = self.response {
            self.pending = Some(latency);
        }
    }
}

fn index(reg: Register) -> usize {
    match reg {
        Register::Buf => 0,
        Register::Add => 1,
        Register::Con1 => 2,
        Register::Con2 => 3,
        Register::Con3 => 4,
        Register::Pir => 5,
    }
}

impl MsspRegisters for SimRegisters {
    fn read(&mut self, reg: Register) -> u8 {
        if reg == Register::Pir {
            match self.pending {
                Some(0) => {
                    self.pending = None;
                    self.regs[index(Register::Pir)] |= bits::SSPIF;
                }
                Some(n) => self.pending = Some(n - 1),
                None => {}
            }
        }
        self.regs[index(reg)]
    }

    fn write(&mut self, reg: Register, value: u8) {
        match reg {
            Register::Con2 => {
                // SEN and PEN self-clear; ACKSTAT is driven by the slave
                if value & bits::SEN != 0 {
                    self.schedule(SimEvent::Start);
                }
                if value & bits::PEN != 0 {
                    self.schedule(SimEvent::Stop);
                }
                let ackstat = if self.nack { bits::ACKSTAT } else { 0 };
                self.regs[index(reg)] = (value & !(bits::SEN | bits::PEN | bits::ACKSTAT)) | ackstat;
            }
            Register::Buf => {
                self.regs[index(reg)] = value;
                self.schedule(SimEvent::Byte(value));
            }
            Register::Pir => {
                let was_raised = self.flag_raised();
                self.regs[index(reg)] = value;
                if was_raised && !self.flag_raised() {
                    self.flag_clears += 1;
                }
            }
            _ => self.regs[index(reg)] = value,
        }
    }
}
