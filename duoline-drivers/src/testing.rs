//! Recording bus and delay for host tests

use duoline_core::Transaction;
use duoline_hal::{BusError, BusMaster, BusState};
use embedded_hal::delay::DelayNs;
use heapless::Vec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusEvent {
    Start,
    Stop,
    Byte(u8),
}

/// Bus master that records every condition and byte
pub struct RecordingBus {
    pub events: Vec<BusEvent, 256>,
    state: BusState,
    nack_on: Option<u8>,
    fail_after: Option<usize>,
    bytes: usize,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            state: BusState::Idle,
            nack_on: None,
            fail_after: None,
            bytes: 0,
        }
    }

    /// Report a NACK whenever `byte` is written
    pub fn nack_on(mut self, byte: u8) -> Self {
        self.nack_on = Some(byte);
        self
    }

    /// Time out once, on the write after `bytes` bytes have been written
    pub fn fail_once_after(mut self, bytes: usize) -> Self {
        self.fail_after = Some(bytes);
        self
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Decode the recorded events into transactions
    ///
    /// Panics if the events are not a sequence of complete
    /// start/bytes/stop frames.
    pub fn transactions(&self) -> Vec<Transaction, 64> {
        let mut transactions = Vec::new();
        let mut frame: Vec<u8, 8> = Vec::new();
        let mut open = false;

        for event in &self.events {
            match *event {
                BusEvent::Start => {
                    assert!(!open, "start inside an open transaction");
                    open = true;
                    frame.clear();
                }
                BusEvent::Byte(byte) => {
                    assert!(open, "byte outside a transaction");
                    frame.push(byte).unwrap();
                }
                BusEvent::Stop => {
                    assert!(open, "stop without start");
                    open = false;
                    transactions
                        .push(Transaction::from_frame(&frame).unwrap())
                        .unwrap();
                }
            }
        }

        assert!(!open, "transaction left open");
        transactions
    }

    /// Payloads of the recorded transactions
    pub fn payloads(&self) -> Vec<u8, 64> {
        self.transactions().iter().map(|t| t.payload).collect()
    }
}

impl BusMaster for RecordingBus {
    fn init(&mut self) {
        self.state = BusState::Idle;
    }

    fn start(&mut self) -> Result<(), BusError> {
        if self.state != BusState::Idle {
            return Err(BusError::Busy);
        }
        self.events.push(BusEvent::Start).unwrap();
        self.state = BusState::Transmitting;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), BusError> {
        self.events.push(BusEvent::Stop).unwrap();
        self.state = BusState::Idle;
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), BusError> {
        if self.fail_after == Some(self.bytes) {
            self.fail_after = None;
            return Err(BusError::NotResponding);
        }
        self.bytes += 1;
        self.events.push(BusEvent::Byte(byte)).unwrap();
        if self.nack_on == Some(byte) {
            return Err(BusError::Nack);
        }
        Ok(())
    }

    fn state(&self) -> BusState {
        self.state
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wait {
    Us(u32),
    Ms(u32),
}

/// Delay that records requested waits instead of sleeping
pub struct RecordingDelay {
    pub waits: Vec<Wait, 256>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self { waits: Vec::new() }
    }

    pub fn total_us(&self) -> u64 {
        self.waits
            .iter()
            .map(|wait| match *wait {
                Wait::Us(us) => us as u64,
                Wait::Ms(ms) => ms as u64 * 1_000,
            })
            .sum()
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.waits.push(Wait::Us(ns.div_ceil(1_000))).unwrap();
    }

    fn delay_us(&mut self, us: u32) {
        self.waits.push(Wait::Us(us)).unwrap();
    }

    fn delay_ms(&mut self, ms: u32) {
        self.waits.push(Wait::Ms(ms)).unwrap();
    }
}
