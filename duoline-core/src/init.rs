//! ST7032 power-up sequence
//!
//! The order is mandated by the controller: oscillator, contrast, power
//! and follower settings need the extended instruction table, the
//! booster needs time to stabilize before the display is switched on,
//! and the standard instructions are only valid after returning to the
//! normal table. Deviating produces a blank or garbled panel, never an
//! error the driver could detect.

use crate::command::{self, cmd, InstructionTable};
use crate::config::DisplayConfig;

/// Number of steps in the power-up sequence
pub const INIT_STEPS: usize = 12;

/// Number of commands sent by the power-up sequence
pub const INIT_COMMANDS: usize = 9;

/// One step of the power-up sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitStep {
    /// Busy-wait for the given number of milliseconds
    WaitMs(u32),
    /// Send an instruction
    Command(u8),
}

impl InitStep {
    pub fn command(&self) -> Option<u8> {
        match self {
            InitStep::Command(c) => Some(*c),
            InitStep::WaitMs(_) => None,
        }
    }
}

/// Build the power-up sequence for `config`
pub const fn init_sequence(config: &DisplayConfig) -> [InitStep; INIT_STEPS] {
    let timing = &config.timing;
    let panel = &config.panel;

    [
        InitStep::WaitMs(timing.power_up_ms),
        InitStep::Command(command::function_set(InstructionTable::Normal)),
        InitStep::Command(command::function_set(InstructionTable::Extended)),
        InitStep::Command(panel.oscillator_command()),
        InitStep::Command(panel.contrast_low_command()),
        InitStep::Command(panel.power_command()),
        InitStep::Command(panel.follower_command()),
        InitStep::WaitMs(timing.stabilize_ms),
        InitStep::Command(command::function_set(InstructionTable::Normal)),
        InitStep::Command(command::display_control(true, false, false)),
        InitStep::Command(cmd::CLEAR_DISPLAY),
        InitStep::WaitMs(timing.clear_settle_ms),
    ]
}
