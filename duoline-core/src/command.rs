//! ST7032 instruction set
//!
//! The controller has two instruction tables selected by the IS bit of
//! function set. Oscillator, contrast, power and follower settings are
//! only reachable from the extended table; cursor shift and CGRAM
//! addressing only from the normal one.
//!
//! Builders mask their arguments to the width of the field they fill.

/// Fixed commands
pub mod cmd {
    /// Clear display and return the address counter to 0
    pub const CLEAR_DISPLAY: u8 = 0x01;
    /// Return the address counter to 0 without clearing DDRAM
    pub const RETURN_HOME: u8 = 0x02;
    /// DDRAM address of the first character on line one
    pub const LINE_ONE: u8 = 0x80;
    /// DDRAM address of the first character on line two
    pub const LINE_TWO: u8 = 0xC0;
}

/// Characters per line addressed by this driver
pub const COLUMNS: u8 = 8;

/// Lines on the panel
pub const LINES: u8 = 2;

/// Instruction table selected by function set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InstructionTable {
    /// IS = 0
    Normal,
    /// IS = 1
    Extended,
}

/// LCD bias selected by the oscillator command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bias {
    /// BS = 0
    OneFifth,
    /// BS = 1
    OneQuarter,
}

/// Display line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    One,
    Two,
}

impl Line {
    /// DDRAM address of column 0
    pub const fn base(self) -> u8 {
        match self {
            Line::One => 0x00,
            Line::Two => 0x40,
        }
    }

    /// Set-address command for `column` on this line
    pub const fn address_command(self, column: u8) -> u8 {
        set_ddram_address(self.base() + (column & 0x3F))
    }
}

/// Function set: 8-bit interface, 2 lines, normal height
pub const fn function_set(table: InstructionTable) -> u8 {
    let is = match table {
        InstructionTable::Normal => 0,
        InstructionTable::Extended => 1,
    };
    // DL = 1, N = 1, DH = 0
    0x20 | 0x10 | 0x08 | is
}

/// Display on/off control
pub const fn display_control(display: bool, cursor: bool, blink: bool) -> u8 {
    0x08 | (display as u8) << 2 | (cursor as u8) << 1 | blink as u8
}

/// Set DDRAM address
pub const fn set_ddram_address(address: u8) -> u8 {
    0x80 | (address & 0x7F)
}

/// Internal oscillator frequency (extended table)
pub const fn oscillator(bias: Bias, frequency: u8) -> u8 {
    let bs = match bias {
        Bias::OneFifth => 0,
        Bias::OneQuarter => 1,
    };
    0x10 | bs << 3 | (frequency & 0x07)
}

/// Contrast set, low nibble C3..C0 (extended table)
pub const fn contrast_low(contrast: u8) -> u8 {
    0x70 | (contrast & 0x0F)
}

/// Power/icon control and contrast C5..C4 (extended table)
pub const fn power_icon_contrast(icon: bool, booster: bool, contrast: u8) -> u8 {
    0x50 | (icon as u8) << 3 | (booster as u8) << 2 | ((contrast >> 4) & 0x03)
}

/// Follower control (extended table)
pub const fn follower_control(on: bool, ratio: u8) -> u8 {
    0x60 | (on as u8) << 3 | (ratio & 0x07)
}
