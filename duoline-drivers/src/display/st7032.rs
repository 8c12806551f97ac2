//! ST7032i character LCD driver
//!
//! Driver for 8x2 ST7032i-based LCD modules via I2C. The controller
//! must run its power-up sequence before any other instruction; until
//! then every display operation is refused with
//! [`DisplayError::NotReady`] and nothing is sent.

use core::fmt;

use duoline_core::command::{self, cmd, InstructionTable, Line};
use duoline_core::init::{init_sequence, InitStep};
use duoline_core::state::{ControllerState, Event};
use duoline_core::traits::CharacterDisplay;
use duoline_core::DisplayConfig;
use duoline_hal::BusMaster;
use embedded_hal::delay::DelayNs;

use super::{DisplayError, DisplayTransport};

/// ST7032i LCD driver
pub struct St7032<B, D> {
    transport: DisplayTransport<B, D>,
    config: DisplayConfig,
    state: ControllerState,
}

impl<B, D> St7032<B, D>
where
    B: BusMaster,
    D: DelayNs,
{
    /// Create a new driver
    ///
    /// `bus` must already be initialized. The controller is left
    /// untouched until [`init`](Self::init).
    pub fn new(bus: B, delay: D, config: DisplayConfig) -> Self {
        Self {
            transport: DisplayTransport::new(bus, delay, config.address, config.timing),
            config,
            state: ControllerState::Uninitialized,
        }
    }

    /// Run the power-up sequence
    ///
    /// Safe to call again on a running display; the full sequence is
    /// repeated. On a bus failure the controller is considered
    /// uninitialized again.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        info!("st7032: power-up sequence");
        self.advance(Event::InitStarted);

        for step in init_sequence(&self.config) {
            let result = match step {
                InitStep::WaitMs(ms) => {
                    debug!("st7032: wait {=u32} ms", ms);
                    self.transport.delay_ms(ms);
                    Ok(())
                }
                InitStep::Command(c) => {
                    debug!("st7032: init command {=u8:#x}", c);
                    self.transport.send_command(c)
                }
            };

            if let Err(e) = result {
                error!("st7032: power-up aborted: {}", e);
                self.advance(Event::InitFailed);
                return Err(e.into());
            }
        }

        self.advance(Event::InitCompleted);
        info!("st7032: ready");
        Ok(())
    }

    fn advance(&mut self, event: Event) {
        self.state = self.state.transition(event);
    }

    fn ensure_ready(&self) -> Result<(), DisplayError> {
        if self.state.is_ready() {
            Ok(())
        } else {
            Err(DisplayError::NotReady)
        }
    }

    /// Current controller state
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Active configuration
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Send a raw set-address command
    ///
    /// `position` is the full instruction byte, e.g. [`cmd::LINE_ONE`]
    /// or [`cmd::LINE_TWO`]. It is not checked against the panel size.
    pub fn set_cursor(&mut self, position: u8) -> Result<(), DisplayError> {
        self.command(position)
    }

    /// Move the cursor to `column` on `line`
    pub fn move_to(&mut self, line: Line, column: u8) -> Result<(), DisplayError> {
        self.command(line.address_command(column))
    }

    /// Return the cursor to the start of line one without clearing
    pub fn home(&mut self) -> Result<(), DisplayError> {
        self.command(cmd::RETURN_HOME)
    }

    /// Clear the display
    pub fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(cmd::CLEAR_DISPLAY)?;
        self.transport.delay_ms(self.config.timing.clear_settle_ms);
        Ok(())
    }

    /// Turn display, cursor and cursor blink on or off
    pub fn set_display(
        &mut self,
        display: bool,
        cursor: bool,
        blink: bool,
    ) -> Result<(), DisplayError> {
        self.command(command::display_control(display, cursor, blink))
    }

    /// Set contrast (0-63)
    ///
    /// Values above 63 are clamped. The contrast bits live in the
    /// extended instruction table, so this switches tables and back.
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
        self.ensure_ready()?;
        let panel = self.config.panel.with_contrast(contrast);

        self.transport
            .send_command(command::function_set(InstructionTable::Extended))?;
        self.transport.send_command(panel.contrast_low_command())?;
        self.transport.send_command(panel.power_command())?;
        self.transport
            .send_command(command::function_set(InstructionTable::Normal))?;

        self.config.panel = panel;
        Ok(())
    }

    /// Write bytes at the current cursor position
    ///
    /// No wrap handling: writing past the end of a line continues at
    /// whatever address the controller's counter reaches.
    pub fn print(&mut self, text: &[u8]) -> Result<(), DisplayError> {
        self.ensure_ready()?;
        for &byte in text {
            self.transport.send_data(byte)?;
        }
        Ok(())
    }

    /// Write a string at the current cursor position
    pub fn print_str(&mut self, text: &str) -> Result<(), DisplayError> {
        self.print(text.as_bytes())
    }

    fn command(&mut self, command: u8) -> Result<(), DisplayError> {
        self.ensure_ready()?;
        self.transport.send_command(command)?;
        Ok(())
    }

    /// Get access to the transport
    pub fn transport(&self) -> &DisplayTransport<B, D> {
        &self.transport
    }

    /// Release the bus and delay
    pub fn release(self) -> (B, D) {
        self.transport.release()
    }
}

impl<B, D> CharacterDisplay for St7032<B, D>
where
    B: BusMaster,
    D: DelayNs,
{
    type Error = DisplayError;

    fn init(&mut self) -> Result<(), DisplayError> {
        St7032::init(self)
    }

    fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    fn set_cursor(&mut self, position: u8) -> Result<(), DisplayError> {
        St7032::set_cursor(self, position)
    }

    fn print(&mut self, text: &[u8]) -> Result<(), DisplayError> {
        St7032::print(self, text)
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        St7032::clear(self)
    }
}

impl<B, D> fmt::Write for St7032<B, D>
where
    B: BusMaster,
    D: DelayNs,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.print_str(s).map_err(|_| fmt::Error)
    }
}
