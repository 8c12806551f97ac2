//! Character display trait

use crate::command::{Line, COLUMNS, LINES};

/// Character LCD driven by raw controller instructions
///
/// Text is a byte sequence in the controller's character ROM encoding;
/// ASCII maps to itself on the ST7032.
pub trait CharacterDisplay {
    /// Error type for display operations
    type Error;

    /// Run the controller power-up sequence
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Check if the controller accepts display operations
    fn is_ready(&self) -> bool;

    /// Send a raw set-address command
    ///
    /// No validation against the panel geometry is performed.
    fn set_cursor(&mut self, position: u8) -> Result<(), Self::Error>;

    /// Write bytes at the current address
    ///
    /// No line wrap handling: bytes past the end of a line go wherever
    /// the controller's address counter takes them.
    fn print(&mut self, text: &[u8]) -> Result<(), Self::Error>;

    /// Clear the display and return the cursor to line one
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Get the display dimensions
    ///
    /// Returns (columns, lines) in character units
    fn dimensions(&self) -> (u8, u8) {
        (COLUMNS, LINES)
    }
}

/// Helper trait for line-oriented output
pub trait CharacterDisplayExt: CharacterDisplay {
    /// Replace a whole line
    ///
    /// Text longer than the line is truncated; shorter text is padded
    /// with spaces so stale characters are overwritten.
    fn write_line(&mut self, line: Line, text: &[u8]) -> Result<(), Self::Error> {
        let (columns, _) = self.dimensions();
        let mut buf = [b' '; COLUMNS as usize];
        let width = (columns as usize).min(buf.len());
        let len = text.len().min(width);
        buf[..len].copy_from_slice(&text[..len]);

        self.set_cursor(line.address_command(0))?;
        self.print(&buf[..width])
    }
}

// Blanket implementation for all CharacterDisplay types
impl<T: CharacterDisplay> CharacterDisplayExt for T {}
