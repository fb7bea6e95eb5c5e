//! `OutputBuffer`: Single-syscall output buffer for ANSI sequences.

use std::io::Write;

/// Pre-allocated buffer for building one frame of escape sequences.
///
/// All output is accumulated here, then handed to the terminal in a single
/// write to prevent flickering.
#[derive(Debug, Clone)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical terminal (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse. Capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Write raw bytes.
    #[inline]
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Write a single byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.data.push(byte);
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Move the cursor to a 0-indexed (row, col); emitted 1-indexed.
    #[inline]
    pub fn cursor_move(&mut self, row: usize, col: usize) {
        // Writing into a Vec cannot fail.
        let _ = write!(self.data, "\x1b[{};{}H", row + 1, col + 1);
    }

    /// Move the cursor to the top-left corner.
    #[inline]
    pub fn cursor_home(&mut self) {
        self.data.extend_from_slice(b"\x1b[H");
    }

    /// Hide cursor.
    #[inline]
    pub fn cursor_hide(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25l");
    }

    /// Show cursor.
    #[inline]
    pub fn cursor_show(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25h");
    }

    /// Set the foreground to an SGR color code (31..=37, 39).
    #[inline]
    pub fn set_color(&mut self, code: u8) {
        let _ = write!(self.data, "\x1b[{code}m");
    }

    /// Switch to inverse video.
    #[inline]
    pub fn invert(&mut self) {
        self.data.extend_from_slice(b"\x1b[7m");
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[m");
    }

    /// Erase from the cursor to the end of the line.
    #[inline]
    pub fn clear_line(&mut self) {
        self.data.extend_from_slice(b"\x1b[K");
    }

    /// Carriage return plus line feed (raw mode does no translation).
    #[inline]
    pub fn newline(&mut self) {
        self.data.extend_from_slice(b"\r\n");
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_move_is_one_indexed() {
        let mut out = OutputBuffer::new();
        out.cursor_move(0, 0);
        out.cursor_move(4, 11);
        assert_eq!(out.as_bytes(), b"\x1b[1;1H\x1b[5;12H");
    }

    #[test]
    fn test_color_and_clear() {
        let mut out = OutputBuffer::new();
        out.set_color(33);
        out.write_str("if");
        out.set_color(39);
        out.clear_line();
        assert_eq!(out.as_bytes(), b"\x1b[33mif\x1b[39m\x1b[K");
        out.clear();
        assert!(out.as_bytes().is_empty());
    }

    #[test]
    fn test_capacity_survives_clear() {
        let mut out = OutputBuffer::with_capacity(64);
        out.write_raw(b"abc");
        out.write_byte(b'!');
        assert_eq!(out.as_bytes(), b"abc!");
        out.clear();
        assert!(out.as_bytes().is_empty());
        assert!(out.data.capacity() >= 64);
    }
}
