//! `OutputBuffer`: Single-syscall output buffer for ANSI sequences.

use crate::node::Color;
use std::io::Write;

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// A whole frame is accumulated here, then flushed in a single `write()`
/// syscall so the clear-and-redraw never shows up half done.
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

    /// Create a buffer sized for a typical terminal (8KB).
    pub fn new() -> Self {
        Self::with_capacity(8192)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Write `count` spaces.
    #[inline]
    pub fn write_spaces(&mut self, count: usize) {
        self.data.resize(self.data.len() + count, b' ');
    }

    /// Move cursor to column `x`, row `y` (both 1-based).
    #[inline]
    pub fn cursor_move(&mut self, x: u16, y: u16) {
        // CSI row ; col H
        let _ = write!(self.data, "\x1b[{y};{x}H");
    }

    /// Move cursor to the top-left cell.
    #[inline]
    pub fn cursor_home(&mut self) {
        self.data.extend_from_slice(b"\x1b[1;1H");
    }

    /// Show cursor.
    #[inline]
    pub fn cursor_show(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25h");
    }

    /// Set foreground color.
    #[inline]
    pub fn set_fg(&mut self, color: Color) {
        let _ = write!(self.data, "\x1b[{}m", color.fg_code());
    }

    /// Set background color.
    #[inline]
    pub fn set_bg(&mut self, color: Color) {
        let _ = write!(self.data, "\x1b[{}m", color.bg_code());
    }

    /// Restore the default foreground color.
    #[inline]
    pub fn reset_fg(&mut self) {
        self.data.extend_from_slice(b"\x1b[39m");
    }

    /// Restore the default background color.
    #[inline]
    pub fn reset_bg(&mut self) {
        self.data.extend_from_slice(b"\x1b[49m");
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Clear the entire screen and home the cursor.
    #[inline]
    pub fn clear_screen(&mut self) {
        self.data.extend_from_slice(b"\x1b[2J");
        self.cursor_home();
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
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

    fn text(out: &OutputBuffer) -> String {
        String::from_utf8(out.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn test_cursor_sequences() {
        let mut out = OutputBuffer::new();
        out.cursor_move(7, 3);
        out.cursor_show();
        out.cursor_home();
        assert_eq!(text(&out), "\x1b[3;7H\x1b[?25h\x1b[1;1H");
    }

    #[test]
    fn test_clear_screen_homes_cursor() {
        let mut out = OutputBuffer::new();
        out.clear_screen();
        assert_eq!(text(&out), "\x1b[2J\x1b[1;1H");
    }

    #[test]
    fn test_colors() {
        let mut out = OutputBuffer::new();
        out.set_bg(Color::Blue);
        out.set_fg(Color::Cyan);
        out.reset_fg();
        out.reset_bg();
        assert_eq!(text(&out), "\x1b[44m\x1b[36m\x1b[39m\x1b[49m");
    }

    #[test]
    fn test_spaces() {
        let mut out = OutputBuffer::new();
        out.write_str("─");
        out.write_spaces(2);
        assert_eq!(text(&out), "─  ");
    }

    #[test]
    fn test_flush_and_clear() {
        let mut out = OutputBuffer::with_capacity(16);
        out.write_str("abc");
        assert_eq!(out.len(), 3);

        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"abc");

        out.clear();
        assert!(out.is_empty());
    }
}
