//! Buffered ANSI output writer with color tracking.

use crate::ansi;
use crate::cell::{Cell, CellGrid};
use crate::color::Color;
use std::io::{self, Write};

/// Buffered writer that tracks the active colors to skip redundant SGR
/// sequences.
///
/// Output accumulates in memory until [`AnsiWriter::flush`].
pub struct AnsiWriter<W: Write> {
    writer: W,
    buffer: Vec<u8>,
    current: Option<(Color, Color)>,
}

impl<W: Write> AnsiWriter<W> {
    /// Create a new ANSI writer wrapping the given output.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: Vec::with_capacity(8192),
            current: None,
        }
    }

    /// Write a raw string to the buffer.
    pub fn write_str(&mut self, s: &str) {
        self.buffer.extend_from_slice(s.as_bytes());
    }

    /// Move the cursor to a 0-based position.
    pub fn move_cursor(&mut self, row: u16, col: u16) {
        let _ = ansi::write_cursor_position(&mut self.buffer, row, col);
    }

    /// Set colors if different from the current ones.
    pub fn set_colors(&mut self, fg: Color, bg: Color) {
        if self.current != Some((fg, bg)) {
            let _ = ansi::write_colors(&mut self.buffer, fg, bg);
            self.current = Some((fg, bg));
        }
    }

    /// Write a cell at the current cursor position.
    pub fn write_cell(&mut self, cell: &Cell) {
        self.set_colors(cell.fg, cell.bg);
        let mut buf = [0u8; 4];
        let s = cell.printable_char().encode_utf8(&mut buf);
        self.buffer.extend_from_slice(s.as_bytes());
    }

    /// Write a whole grid, then place the cursor.
    ///
    /// Every row is positioned explicitly so a miscounted character cannot
    /// shift the rows below it.
    pub fn write_frame(&mut self, grid: &CellGrid, cursor: Option<(u16, u16)>) {
        self.write_str(ansi::sync::BEGIN);
        self.write_str(ansi::CURSOR_HIDE);
        for y in 0..grid.height() {
            self.move_cursor(y, 0);
            for cell in grid.row(y) {
                self.write_cell(cell);
            }
        }
        self.reset();
        if let Some((x, y)) = cursor {
            self.move_cursor(y, x);
            self.write_str(ansi::CURSOR_SHOW);
        }
        self.write_str(ansi::sync::END);
    }

    /// Reset all ANSI attributes.
    pub fn reset(&mut self) {
        self.write_str(ansi::RESET);
        self.current = None;
    }

    /// Flush the buffer to the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.write_all(&self.buffer)?;
        self.buffer.clear();
        self.writer.flush()
    }
}
