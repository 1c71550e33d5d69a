//! Character grid the renderer paints into.
//!
//! A terminal frame is a grid of [`Cell`]s, each holding one character with
//! a foreground and background color. The grid is composed in memory and
//! written to the terminal in one pass on flush.
//!
//! # Examples
//!
//! ```
//! use scrawl::cell::{Cell, CellGrid};
//! use scrawl::color::Color;
//!
//! let mut grid = CellGrid::new(10, 2);
//! grid.draw_text(0, 0, "hi", Color::Green, Color::Default);
//! assert_eq!(grid.row_text(0).trim_end(), "hi");
//! assert_eq!(grid.get(1, 0), Some(&Cell::new('i', Color::Green, Color::Default)));
//! ```

use crate::color::Color;
use unicode_width::UnicodeWidthChar;

/// Character drawn in place of anything that does not occupy exactly one
/// terminal column.
pub const REPLACEMENT_CHAR: char = '?';

/// A single terminal cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(ch: char, fg: Color, bg: Color) -> Self {
        Self { ch, fg, bg }
    }

    /// A space in default colors.
    #[must_use]
    pub const fn blank() -> Self {
        Self::new(' ', Color::Default, Color::Default)
    }

    /// The character to emit for this cell.
    ///
    /// Control characters and double-width characters would shift every
    /// following column, so they are emitted as [`REPLACEMENT_CHAR`].
    #[must_use]
    pub fn printable_char(&self) -> char {
        match self.ch.width() {
            Some(1) => self.ch,
            _ => REPLACEMENT_CHAR,
        }
    }
}

/// A fixed-size grid of cells.
#[derive(Clone, Debug)]
pub struct CellGrid {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Create a blank grid.
    ///
    /// Zero dimensions are clamped to 1.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cells: vec![Cell::blank(); usize::from(width) * usize::from(height)],
        }
    }

    /// Grid dimensions as (width, height).
    #[must_use]
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn cell_index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Get cell at position.
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.cell_index(x, y).map(|idx| &self.cells[idx])
    }

    /// Set cell at position. Out-of-bounds writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(idx) = self.cell_index(x, y) {
            self.cells[idx] = cell;
        }
    }

    /// Reset every cell to a blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::blank());
    }

    /// Resize, clearing contents. No-op if the size is unchanged.
    pub fn resize(&mut self, width: u16, height: u16) {
        let width = width.max(1);
        let height = height.max(1);
        if (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::blank(); usize::from(width) * usize::from(height)];
    }

    /// Draw a string starting at (x, y), one character per column, clipped
    /// at the right edge.
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, fg: Color, bg: Color) {
        for (col, ch) in (x..self.width).zip(text.chars()) {
            self.set(col, y, Cell::new(ch, fg, bg));
        }
    }

    /// Fill a whole row with blanks in the given colors.
    pub fn fill_row(&mut self, y: u16, fg: Color, bg: Color) {
        for x in 0..self.width {
            self.set(x, y, Cell::new(' ', fg, bg));
        }
    }

    /// Cells of one row, left to right.
    #[must_use]
    pub fn row(&self, y: u16) -> &[Cell] {
        match self.cell_index(0, y) {
            Some(start) => &self.cells[start..start + usize::from(self.width)],
            None => &[],
        }
    }

    /// The characters of one row as a string.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|cell| cell.ch).collect()
    }
}
