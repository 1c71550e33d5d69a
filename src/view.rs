//! Cursor movement and viewport scrolling.
//!
//! The cursor row is 1-based and the column is a byte offset into the raw
//! line text. The screen reserves its first row for the title bar and its
//! last for the status bar, so a terminal of height `h` shows `h - 2` buffer
//! rows.

use crate::text::Buffer;

/// Cursor position in the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    /// Line number, starting at 1.
    pub row: usize,
    /// Byte offset into the line's raw text.
    pub col: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self { row: 1, col: 0 }
    }
}

impl Cursor {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// 0-based index of the cursor's line.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.row.saturating_sub(1)
    }
}

/// A cursor movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CursorMove {
    Up,
    Down,
    Left,
    Right,
    /// End of indentation, or column 0 if already there.
    LineStart,
    LineEnd,
    PageUp,
    PageDown,
}

/// The visible part of the buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Buffer lines scrolled off the top.
    pub row_offset: usize,
    /// Display columns scrolled off the left.
    pub col_offset: usize,
    /// Terminal width in columns.
    pub width: usize,
    /// Terminal height in rows, bars included.
    pub height: usize,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            width,
            height,
        }
    }

    /// Number of rows available to buffer text.
    #[must_use]
    pub const fn body_height(&self) -> usize {
        self.height.saturating_sub(2)
    }

    /// Adjust the offsets so the cursor is on screen.
    ///
    /// `row` is the 1-based cursor row and `display_col` its tab-expanded
    /// column.
    pub fn scroll_to(&mut self, row: usize, display_col: usize) {
        if row.saturating_sub(1) < self.row_offset {
            self.row_offset = row.saturating_sub(1);
        }
        if row + 2 >= self.row_offset + self.height {
            self.row_offset = (row + 2).saturating_sub(self.height);
        }

        if display_col < self.col_offset {
            self.col_offset = display_col;
        }
        if display_col >= self.col_offset + self.width {
            self.col_offset = (display_col + 1).saturating_sub(self.width);
        }
    }
}

/// Apply a movement to the cursor.
///
/// After every move the column is clamped to the current line and snapped
/// back to a character boundary. Page-down also pushes the viewport down a
/// full screen; the next [`Viewport::scroll_to`] pulls it back into range.
pub fn move_cursor(cursor: &mut Cursor, viewport: &mut Viewport, buffer: &Buffer, step: CursorMove) {
    let rows = buffer.len();
    let page = viewport.height.saturating_sub(2);
    let line_len = |row: usize| buffer.line(row - 1).map_or(0, |line| line.len());

    match step {
        CursorMove::Up => {
            if cursor.row > 1 {
                cursor.row -= 1;
            }
        }
        CursorMove::Down => {
            if cursor.row < rows {
                cursor.row += 1;
            }
        }
        CursorMove::Left => {
            if cursor.col != 0 {
                if let Some(line) = buffer.line(cursor.index()) {
                    cursor.col = line.prev_char_boundary(cursor.col);
                }
            } else if cursor.row > 1 {
                cursor.row -= 1;
                cursor.col = line_len(cursor.row);
            }
        }
        CursorMove::Right => {
            let len = line_len(cursor.row);
            if cursor.col < len {
                if let Some(line) = buffer.line(cursor.index()) {
                    cursor.col = line.next_char_boundary(cursor.col);
                }
            } else if cursor.col == len && cursor.row != rows {
                cursor.col = 0;
                cursor.row += 1;
            }
        }
        CursorMove::LineStart => {
            let indent = buffer.line(cursor.index()).map_or(0, |line| line.indent_len());
            cursor.col = if cursor.col == indent { 0 } else { indent };
        }
        CursorMove::LineEnd => cursor.col = line_len(cursor.row),
        CursorMove::PageUp => {
            if viewport.height > cursor.row {
                cursor.row = 1;
            } else {
                cursor.row = cursor.row.saturating_sub(page).max(1);
            }
        }
        CursorMove::PageDown => {
            cursor.row += page;
            viewport.row_offset += viewport.height;
            if cursor.row > rows {
                cursor.row = rows.saturating_sub(1).max(1);
            }
        }
    }

    if let Some(line) = buffer.line(cursor.index()) {
        cursor.col = line.floor_char_boundary(cursor.col);
    }
}
