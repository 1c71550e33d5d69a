//! Ordered line storage with dirty tracking.

use crate::config::Config;
use crate::highlight::{FileType, Syntax};
use crate::text::Line;
use std::io::{self, BufRead, Write};

/// How lines are expanded and classified.
///
/// Fixed for the lifetime of a buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Format {
    pub tab_size: usize,
    pub soft_tabs: bool,
    /// `None` leaves every character unclassified.
    pub syntax: Option<&'static Syntax>,
}

impl Format {
    /// Create a format. A zero tab size is treated as 1.
    #[must_use]
    pub fn new(tab_size: usize, soft_tabs: bool, syntax: Option<&'static Syntax>) -> Self {
        Self {
            tab_size: tab_size.max(1),
            soft_tabs,
            syntax,
        }
    }

    /// The format for a file of `file_type` under `config`.
    #[must_use]
    pub fn for_file(config: &Config, file_type: FileType) -> Self {
        let syntax = if config.use_highlighting {
            Syntax::for_file_type(file_type)
        } else {
            None
        };
        Self::new(config.tab_size, config.soft_tabs, syntax)
    }
}

impl Default for Format {
    fn default() -> Self {
        Self::for_file(&Config::default(), FileType::Unknown)
    }
}

/// The lines of one open file.
///
/// Never empty: a buffer always holds at least one line. Row arguments are
/// 0-based indices; out-of-range rows make every operation a no-op.
#[derive(Clone, Debug)]
pub struct Buffer {
    lines: Vec<Line>,
    format: Format,
    dirty: bool,
}

impl Buffer {
    /// A buffer holding one empty line.
    #[must_use]
    pub fn new(format: Format) -> Self {
        Self {
            lines: vec![Line::new("", &format)],
            format,
            dirty: false,
        }
    }

    /// Read a buffer line by line.
    ///
    /// Line terminators (`\n` or `\r\n`) are stripped. Invalid UTF-8 is
    /// replaced. An empty input yields one empty line.
    pub fn from_reader<R: BufRead>(mut reader: R, format: Format) -> io::Result<Self> {
        let mut lines = Vec::new();
        let mut raw = Vec::new();
        loop {
            raw.clear();
            if reader.read_until(b'\n', &mut raw)? == 0 {
                break;
            }
            if raw.last() == Some(&b'\n') {
                raw.pop();
                if raw.last() == Some(&b'\r') {
                    raw.pop();
                }
            }
            lines.push(Line::new(String::from_utf8_lossy(&raw), &format));
        }

        if lines.is_empty() {
            lines.push(Line::new("", &format));
        }

        Ok(Self {
            lines,
            format,
            dirty: false,
        })
    }

    /// Write every line followed by a newline.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for line in &self.lines {
            writer.write_all(line.text().as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()
    }

    /// Full contents as written by [`Buffer::write_to`].
    #[must_use]
    pub fn contents(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            out.push_str(line.text());
            out.push('\n');
        }
        out
    }

    #[must_use]
    pub fn format(&self) -> &Format {
        &self.format
    }

    /// Number of lines. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false; present for API symmetry with [`Buffer::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn line(&self, row: usize) -> Option<&Line> {
        self.lines.get(row)
    }

    pub fn lines(&self) -> impl ExactSizeIterator<Item = &Line> {
        self.lines.iter()
    }

    /// Unsaved changes since the last load or save.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Insert a new line before `row`. `row == len()` appends.
    ///
    /// Does not mark the buffer dirty; callers that edit do that themselves.
    pub fn insert_line(&mut self, row: usize, text: &str) {
        if row <= self.lines.len() {
            self.lines.insert(row, Line::new(text, &self.format));
        }
    }

    /// Remove the line at `row`. The last remaining line is never removed.
    pub fn remove_line(&mut self, row: usize) {
        if row < self.lines.len() && self.lines.len() > 1 {
            self.lines.remove(row);
            self.dirty = true;
        }
    }

    /// Insert a character. Returns the bytes inserted.
    pub fn insert_char(&mut self, row: usize, col: usize, c: char) -> usize {
        let format = self.format;
        let Some(line) = self.lines.get_mut(row) else {
            return 0;
        };
        let inserted = line.insert_char(col, c, &format);
        if inserted > 0 {
            self.dirty = true;
        }
        inserted
    }

    /// Remove the character starting at `col`.
    pub fn delete_char(&mut self, row: usize, col: usize) -> Option<char> {
        let format = self.format;
        let removed = self.lines.get_mut(row)?.delete_char(col, &format);
        if removed.is_some() {
            self.dirty = true;
        }
        removed
    }

    /// Break the line at `col`.
    ///
    /// At column 0 an empty line is inserted above. Otherwise the tail moves
    /// to a new line below, prefixed with the line's indentation (never more
    /// of it than lies before `col`). Returns the cursor column on the new
    /// line.
    pub fn split_line(&mut self, row: usize, col: usize) -> usize {
        let format = self.format;
        let Some(line) = self.lines.get_mut(row) else {
            return 0;
        };
        if !line.text().is_char_boundary(col.min(line.len())) {
            return 0;
        }

        if col == 0 {
            self.lines.insert(row, Line::new("", &format));
            self.dirty = true;
            return 0;
        }

        let col = col.min(line.len());
        let indent = line.indent_len().min(col);
        let tail = format!("{}{}", &line.text()[..indent], &line.text()[col..]);
        line.truncate(col, &format);
        self.lines.insert(row + 1, Line::new(tail, &format));
        self.dirty = true;
        indent
    }

    /// Append line `row` to the line above it and remove it.
    ///
    /// Returns the column where the two lines meet, or `None` on the first
    /// row.
    pub fn join_with_previous(&mut self, row: usize) -> Option<usize> {
        if row == 0 || row >= self.lines.len() {
            return None;
        }
        let format = self.format;
        let removed = self.lines.remove(row);
        let prev = &mut self.lines[row - 1];
        let col = prev.len();
        prev.append_str(removed.text(), &format);
        self.dirty = true;
        Some(col)
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new(Format::default())
    }
}
