//! A single line of text with its cached display form.

use crate::highlight::{Highlight, highlight_line};
use crate::text::Format;

/// One line of the buffer.
///
/// Holds the raw text as read from and written to disk, the text as drawn
/// (tabs expanded to the next tab stop), and one highlight tag per displayed
/// character. The display text and highlight are recomputed together on
/// every mutation, so they always describe the current raw text.
///
/// Column arguments are byte offsets into the raw text. Offsets that are out
/// of range or fall inside a multi-byte character make mutations a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Line {
    text: String,
    display: String,
    highlight: Vec<Highlight>,
}

impl Line {
    /// Create a line and compute its display form.
    #[must_use]
    pub fn new(text: impl Into<String>, format: &Format) -> Self {
        let mut line = Self {
            text: text.into(),
            display: String::new(),
            highlight: Vec::new(),
        };
        line.update(format);
        line
    }

    /// Raw text, tabs included.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text as drawn on screen.
    #[must_use]
    pub fn display_text(&self) -> &str {
        &self.display
    }

    /// One tag per character of [`Line::display_text`].
    #[must_use]
    pub fn highlight(&self) -> &[Highlight] {
        &self.highlight
    }

    /// Length of the raw text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Recompute the display text and highlight from the raw text.
    pub fn update(&mut self, format: &Format) {
        self.display.clear();
        let mut col = 0;
        for c in self.text.chars() {
            if c == '\t' {
                let stop = format.tab_size - col % format.tab_size;
                self.display.extend(std::iter::repeat_n(' ', stop));
                col += stop;
            } else {
                self.display.push(c);
                col += 1;
            }
        }

        self.highlight = match format.syntax {
            Some(syntax) => highlight_line(&self.display, syntax),
            None => vec![Highlight::Normal; col],
        };
    }

    /// Insert `c` at byte offset `at`.
    ///
    /// With soft tabs a tab is inserted as `tab_size` spaces. Returns the
    /// number of bytes inserted, which is how far the cursor should advance.
    pub fn insert_char(&mut self, at: usize, c: char, format: &Format) -> usize {
        if !self.text.is_char_boundary(at) {
            return 0;
        }

        let inserted = if c == '\t' && format.soft_tabs {
            self.text.insert_str(at, &" ".repeat(format.tab_size));
            format.tab_size
        } else {
            self.text.insert(at, c);
            c.len_utf8()
        };
        self.update(format);
        inserted
    }

    /// Remove the character starting at byte offset `at`.
    pub fn delete_char(&mut self, at: usize, format: &Format) -> Option<char> {
        if at >= self.text.len() || !self.text.is_char_boundary(at) {
            return None;
        }
        let removed = self.text.remove(at);
        self.update(format);
        Some(removed)
    }

    /// Append text to the end of the line.
    pub fn append_str(&mut self, s: &str, format: &Format) {
        self.text.push_str(s);
        self.update(format);
    }

    /// Cut the line at byte offset `at`, keeping the head.
    pub(crate) fn truncate(&mut self, at: usize, format: &Format) {
        if self.text.is_char_boundary(at) {
            self.text.truncate(at);
            self.update(format);
        }
    }

    /// Display column of byte offset `col`, accounting for tab stops.
    ///
    /// Offsets past the end are treated as the end of the line.
    #[must_use]
    pub fn display_col(&self, col: usize, tab_size: usize) -> usize {
        let col = self.floor_char_boundary(col);
        self.text[..col].chars().fold(0, |delta, c| {
            if c == '\t' {
                delta + tab_size - delta % tab_size
            } else {
                delta + 1
            }
        })
    }

    /// Number of leading spaces and tabs.
    #[must_use]
    pub fn indent_len(&self) -> usize {
        self.text
            .bytes()
            .take_while(|&b| b == b' ' || b == b'\t')
            .count()
    }

    /// Largest char boundary not after `col`.
    #[must_use]
    pub fn floor_char_boundary(&self, col: usize) -> usize {
        let mut col = col.min(self.text.len());
        while !self.text.is_char_boundary(col) {
            col -= 1;
        }
        col
    }

    /// Start of the character that ends at `col`.
    #[must_use]
    pub fn prev_char_boundary(&self, col: usize) -> usize {
        let col = self.floor_char_boundary(col);
        self.text[..col]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    /// End of the character that starts at `col`.
    #[must_use]
    pub fn next_char_boundary(&self, col: usize) -> usize {
        let col = self.floor_char_boundary(col);
        self.text[col..]
            .chars()
            .next()
            .map_or(col, |c| col + c.len_utf8())
    }
}
