//! Terminal color palette.
//!
//! The editor paints with the eight basic ANSI colors plus the terminal's
//! own default. Every terminal supports these, so no capability detection
//! is needed.

use std::fmt;

/// A basic ANSI color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    /// The terminal's configured default color.
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// All colors, in ANSI index order after `Default`.
    pub const ALL: [Self; 9] = [
        Self::Default,
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// ANSI palette index (0-7), or `None` for the default color.
    #[must_use]
    pub const fn ansi_index(self) -> Option<u8> {
        match self {
            Self::Default => None,
            Self::Black => Some(0),
            Self::Red => Some(1),
            Self::Green => Some(2),
            Self::Yellow => Some(3),
            Self::Blue => Some(4),
            Self::Magenta => Some(5),
            Self::Cyan => Some(6),
            Self::White => Some(7),
        }
    }

    /// SGR parameter selecting this color as foreground.
    #[must_use]
    pub const fn fg_sgr(self) -> u8 {
        match self.ansi_index() {
            Some(index) => 30 + index,
            None => 39,
        }
    }

    /// SGR parameter selecting this color as background.
    #[must_use]
    pub const fn bg_sgr(self) -> u8 {
        match self.ansi_index() {
            Some(index) => 40 + index,
            None => 49,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Default => "default",
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        };
        f.write_str(name)
    }
}
