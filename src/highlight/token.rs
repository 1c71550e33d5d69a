//! Highlight classification tags.

use crate::color::Color;

/// Classification of a single displayed character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Highlight {
    #[default]
    Normal,
    Keyword,
    Number,
    String,
    Comment,
}

impl Highlight {
    /// Foreground color used to paint this classification.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Normal => Color::Default,
            Self::Keyword => Color::Red,
            Self::Number => Color::Blue,
            Self::String => Color::Green,
            Self::Comment => Color::Cyan,
        }
    }
}
