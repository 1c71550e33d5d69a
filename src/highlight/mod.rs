//! Lexical syntax highlighting.
//!
//! Each [`Line`](crate::text::Line) carries one [`Highlight`] tag per displayed
//! character. Tags are recomputed by [`highlight_line`] whenever the line's
//! text changes, so a keystroke only ever rescans the lines it touched.
//!
//! The scanner is lexical, not syntactic: it knows keywords, numbers, quoted
//! strings and single-line comments. Block comments are declared in the
//! [`Syntax`] tables but the scanner does not apply them.

mod filetype;
pub mod languages;
mod scanner;
mod syntax;
pub mod token;

pub use filetype::FileType;
pub use scanner::{highlight_line, is_separator};
pub use syntax::Syntax;
pub use token::Highlight;
