//! Input parsing for terminal events.
//!
//! This module turns raw terminal bytes into key and resize events. It
//! understands control characters, UTF-8 text, and the legacy VT escape
//! sequences (CSI and SS3) that terminals send for navigation keys.

mod event;
mod keyboard;
mod parser;

pub use event::{Event, ResizeEvent};
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use parser::{InputParser, ParseError, ParseResult};
