//! `scrawl` - a small terminal text editor
//!
//! Loads one file into a line buffer, paints it with a title bar, a status
//! bar and a syntax-highlighted body, and edits it from the keyboard until
//! the user quits.
//!
//! The building blocks, leaves first:
//!
//! - [`highlight`]: syntax tables, file-type detection and the line scanner
//! - [`text`]: [`Line`] and [`Buffer`], with display text and highlight
//!   cached per line
//! - [`view`]: cursor movement and viewport scrolling
//! - [`render`]: paints a frame through any [`TerminalIo`]
//! - [`editor`]: the event loop, file I/O and key bindings
//! - [`session`]: what a host calls to edit a file
//!
//! # Examples
//!
//! ```
//! use scrawl::config::Config;
//! use scrawl::editor::{Editor, ExitStatus};
//! use scrawl::terminal::HeadlessTerminal;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let mut editor = Editor::open(dir.path().join("hello.c"), Config::default());
//!
//! let mut terminal = HeadlessTerminal::new(40, 6);
//! terminal.type_text("int x;");
//! assert_eq!(editor.run(&mut terminal).unwrap(), ExitStatus::Unsaved);
//! assert!(terminal.row_text(1).starts_with("int x;"));
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (required for termios FFI)
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::module_name_repetitions)] // Allow editor::ExitStatus etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::must_use_candidate)] // Accessors are obvious
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod ansi;
pub mod cell;
pub mod color;
pub mod config;
pub mod editor;
pub mod error;
pub mod highlight;
pub mod input;
pub mod render;
pub mod session;
pub mod terminal;
pub mod text;
pub mod view;

/// Name shown in the title bar.
pub const PROGRAM_NAME: &str = "scrawl";

/// Version shown in the title bar.
pub const PROGRAM_VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export core types at crate root
pub use cell::{Cell, CellGrid};
pub use color::Color;
pub use config::Config;
pub use editor::{Editor, ExitStatus};
pub use error::{Error, Result};
pub use highlight::{FileType, Highlight, Syntax};
pub use session::Session;
pub use text::{Buffer, Format, Line};
pub use view::{Cursor, CursorMove, Viewport};

// Re-export input types
pub use input::{Event, InputParser, KeyCode, KeyEvent, KeyModifiers};

// Re-export terminal types
pub use terminal::{AnsiTerminal, HeadlessTerminal, RawModeGuard, TerminalIo};
