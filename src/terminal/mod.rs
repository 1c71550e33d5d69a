//! Terminal abstraction.
//!
//! The editor talks to the screen through [`TerminalIo`]: it reads the size,
//! blocks for the next input event, paints cells into a back buffer and
//! flushes the whole frame. [`AnsiTerminal`] drives a real terminal in raw
//! mode; [`HeadlessTerminal`] replays scripted events into an in-memory grid.

mod headless;
mod raw;
mod tty;

pub use headless::HeadlessTerminal;
pub use raw::{RawModeGuard, enable_raw_mode, is_tty, terminal_size};
pub use tty::AnsiTerminal;

use crate::cell::Cell;
use crate::error::Result;
use crate::input::Event;

/// Screen and keyboard capability used by the editor.
pub trait TerminalIo {
    /// Current size as (width, height). Re-read on every call.
    fn size(&mut self) -> (u16, u16);

    /// Block until the next input event.
    fn poll_event(&mut self) -> Result<Event>;

    /// Blank the back buffer and hide the cursor.
    fn clear(&mut self);

    /// Paint one cell of the back buffer. Out-of-bounds writes are dropped.
    fn set_cell(&mut self, x: u16, y: u16, cell: Cell);

    /// Place the hardware cursor for the next flush.
    fn set_cursor(&mut self, x: u16, y: u16);

    /// Present the back buffer.
    fn flush(&mut self) -> Result<()>;
}
