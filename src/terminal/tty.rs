//! Real terminal backed by stdin/stdout.

use crate::ansi::{self, AnsiWriter};
use crate::cell::{Cell, CellGrid};
use crate::error::{Error, Result};
use crate::input::{Event, InputParser, KeyCode, KeyEvent, ParseError, ResizeEvent};
use crate::terminal::{RawModeGuard, TerminalIo, enable_raw_mode, is_tty, terminal_size};
use std::io::{self, Read, Stdout};
use tracing::{debug, info, trace};

/// A terminal in raw mode on the alternate screen.
///
/// Frames are composed in a [`CellGrid`] and written in full on every
/// [`flush`](TerminalIo::flush). Dropping the terminal leaves the alternate
/// screen and restores the original terminal mode.
pub struct AnsiTerminal {
    writer: AnsiWriter<Stdout>,
    grid: CellGrid,
    cursor: Option<(u16, u16)>,
    parser: InputParser,
    pending: Vec<u8>,
    held_partial: bool,
    _raw_mode: RawModeGuard,
}

impl AnsiTerminal {
    /// Take over the controlling terminal.
    ///
    /// Fails with [`Error::TerminalInit`] when stdin is not a terminal or
    /// raw mode cannot be entered.
    pub fn new() -> Result<Self> {
        if !is_tty(&io::stdin()) {
            return Err(Error::TerminalInit(io::Error::other("stdin is not a terminal")));
        }
        let raw_mode = enable_raw_mode().map_err(Error::TerminalInit)?;
        let (width, height) = terminal_size().map_err(Error::TerminalInit)?;

        let mut writer = AnsiWriter::new(io::stdout());
        writer.write_str(ansi::ALT_SCREEN_ON);
        writer.write_str(ansi::CLEAR_SCREEN);
        writer.write_str(ansi::CURSOR_HOME);
        writer.flush().map_err(Error::TerminalInit)?;

        info!(target: "scrawl::terminal", width, height, "terminal initialized");

        Ok(Self {
            writer,
            grid: CellGrid::new(width, height),
            cursor: None,
            parser: InputParser::new(),
            pending: Vec::with_capacity(64),
            held_partial: false,
            _raw_mode: raw_mode,
        })
    }

    /// Parse the next complete event out of the pending bytes.
    fn next_pending_event(&mut self) -> Option<Event> {
        loop {
            match self.parser.parse(&self.pending) {
                Ok((event, consumed)) => {
                    self.pending.drain(..consumed);
                    return Some(event);
                }
                Err(ParseError::Empty | ParseError::Incomplete) => return None,
                Err(err) => {
                    trace!(target: "scrawl::terminal", ?err, "skipping input");
                    let skip = err.skip_len().min(self.pending.len());
                    self.pending.drain(..skip);
                }
            }
        }
    }

    fn cleanup(&mut self) -> io::Result<()> {
        self.writer.reset();
        self.writer.write_str(ansi::CURSOR_SHOW);
        self.writer.write_str(ansi::ALT_SCREEN_OFF);
        self.writer.flush()
    }
}

/// Settle the pending bytes after a read timed out.
///
/// A bare ESC is the Escape key. A truncated UTF-8 character survives one
/// timeout so the rest of it can still arrive; anything else is dropped.
fn flush_timed_out(pending: &mut Vec<u8>, held_partial: &mut bool) -> Option<Event> {
    if pending.first() == Some(&0x1b) {
        pending.remove(0);
        *held_partial = false;
        return Some(KeyEvent::key(KeyCode::Esc).into());
    }
    if !*held_partial && is_partial_utf8(pending) {
        *held_partial = true;
        return None;
    }
    if !pending.is_empty() {
        trace!(target: "scrawl::terminal", bytes = pending.len(), "dropping stale input");
    }
    pending.clear();
    *held_partial = false;
    None
}

fn is_partial_utf8(bytes: &[u8]) -> bool {
    matches!(
        std::str::from_utf8(bytes),
        Err(err) if err.valid_up_to() == 0 && err.error_len().is_none()
    )
}

/// A resize event when the window no longer matches the painted grid.
fn resize_event(painted: (u16, u16), current: io::Result<(u16, u16)>) -> Option<Event> {
    match current {
        Ok((width, height)) if (width, height) != painted => {
            Some(ResizeEvent::new(width, height).into())
        }
        _ => None,
    }
}

impl TerminalIo for AnsiTerminal {
    fn size(&mut self) -> (u16, u16) {
        if let Ok((width, height)) = terminal_size() {
            if (width, height) != self.grid.size() {
                debug!(target: "scrawl::terminal", width, height, "terminal resized");
            }
            self.grid.resize(width, height);
        }
        self.grid.size()
    }

    fn poll_event(&mut self) -> Result<Event> {
        let mut buf = [0u8; 256];
        loop {
            if let Some(event) = self.next_pending_event() {
                return Ok(event);
            }

            let n = match io::stdin().read(&mut buf) {
                Ok(n) => n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            };

            if n == 0 {
                if let Some(event) = flush_timed_out(&mut self.pending, &mut self.held_partial) {
                    return Ok(event);
                }
                if let Some(event) = resize_event(self.grid.size(), terminal_size()) {
                    debug!(target: "scrawl::terminal", ?event, "resize detected");
                    return Ok(event);
                }
                continue;
            }

            self.held_partial = false;
            self.pending.extend_from_slice(&buf[..n]);
        }
    }

    fn clear(&mut self) {
        self.grid.clear();
        self.cursor = None;
    }

    fn set_cell(&mut self, x: u16, y: u16, cell: Cell) {
        self.grid.set(x, y, cell);
    }

    fn set_cursor(&mut self, x: u16, y: u16) {
        self.cursor = Some((x, y));
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.write_frame(&self.grid, self.cursor);
        self.writer.flush()?;
        Ok(())
    }
}

impl Drop for AnsiTerminal {
    fn drop(&mut self) {
        let _ = self.cleanup();
        debug!(target: "scrawl::terminal", "terminal restored");
    }
}
