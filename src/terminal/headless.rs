//! In-memory terminal driven by a script of events.

use crate::cell::{Cell, CellGrid};
use crate::error::Result;
use crate::input::{Event, KeyCode, KeyEvent};
use crate::terminal::TerminalIo;
use std::collections::VecDeque;

/// A terminal with no device behind it.
///
/// Events are served from a queue; once it runs dry every poll returns
/// Ctrl+X so an editor loop always terminates. Each flush copies the back
/// buffer to the visible screen, which tests inspect with
/// [`HeadlessTerminal::row_text`].
#[derive(Clone, Debug)]
pub struct HeadlessTerminal {
    back: CellGrid,
    screen: CellGrid,
    cursor: Option<(u16, u16)>,
    screen_cursor: Option<(u16, u16)>,
    events: VecDeque<Event>,
    frames: usize,
}

impl HeadlessTerminal {
    /// A blank terminal of the given size.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            back: CellGrid::new(width, height),
            screen: CellGrid::new(width, height),
            cursor: None,
            screen_cursor: None,
            events: VecDeque::new(),
            frames: 0,
        }
    }

    /// A terminal that will replay `events`.
    #[must_use]
    pub fn with_events(width: u16, height: u16, events: impl IntoIterator<Item = Event>) -> Self {
        let mut terminal = Self::new(width, height);
        terminal.events.extend(events);
        terminal
    }

    pub fn push_event(&mut self, event: impl Into<Event>) {
        self.events.push_back(event.into());
    }

    /// Queue one key event per character. `\n` and `\t` become Enter and
    /// Tab.
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            let key = match c {
                '\n' => KeyEvent::key(KeyCode::Enter),
                '\t' => KeyEvent::key(KeyCode::Tab),
                c => KeyEvent::char(c),
            };
            self.push_event(key);
        }
    }

    /// Events not yet consumed.
    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Number of frames flushed so far.
    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// The last flushed frame.
    #[must_use]
    pub fn screen(&self) -> &CellGrid {
        &self.screen
    }

    /// One row of the last flushed frame.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        self.screen.row_text(y)
    }

    /// Cursor position of the last flushed frame.
    #[must_use]
    pub fn cursor(&self) -> Option<(u16, u16)> {
        self.screen_cursor
    }
}

impl TerminalIo for HeadlessTerminal {
    fn size(&mut self) -> (u16, u16) {
        self.back.size()
    }

    fn poll_event(&mut self) -> Result<Event> {
        let event = self
            .events
            .pop_front()
            .unwrap_or_else(|| KeyEvent::ctrl('x').into());
        if let Event::Resize(resize) = event {
            self.back.resize(resize.width, resize.height);
        }
        Ok(event)
    }

    fn clear(&mut self) {
        self.back.clear();
        self.cursor = None;
    }

    fn set_cell(&mut self, x: u16, y: u16, cell: Cell) {
        self.back.set(x, y, cell);
    }

    fn set_cursor(&mut self, x: u16, y: u16) {
        self.cursor = Some((x, y));
    }

    fn flush(&mut self) -> Result<()> {
        self.screen.clone_from(&self.back);
        self.screen_cursor = self.cursor;
        self.frames += 1;
        Ok(())
    }
}
