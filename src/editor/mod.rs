//! Editing session state and the event loop.
//!
//! An [`Editor`] owns one [`Buffer`] and everything needed to show and edit
//! it: the cursor, the viewport, the settings and the status message. It
//! never touches a terminal directly; every frame goes through a
//! [`TerminalIo`] handed to [`Editor::run`].
//!
//! Recoverable failures (a file that cannot be read, a save that fails) are
//! reported on the status bar and the session continues.

mod keymap;

pub use keymap::{Command, command_for};

use crate::config::Config;
use crate::error::Result;
use crate::highlight::FileType;
use crate::input::Event;
use crate::render::{self, Frame, FrameTime, StatusMessage};
use crate::terminal::TerminalIo;
use crate::text::{Buffer, Format};
use crate::view::{self, Cursor, CursorMove, Viewport};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Nothing was left unsaved.
    Clean,
    /// The buffer had changes that were never saved.
    Unsaved,
}

/// A single-file editor.
#[derive(Debug)]
pub struct Editor {
    path: PathBuf,
    file_type: FileType,
    config: Config,
    buffer: Buffer,
    cursor: Cursor,
    viewport: Viewport,
    status: StatusMessage,
}

impl Editor {
    /// Open `path` for editing.
    ///
    /// A missing file is created empty. If the file cannot be created or
    /// read, the editor starts with a single empty line and the error is
    /// shown on the status bar.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>, config: Config) -> Self {
        let path = path.into();
        let file_type = FileType::detect(&path);
        let format = Format::for_file(&config, file_type);

        let (buffer, error) = match load(&path, format) {
            Ok(buffer) => (buffer, None),
            Err(err) => (Buffer::new(format), Some(err)),
        };

        let mut editor = Self {
            path,
            file_type,
            config,
            buffer,
            cursor: Cursor::default(),
            viewport: Viewport::default(),
            status: StatusMessage::default(),
        };
        if let Some(err) = error {
            warn!(target: "scrawl::io", path = %editor.path.display(), %err, "could not open file");
            editor.set_status(format!(
                "Error: Couldn't open file: {} ({err})",
                editor.path.display()
            ));
        }
        editor
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn status(&self) -> &StatusMessage {
        &self.status
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.buffer.is_dirty()
    }

    /// The cursor column after tab expansion.
    #[must_use]
    pub fn display_col(&self) -> usize {
        self.buffer
            .line(self.cursor.index())
            .map_or(0, |line| line.display_col(self.cursor.col, self.buffer.format().tab_size))
    }

    /// Show a message on the status bar for the next few seconds.
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status.set(text, Instant::now());
    }

    /// Write the buffer back to its file.
    pub fn save(&mut self) {
        match store(&self.path, &self.buffer) {
            Ok(()) => {
                self.buffer.mark_clean();
                info!(target: "scrawl::io", path = %self.path.display(), lines = self.buffer.len(), "saved");
                self.set_status(format!("File saved successfully. ({})", self.path.display()));
            }
            Err(err) => {
                warn!(target: "scrawl::io", path = %self.path.display(), %err, "save failed");
                self.set_status(format!("Error: {err}."));
            }
        }
    }

    /// Insert a character at the cursor and move past it.
    pub fn insert_char(&mut self, c: char) {
        self.cursor.col += self.buffer.insert_char(self.cursor.index(), self.cursor.col, c);
    }

    /// Delete the character before the cursor.
    ///
    /// At the start of a line the line is joined onto the one above.
    pub fn delete_char(&mut self) {
        let row = self.cursor.index();
        if self.cursor.col > 0 {
            let Some(line) = self.buffer.line(row) else {
                return;
            };
            let prev = line.prev_char_boundary(self.cursor.col);
            self.buffer.delete_char(row, prev);
            self.cursor.col = prev;
        } else if let Some(col) = self.buffer.join_with_previous(row) {
            self.cursor = Cursor::new(self.cursor.row - 1, col);
        }
    }

    /// Break the line at the cursor, carrying its indentation.
    pub fn break_line(&mut self) {
        let col = self.buffer.split_line(self.cursor.index(), self.cursor.col);
        self.cursor = Cursor::new(self.cursor.row + 1, col);
    }

    pub fn move_cursor(&mut self, step: CursorMove) {
        view::move_cursor(&mut self.cursor, &mut self.viewport, &self.buffer, step);
    }

    /// Apply one input event. Breaks when the session should end.
    pub fn handle_event(&mut self, event: Event) -> ControlFlow<()> {
        let Event::Key(key) = event else {
            return ControlFlow::Continue(());
        };
        let Some(command) = command_for(&key) else {
            debug!(target: "scrawl::editor", ?key, "unbound key");
            return ControlFlow::Continue(());
        };

        match command {
            Command::Move(step) => self.move_cursor(step),
            Command::Save => self.save(),
            Command::Quit => return ControlFlow::Break(()),
            Command::DeleteBackward => self.delete_char(),
            Command::BreakLine => self.break_line(),
            Command::Insert(c) => self.insert_char(c),
        }
        ControlFlow::Continue(())
    }

    /// Redraw the whole screen.
    pub fn draw<T: TerminalIo + ?Sized>(&mut self, term: &mut T) -> Result<()> {
        self.draw_at(term, &FrameTime::now())
    }

    /// Redraw the whole screen as of `time`.
    pub fn draw_at<T: TerminalIo + ?Sized>(&mut self, term: &mut T, time: &FrameTime) -> Result<()> {
        let (width, height) = term.size();
        self.viewport.width = usize::from(width);
        self.viewport.height = usize::from(height);

        let display_col = self.display_col();
        self.viewport.scroll_to(self.cursor.row, display_col);

        let file_name = self.path.display().to_string();
        let frame = Frame {
            file_name: &file_name,
            file_type: self.file_type,
            buffer: &self.buffer,
            cursor: self.cursor,
            display_col,
            viewport: &self.viewport,
            status: &self.status,
        };
        render::draw(term, &frame, time)
    }

    /// Draw, then process events until the quit key.
    ///
    /// Only terminal failures end the loop early.
    pub fn run<T: TerminalIo + ?Sized>(&mut self, term: &mut T) -> Result<ExitStatus> {
        info!(target: "scrawl::editor", path = %self.path.display(), file_type = %self.file_type, "session started");
        self.draw(term)?;
        loop {
            let event = term.poll_event()?;
            if self.handle_event(event).is_break() {
                break;
            }
            self.draw(term)?;
        }

        let status = if self.is_dirty() {
            ExitStatus::Unsaved
        } else {
            ExitStatus::Clean
        };
        info!(target: "scrawl::editor", ?status, "session ended");
        Ok(status)
    }
}

fn load(path: &Path, format: Format) -> io::Result<Buffer> {
    if !path.exists() {
        File::create(path)?;
        info!(target: "scrawl::io", path = %path.display(), "created file");
        return Ok(Buffer::new(format));
    }

    let buffer = Buffer::from_reader(BufReader::new(File::open(path)?), format)?;
    debug!(target: "scrawl::io", path = %path.display(), lines = buffer.len(), "opened");
    Ok(buffer)
}

fn store(path: &Path, buffer: &Buffer) -> io::Result<()> {
    let file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    buffer.write_to(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyCode, KeyEvent, ResizeEvent};
    use crate::terminal::HeadlessTerminal;
    use tempfile::TempDir;

    fn editor_with(text: &str, name: &str) -> (TempDir, Editor) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        fs::write(&path, text).unwrap();
        let editor = Editor::open(&path, Config::default());
        (dir, editor)
    }

    fn lines(editor: &Editor) -> Vec<String> {
        editor.buffer().lines().map(|l| l.text().to_owned()).collect()
    }

    #[test]
    fn open_missing_file_creates_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.go");
        let editor = Editor::open(&path, Config::default());

        assert!(path.exists());
        assert_eq!(lines(&editor), [""]);
        assert_eq!(editor.file_type(), FileType::Go);
        assert!(!editor.is_dirty());
        assert_eq!(editor.status().text(), "");
    }

    #[test]
    fn open_unreadable_path_reports_status() {
        let dir = tempfile::tempdir().unwrap();
        let editor = Editor::open(dir.path(), Config::default());
        assert_eq!(lines(&editor), [""]);
        assert!(editor.status().text().starts_with("Error: Couldn't open file: "));
    }

    #[test]
    fn save_writes_and_cleans() {
        let (_dir, mut editor) = editor_with("a\nb\tc\n", "f.txt");
        editor.insert_char('x');
        assert!(editor.is_dirty());

        editor.save();
        assert!(!editor.is_dirty());
        assert_eq!(fs::read_to_string(editor.path()).unwrap(), "xa\nb\tc\n");
        assert!(editor.status().text().starts_with("File saved successfully. ("));
    }

    #[test]
    fn failed_save_keeps_dirty() {
        let (dir, mut editor) = editor_with("a", "f.txt");
        editor.insert_char('x');
        editor.path = dir.path().join("missing").join("f.txt");

        editor.save();
        assert!(editor.is_dirty());
        assert!(editor.status().text().starts_with("Error: "));
        assert!(editor.status().text().ends_with('.'));
    }

    #[test]
    fn insert_on_last_row_does_not_add_lines() {
        let (_dir, mut editor) = editor_with("", "f.txt");
        editor.insert_char('a');
        editor.insert_char('é');
        assert_eq!(lines(&editor), ["aé"]);
        assert_eq!(editor.cursor(), Cursor::new(1, 3));
    }

    #[test]
    fn soft_tab_advances_by_tab_size() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            soft_tabs: true,
            tab_size: 2,
            ..Config::default()
        };
        let mut editor = Editor::open(dir.path().join("f.txt"), config);
        editor.insert_char('\t');
        assert_eq!(lines(&editor), ["  "]);
        assert_eq!(editor.cursor().col, 2);
    }

    #[test]
    fn delete_backward_and_join() {
        let (_dir, mut editor) = editor_with("ab\ncé", "f.txt");
        editor.cursor = Cursor::new(2, 3);
        editor.delete_char();
        assert_eq!(lines(&editor), ["ab", "c"]);
        assert_eq!(editor.cursor(), Cursor::new(2, 1));

        editor.delete_char();
        editor.delete_char();
        assert_eq!(lines(&editor), ["ab"]);
        assert_eq!(editor.cursor(), Cursor::new(1, 2));
    }

    #[test]
    fn delete_at_buffer_start_is_noop() {
        let (_dir, mut editor) = editor_with("ab", "f.txt");
        editor.delete_char();
        assert_eq!(lines(&editor), ["ab"]);
        assert!(!editor.is_dirty());
    }

    #[test]
    fn break_line_carries_indent() {
        let (_dir, mut editor) = editor_with("\tif x {}", "f.c");
        editor.cursor = Cursor::new(1, 7);
        editor.break_line();
        assert_eq!(lines(&editor), ["\tif x {", "\t}"]);
        assert_eq!(editor.cursor(), Cursor::new(2, 1));
        assert_eq!(editor.display_col(), 4);
    }

    #[test]
    fn break_at_column_zero_pushes_line_down() {
        let (_dir, mut editor) = editor_with("a", "f.txt");
        editor.break_line();
        assert_eq!(lines(&editor), ["", "a"]);
        assert_eq!(editor.cursor(), Cursor::new(2, 0));
    }

    #[test]
    fn handle_event_dispatches() {
        let (_dir, mut editor) = editor_with("", "f.txt");
        assert!(editor.handle_event(KeyEvent::char('h').into()).is_continue());
        assert!(editor.handle_event(KeyEvent::key(KeyCode::Enter).into()).is_continue());
        assert!(editor.handle_event(KeyEvent::key(KeyCode::Up).into()).is_continue());
        assert!(editor.handle_event(ResizeEvent::new(10, 10).into()).is_continue());
        assert!(editor.handle_event(KeyEvent::ctrl('z').into()).is_continue());
        assert_eq!(lines(&editor), ["h", ""]);
        assert_eq!(editor.cursor(), Cursor::new(1, 0));
        assert!(editor.handle_event(KeyEvent::ctrl('x').into()).is_break());
    }

    #[test]
    fn run_reports_exit_status() {
        let (_dir, mut editor) = editor_with("", "f.txt");
        let mut term = HeadlessTerminal::new(40, 6);
        assert_eq!(editor.run(&mut term).unwrap(), ExitStatus::Clean);
        assert_eq!(term.frames(), 1);

        term.type_text("x");
        assert_eq!(editor.run(&mut term).unwrap(), ExitStatus::Unsaved);

        term.push_event(KeyEvent::ctrl('s'));
        assert_eq!(editor.run(&mut term).unwrap(), ExitStatus::Clean);
    }

    #[test]
    fn draw_scrolls_to_cursor() {
        let text = (1..=30).map(|n| format!("line {n}\n")).collect::<String>();
        let (_dir, mut editor) = editor_with(&text, "f.txt");
        let mut term = HeadlessTerminal::new(20, 6);
        editor.cursor = Cursor::new(20, 0);
        editor.draw(&mut term).unwrap();

        assert_eq!(editor.viewport().row_offset, 16);
        assert_eq!(term.row_text(4).trim_end(), "line 20");
        assert_eq!(term.cursor(), Some((0, 4)));
    }
}
