//! The boundary a host program uses to edit a file.
//!
//! ```no_run
//! use scrawl::session::Session;
//! use scrawl::terminal::AnsiTerminal;
//!
//! fn main() -> scrawl::Result<()> {
//!     let mut terminal = AnsiTerminal::new()?;
//!     let mut session = Session::open("notes.txt");
//!     session.run(&mut terminal)?;
//!     Ok(())
//! }
//! ```

use crate::config::Config;
use crate::editor::{Editor, ExitStatus};
use crate::error::{Error, Result};
use crate::terminal::TerminalIo;
use std::path::PathBuf;

/// One editing session over one file.
#[derive(Debug)]
pub struct Session {
    editor: Editor,
}

impl Session {
    /// Load the user's settings and open `path`.
    ///
    /// A settings failure falls back to the defaults and is reported on the
    /// status bar unless opening the file failed too.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let (config, error) = Config::load_or_default();
        Self::open_with_config(path, config, error)
    }

    /// Open `path` with settings the host already loaded.
    ///
    /// `config_error` is the failure that led to `config`, if any.
    #[must_use]
    pub fn open_with_config(
        path: impl Into<PathBuf>,
        config: Config,
        config_error: Option<Error>,
    ) -> Self {
        let mut editor = Editor::open(path, config);
        if let Some(err) = config_error {
            // file errors take precedence
            if editor.status().text().is_empty() {
                editor.set_status(format!("Failed to load config! ({err})"));
            }
        }
        Self { editor }
    }

    #[must_use]
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    /// Run the editor on `terminal` until the user quits.
    pub fn run<T: TerminalIo + ?Sized>(&mut self, terminal: &mut T) -> Result<ExitStatus> {
        self.editor.run(terminal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::HeadlessTerminal;

    #[test]
    fn config_error_becomes_status() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::open_with_config(
            dir.path().join("a.txt"),
            Config::default(),
            Some(Error::InvalidTabSize(0)),
        );
        let status = session.editor().status().text();
        assert!(status.starts_with("Failed to load config! ("));
        assert!(status.contains("invalid tab size 0"));
    }

    #[test]
    fn open_error_wins_over_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let session =
            Session::open_with_config(dir.path(), Config::default(), Some(Error::NoHomeDir));
        assert!(session.editor().status().text().starts_with("Error: Couldn't open file: "));
    }

    #[test]
    fn run_on_headless_terminal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        let mut session = Session::open_with_config(&path, Config::default(), None);
        let mut terminal = HeadlessTerminal::new(30, 5);
        terminal.type_text("hi");
        terminal.push_event(crate::input::KeyEvent::ctrl('s'));

        assert_eq!(session.run(&mut terminal).unwrap(), ExitStatus::Clean);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hi\n");
    }
}
