#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code)]

use scrawl::input::{Event, InputParser};
use scrawl::{Config, Editor, HeadlessTerminal};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A file on disk in its own temporary directory.
pub struct Fixture {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl Fixture {
    /// Write `contents` to `name` in a fresh directory.
    pub fn new(name: &str, contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(name);
        fs::write(&path, contents).expect("write fixture");
        Self { dir, path }
    }

    /// A path in a fresh directory with no file behind it yet.
    pub fn missing(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(name);
        Self { dir, path }
    }

    pub fn open(&self) -> Editor {
        Editor::open(&self.path, Config::default())
    }

    pub fn open_with(&self, config: Config) -> Editor {
        Editor::open(&self.path, config)
    }

    pub fn read(&self) -> String {
        fs::read_to_string(&self.path).expect("read fixture")
    }
}

/// Raw line texts of an editor's buffer.
pub fn lines(editor: &Editor) -> Vec<String> {
    editor
        .buffer()
        .lines()
        .map(|line| line.text().to_owned())
        .collect()
}

/// Decode a byte stream the way the terminal would deliver it.
pub fn parse_all(bytes: &[u8]) -> Vec<Event> {
    let parser = InputParser::new();
    let mut events = Vec::new();
    let mut offset = 0;
    while offset < bytes.len() {
        match parser.parse(&bytes[offset..]) {
            Ok((event, consumed)) => {
                events.push(event);
                offset += consumed;
            }
            Err(err) => offset += err.skip_len().max(1),
        }
    }
    events
}

/// A headless terminal that replays `bytes` as keyboard input.
pub fn terminal_from_bytes(width: u16, height: u16, bytes: &[u8]) -> HeadlessTerminal {
    HeadlessTerminal::with_events(width, height, parse_all(bytes))
}
