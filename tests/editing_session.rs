//! Whole editing sessions replayed through a headless terminal.

mod common;

use common::{Fixture, lines, terminal_from_bytes};
use scrawl::color::Color;
use scrawl::editor::ExitStatus;
use scrawl::input::{KeyCode, KeyEvent};
use scrawl::render::FrameTime;
use scrawl::{Config, Cursor, HeadlessTerminal, Session};
use std::time::Duration;

const CTRL_S: &[u8] = b"\x13";
const CTRL_X: &[u8] = b"\x18";

fn session(fixture: &Fixture) -> Session {
    Session::open_with_config(&fixture.path, Config::default(), None)
}

#[test]
fn type_save_and_quit() {
    let fixture = Fixture::missing("hello.c");
    let input = [b"int main() {\n\treturn 0;\n}".as_slice(), CTRL_S, CTRL_X].concat();
    let mut terminal = terminal_from_bytes(100, 10, &input);

    let mut session = session(&fixture);
    assert_eq!(session.run(&mut terminal).unwrap(), ExitStatus::Clean);
    assert_eq!(fixture.read(), "int main() {\n\treturn 0;\n\t}\n");

    assert!(terminal.row_text(0).contains("hello.c"));
    assert!(!terminal.row_text(0).contains("(*)"));
    assert!(terminal.row_text(9).starts_with("File saved successfully. ("));
    assert!(terminal.row_text(9).trim_end().ends_with(" | C | Line 3, Column 6"));
}

#[test]
fn keywords_are_painted() {
    let fixture = Fixture::new("main.go", "func main() {}\n");
    let mut terminal = HeadlessTerminal::new(40, 5);
    session(&fixture).run(&mut terminal).unwrap();

    let row = terminal.screen().row(1);
    assert!(row[..4].iter().all(|cell| cell.fg == Color::Red));
    assert_eq!(row[5].fg, Color::Default);
}

#[test]
fn backspace_joins_lines() {
    let fixture = Fixture::new("join.txt", "ab\ncd\n");
    let input = [b"\x1b[B\x7f".as_slice(), CTRL_X].concat();
    let mut terminal = terminal_from_bytes(100, 6, &input);

    let mut session = session(&fixture);
    assert_eq!(session.run(&mut terminal).unwrap(), ExitStatus::Unsaved);
    assert_eq!(lines(session.editor()), ["abcd"]);
    assert_eq!(session.editor().cursor(), Cursor::new(1, 2));
    assert!(terminal.row_text(0).contains("join.txt (*)"));
    assert_eq!(fixture.read(), "ab\ncd\n");
}

#[test]
fn cursor_right_wraps_only_between_lines() {
    let fixture = Fixture::new("r.txt", "ab\ncd");
    let mut terminal = HeadlessTerminal::new(40, 6);
    for _ in 0..10 {
        terminal.push_event(KeyEvent::key(KeyCode::Right));
    }

    let mut session = session(&fixture);
    session.run(&mut terminal).unwrap();
    assert_eq!(session.editor().cursor(), Cursor::new(2, 2));
}

#[test]
fn home_toggles_between_indent_and_column_zero() {
    let fixture = Fixture::new("i.txt", "    x");
    let mut session = session(&fixture);

    let mut terminal = terminal_from_bytes(40, 6, b"\x1b[F\x1b[H");
    session.run(&mut terminal).unwrap();
    assert_eq!(session.editor().cursor(), Cursor::new(1, 4));

    let mut terminal = terminal_from_bytes(40, 6, b"\x01");
    session.run(&mut terminal).unwrap();
    assert_eq!(session.editor().cursor(), Cursor::new(1, 0));
}

#[test]
fn page_down_then_up() {
    let text: String = (1..=100).map(|n| format!("{n}\n")).collect();
    let fixture = Fixture::new("pages.txt", &text);
    let mut session = session(&fixture);

    let mut terminal = terminal_from_bytes(20, 12, b"\x1b[6~\x1b[6~");
    session.run(&mut terminal).unwrap();
    assert_eq!(session.editor().cursor().row, 21);
    assert_eq!(session.editor().viewport().row_offset, 20);
    assert_eq!(terminal.cursor(), Some((0, 1)));
    assert_eq!(terminal.row_text(1).trim_end(), "21");

    let mut terminal = terminal_from_bytes(20, 12, b"\x1b[5~");
    session.run(&mut terminal).unwrap();
    assert_eq!(session.editor().cursor().row, 11);
}

#[test]
fn long_lines_scroll_horizontally() {
    let fixture = Fixture::new("wide.txt", &"x".repeat(50));
    let mut terminal = terminal_from_bytes(20, 5, b"\x05");
    let mut session = session(&fixture);
    session.run(&mut terminal).unwrap();

    assert_eq!(session.editor().viewport().col_offset, 31);
    assert_eq!(terminal.cursor(), Some((19, 1)));
}

#[test]
fn resize_is_picked_up_on_next_frame() {
    let fixture = Fixture::new("resize.txt", "hello");
    let mut terminal = terminal_from_bytes(30, 5, b"\x1b[8;8;50t");
    session(&fixture).run(&mut terminal).unwrap();
    assert_eq!(terminal.screen().size(), (50, 8));
    assert!(terminal.row_text(7).trim_end().ends_with("Line 1, Column 1"));
}

#[test]
fn status_message_expires_after_three_seconds() {
    let fixture = Fixture::new("status.txt", "");
    let mut editor = fixture.open();
    let mut terminal = HeadlessTerminal::new(60, 4);
    editor.set_status("hello there");
    let set_at = editor.status().set_at().unwrap();

    let mut time = FrameTime::now();
    time.instant = set_at + Duration::from_secs(1);
    editor.draw_at(&mut terminal, &time).unwrap();
    assert!(terminal.row_text(3).starts_with("hello there"));

    time.instant = set_at + Duration::from_secs(4);
    editor.draw_at(&mut terminal, &time).unwrap();
    assert!(!terminal.row_text(3).contains("hello there"));
}

#[test]
fn config_failure_is_reported() {
    let fixture = Fixture::new("c.txt", "");
    let mut session = Session::open_with_config(
        &fixture.path,
        Config::default(),
        Some(scrawl::Error::InvalidTabSize(0)),
    );
    let mut terminal = HeadlessTerminal::new(100, 4);
    session.run(&mut terminal).unwrap();
    assert!(terminal.row_text(3).starts_with("Failed to load config! ("));
}
