//! Full-frame editor rendering.
//!
//! A frame has three regions:
//!
//! - row 0, the title bar: program banner left, file name centered (with
//!   ` (*)` when there are unsaved changes), local time right
//! - rows `1..height-1`, the body: the visible slice of the buffer, each
//!   character colored by its highlight tag
//! - the last row, the status bar: the status message left while it is
//!   fresh, file type and cursor position right
//!
//! Every frame is painted from scratch into the terminal's back buffer and
//! then flushed with the hardware cursor placed over the edit position.

mod status;

pub use status::{STATUS_MESSAGE_TTL, StatusMessage};

use crate::cell::Cell;
use crate::color::Color;
use crate::error::Result;
use crate::highlight::{FileType, Highlight};
use crate::terminal::TerminalIo;
use crate::text::Buffer;
use crate::view::{Cursor, Viewport};
use chrono::{DateTime, Local};
use std::time::Instant;

/// Foreground of the title and status bars.
pub const BAR_FG: Color = Color::Black;

/// Background of the title and status bars.
pub const BAR_BG: Color = Color::White;

/// Marker appended to the file name when the buffer is dirty.
pub const DIRTY_MARKER: &str = " (*)";

/// Title bar clock format.
pub const CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M";

/// The moment a frame is drawn.
///
/// The monotonic instant decides status expiry; the wall clock feeds the
/// title bar.
#[derive(Clone, Copy, Debug)]
pub struct FrameTime {
    pub instant: Instant,
    pub local: DateTime<Local>,
}

impl FrameTime {
    #[must_use]
    pub fn now() -> Self {
        Self {
            instant: Instant::now(),
            local: Local::now(),
        }
    }
}

/// Everything one frame shows.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub file_name: &'a str,
    pub file_type: FileType,
    pub buffer: &'a Buffer,
    pub cursor: Cursor,
    /// The cursor column after tab expansion.
    pub display_col: usize,
    pub viewport: &'a Viewport,
    pub status: &'a StatusMessage,
}

/// Paint a whole frame and flush it.
///
/// The viewport must already contain the cursor.
pub fn draw<T: TerminalIo + ?Sized>(term: &mut T, frame: &Frame<'_>, time: &FrameTime) -> Result<()> {
    let width = to_u16(frame.viewport.width);
    let height = to_u16(frame.viewport.height);

    term.clear();
    draw_title_bar(term, frame, width, &time.local.format(CLOCK_FORMAT).to_string());
    draw_body(term, frame, width);
    draw_status_bar(term, frame, width, height, time.instant);

    let x = frame.display_col.saturating_sub(frame.viewport.col_offset);
    let y = frame.cursor.row.saturating_sub(frame.viewport.row_offset);
    term.set_cursor(to_u16(x), to_u16(y));
    term.flush()
}

fn draw_title_bar<T: TerminalIo + ?Sized>(term: &mut T, frame: &Frame<'_>, width: u16, clock: &str) {
    let banner = format!("{} {}", crate::PROGRAM_NAME, crate::PROGRAM_VERSION);
    let mut name = frame.file_name.to_owned();
    if frame.buffer.is_dirty() {
        name.push_str(DIRTY_MARKER);
    }

    fill_row(term, 0, width);
    draw_bar_text(term, 0, 0, width, &banner);
    let name_x = width.saturating_sub(text_width(&name)) / 2;
    draw_bar_text(term, name_x, 0, width, &name);
    draw_bar_text(term, width.saturating_sub(text_width(clock)), 0, width, clock);
}

fn draw_body<T: TerminalIo + ?Sized>(term: &mut T, frame: &Frame<'_>, width: u16) {
    let viewport = frame.viewport;
    for y in 0..viewport.body_height() {
        let Some(line) = frame.buffer.line(y + viewport.row_offset) else {
            break;
        };
        let screen_y = to_u16(y + 1);
        let highlight = line.highlight();
        let visible = line
            .display_text()
            .chars()
            .enumerate()
            .skip(viewport.col_offset)
            .take(usize::from(width));
        for (x, (i, ch)) in visible.enumerate() {
            let tag = highlight.get(i).copied().unwrap_or(Highlight::Normal);
            term.set_cell(to_u16(x), screen_y, Cell::new(ch, tag.color(), Color::Default));
        }
    }
}

fn draw_status_bar<T: TerminalIo + ?Sized>(
    term: &mut T,
    frame: &Frame<'_>,
    width: u16,
    height: u16,
    now: Instant,
) {
    let y = height.saturating_sub(1);
    let position = format!(
        " | {} | Line {}, Column {}",
        frame.file_type,
        frame.cursor.row,
        frame.display_col + 1
    );

    fill_row(term, y, width);
    if let Some(message) = frame.status.visible_at(now) {
        draw_bar_text(term, 0, y, width, message);
    }
    draw_bar_text(term, width.saturating_sub(text_width(&position)), y, width, &position);
}

fn fill_row<T: TerminalIo + ?Sized>(term: &mut T, y: u16, width: u16) {
    for x in 0..width {
        term.set_cell(x, y, Cell::new(' ', BAR_FG, BAR_BG));
    }
}

fn draw_bar_text<T: TerminalIo + ?Sized>(term: &mut T, x: u16, y: u16, width: u16, text: &str) {
    for (col, ch) in (x..width).zip(text.chars()) {
        term.set_cell(col, y, Cell::new(ch, BAR_FG, BAR_BG));
    }
}

fn text_width(text: &str) -> u16 {
    to_u16(text.chars().count())
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::languages::C;
    use crate::terminal::HeadlessTerminal;
    use crate::text::Format;
    use chrono::TimeZone;
    use std::io;
    use std::time::Duration;

    struct Fixture {
        buffer: Buffer,
        viewport: Viewport,
        status: StatusMessage,
        time: FrameTime,
    }

    impl Fixture {
        fn new(text: &str, width: usize, height: usize) -> Self {
            let format = Format::new(4, false, Some(&C));
            let local = Local
                .with_ymd_and_hms(2024, 3, 9, 14, 5, 0)
                .single()
                .unwrap();
            Self {
                buffer: Buffer::from_reader(io::Cursor::new(text), format).unwrap(),
                viewport: Viewport::new(width, height),
                status: StatusMessage::default(),
                time: FrameTime {
                    instant: Instant::now(),
                    local,
                },
            }
        }

        fn render(&self, cursor: Cursor) -> HeadlessTerminal {
            let (w, h) = (to_u16(self.viewport.width), to_u16(self.viewport.height));
            let mut term = HeadlessTerminal::new(w, h);
            let display_col = self
                .buffer
                .line(cursor.index())
                .map_or(0, |line| line.display_col(cursor.col, 4));
            let frame = Frame {
                file_name: "main.c",
                file_type: FileType::C,
                buffer: &self.buffer,
                cursor,
                display_col,
                viewport: &self.viewport,
                status: &self.status,
            };
            draw(&mut term, &frame, &self.time).unwrap();
            term
        }
    }

    #[test]
    fn title_bar_layout() {
        let fixture = Fixture::new("int x;", 60, 5);
        let term = fixture.render(Cursor::default());
        let title = term.row_text(0);

        assert!(title.starts_with(&format!("{} {}", crate::PROGRAM_NAME, crate::PROGRAM_VERSION)));
        assert!(title.ends_with("2024-03-09 14:05"));
        assert_eq!(title.find("main.c"), Some(27));
        assert!(!title.contains(DIRTY_MARKER));
        assert!(term.screen().row(0).iter().all(|c| c.bg == BAR_BG));
    }

    #[test]
    fn dirty_marker_in_title() {
        let mut fixture = Fixture::new("x", 60, 5);
        fixture.buffer.mark_dirty();
        let term = fixture.render(Cursor::default());
        assert!(term.row_text(0).contains("main.c (*)"));
    }

    #[test]
    fn body_is_colored_by_highlight() {
        let fixture = Fixture::new("int x = 42; // hi", 40, 5);
        let term = fixture.render(Cursor::default());
        assert_eq!(term.row_text(1).trim_end(), "int x = 42; // hi");

        let row = term.screen().row(1);
        assert_eq!(row[0].fg, Color::Red);
        assert_eq!(row[4].fg, Color::Default);
        assert_eq!(row[8].fg, Color::Blue);
        assert_eq!(row[12].fg, Color::Cyan);
    }

    #[test]
    fn horizontal_offset_keeps_colors_aligned() {
        let mut fixture = Fixture::new("x = \"abc\"", 40, 5);
        fixture.viewport.col_offset = 4;
        let term = fixture.render(Cursor::new(1, 5));
        assert_eq!(term.row_text(1).trim_end(), "\"abc\"");
        assert!(term.screen().row(1)[..5].iter().all(|c| c.fg == Color::Green));
        assert_eq!(term.cursor(), Some((1, 1)));
    }

    #[test]
    fn rows_past_the_end_are_blank() {
        let fixture = Fixture::new("one\ntwo", 20, 6);
        let term = fixture.render(Cursor::default());
        assert_eq!(term.row_text(2).trim_end(), "two");
        assert_eq!(term.row_text(3).trim_end(), "");
        assert_eq!(term.row_text(4).trim_end(), "");
    }

    #[test]
    fn status_bar_position_and_message() {
        let mut fixture = Fixture::new("\tx", 60, 5);
        fixture.status.set("hello", fixture.time.instant);
        let term = fixture.render(Cursor::new(1, 1));
        let status = term.row_text(4);
        assert!(status.starts_with("hello"));
        assert!(status.ends_with(" | C | Line 1, Column 5"));
        assert_eq!(term.cursor(), Some((4, 1)));
    }

    #[test]
    fn expired_status_message_is_hidden() {
        let mut fixture = Fixture::new("x", 60, 5);
        let set_at = fixture.time.instant;
        fixture.status.set("old news", set_at);
        fixture.time.instant = set_at + Duration::from_secs(4);
        let term = fixture.render(Cursor::default());
        assert!(!term.row_text(4).contains("old news"));

        fixture.time.instant = set_at + Duration::from_secs(1);
        let term = fixture.render(Cursor::default());
        assert!(term.row_text(4).contains("old news"));
    }

    #[test]
    fn vertical_offset_shifts_rows() {
        let mut fixture = Fixture::new("a\nb\nc\nd", 10, 4);
        fixture.viewport.row_offset = 2;
        let term = fixture.render(Cursor::new(3, 0));
        assert_eq!(term.row_text(1).trim_end(), "c");
        assert_eq!(term.row_text(2).trim_end(), "d");
        assert_eq!(term.cursor(), Some((0, 1)));
    }
}
