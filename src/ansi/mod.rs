//! ANSI escape sequence generation.

pub mod output;
pub mod sequences;

pub use output::AnsiWriter;
pub use sequences::*;

use crate::color::Color;
use std::io::{self, Write};

/// Write a u16 as decimal digits without formatting overhead.
#[inline]
fn write_u16_decimal(w: &mut impl Write, n: u16) -> io::Result<()> {
    if n < 10 {
        return w.write_all(&[b'0' + n as u8]);
    }
    let mut buf = [0u8; 5];
    let mut i = buf.len();
    let mut val = n;
    while val > 0 {
        i -= 1;
        buf[i] = b'0' + (val % 10) as u8;
        val /= 10;
    }
    w.write_all(&buf[i..])
}

/// Write an SGR sequence setting both colors.
pub fn write_colors(w: &mut impl Write, fg: Color, bg: Color) -> io::Result<()> {
    w.write_all(b"\x1b[")?;
    write_u16_decimal(w, u16::from(fg.fg_sgr()))?;
    w.write_all(b";")?;
    write_u16_decimal(w, u16::from(bg.bg_sgr()))?;
    w.write_all(b"m")
}

/// Write a cursor position sequence. Coordinates are 0-based.
pub fn write_cursor_position(w: &mut impl Write, row: u16, col: u16) -> io::Result<()> {
    w.write_all(b"\x1b[")?;
    write_u16_decimal(w, row.saturating_add(1))?;
    w.write_all(b";")?;
    write_u16_decimal(w, col.saturating_add(1))?;
    w.write_all(b"H")
}
