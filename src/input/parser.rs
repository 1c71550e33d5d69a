//! ANSI sequence parser for terminal input.
//!
//! Parses raw bytes from the terminal into structured events. Supports:
//! - Control characters (Ctrl+letter, Tab, Enter, Backspace)
//! - UTF-8 encoded text
//! - CSI sequences for arrows, Home/End and the tilde keys, with modifiers
//! - SS3 sequences sent by terminals in application cursor mode
//! - The XTWINOPS resize report (`CSI 8 ; height ; width t`)

// Parser has many match arms for different terminal sequences
#![allow(clippy::match_same_arms)]
// Self is used for consistency with other methods even when not needed
#![allow(clippy::unused_self)]

use crate::input::event::{Event, ResizeEvent};
use crate::input::keyboard::{KeyCode, KeyEvent, KeyModifiers};

/// Error type for input parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Input buffer is empty.
    Empty,
    /// Incomplete escape sequence (need more bytes).
    Incomplete,
    /// Unrecognized escape sequence; the bytes should be skipped.
    UnrecognizedSequence(Vec<u8>),
    /// Invalid UTF-8 in input.
    InvalidUtf8,
    /// The resize sequence contained non-numeric dimensions.
    InvalidResizeFormat,
}

impl ParseError {
    /// Number of bytes to discard after this error, if any.
    #[must_use]
    pub fn skip_len(&self) -> usize {
        match self {
            Self::Empty | Self::Incomplete => 0,
            Self::UnrecognizedSequence(bytes) => bytes.len().max(1),
            Self::InvalidUtf8 | Self::InvalidResizeFormat => 1,
        }
    }
}

/// Result of parsing input.
pub type ParseResult = Result<(Event, usize), ParseError>;

/// Stateless parser for terminal input bytes.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputParser;

impl InputParser {
    /// Create a new input parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse bytes into an event.
    ///
    /// Returns the event and number of bytes consumed, or an error.
    /// Call repeatedly with the remaining buffer until `Err(ParseError::Empty)`
    /// or `Err(ParseError::Incomplete)` is returned. A lone ESC is reported as
    /// `Incomplete`; the caller decides when to treat it as the Escape key.
    pub fn parse(&self, input: &[u8]) -> ParseResult {
        let Some(&first) = input.first() else {
            return Err(ParseError::Empty);
        };

        match first {
            0x1b => self.parse_escape(input),
            b'\t' => Ok((KeyEvent::key(KeyCode::Tab).into(), 1)),
            b'\r' | b'\n' => Ok((KeyEvent::key(KeyCode::Enter).into(), 1)),
            0x08 | 0x7f => Ok((KeyEvent::key(KeyCode::Backspace).into(), 1)),
            0x01..=0x1a => {
                // Ctrl+A through Ctrl+Z
                let c = char::from(first - 1 + b'a');
                Ok((KeyEvent::ctrl(c).into(), 1))
            }
            0x20..=0x7e => Ok((KeyEvent::char(char::from(first)).into(), 1)),
            0x80..=0xff => self.parse_utf8(input),
            _ => Err(ParseError::UnrecognizedSequence(vec![first])),
        }
    }

    /// Parse an escape sequence.
    fn parse_escape(&self, input: &[u8]) -> ParseResult {
        if input.len() == 1 {
            return Err(ParseError::Incomplete);
        }

        match input[1] {
            // CSI sequence: ESC [
            b'[' => self.parse_csi(input),
            // SS3 sequence: ESC O
            b'O' => self.parse_ss3(input),
            // Alt+key: ESC <char>
            0x20..=0x7e => {
                let c = char::from(input[1]);
                Ok((KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT).into(), 2))
            }
            _ => Ok((KeyEvent::key(KeyCode::Esc).into(), 1)),
        }
    }

    /// Parse a CSI sequence (ESC [ ...).
    fn parse_csi(&self, input: &[u8]) -> ParseResult {
        if input.len() < 3 {
            return Err(ParseError::Incomplete);
        }

        // Find the final byte (0x40-0x7e)
        let Some(end) = input[2..]
            .iter()
            .position(|b| (0x40..=0x7e).contains(b))
            .map(|i| i + 2)
        else {
            return Err(ParseError::Incomplete);
        };

        let final_byte = input[end];
        let params = &input[2..end];
        let consumed = end + 1;

        match final_byte {
            b'A' => self.parse_modified_key(params, KeyCode::Up, consumed),
            b'B' => self.parse_modified_key(params, KeyCode::Down, consumed),
            b'C' => self.parse_modified_key(params, KeyCode::Right, consumed),
            b'D' => self.parse_modified_key(params, KeyCode::Left, consumed),
            b'H' => self.parse_modified_key(params, KeyCode::Home, consumed),
            b'F' => self.parse_modified_key(params, KeyCode::End, consumed),
            b'~' => self.parse_tilde_key(params, consumed),
            b't' => self.parse_resize(params, consumed),
            _ => Err(ParseError::UnrecognizedSequence(input[..consumed].to_vec())),
        }
    }

    fn parse_modified_key(&self, params: &[u8], code: KeyCode, consumed: usize) -> ParseResult {
        let modifiers = self.parse_modifiers(params)?;
        Ok((KeyEvent::new(code, modifiers).into(), consumed))
    }

    /// Parse modifiers from CSI parameter bytes.
    ///
    /// Format: `1;N` where `N - 1` is a bit set of shift (1), alt (2) and
    /// ctrl (4).
    fn parse_modifiers(&self, params: &[u8]) -> Result<KeyModifiers, ParseError> {
        let s = std::str::from_utf8(params).map_err(|_| ParseError::InvalidUtf8)?;
        let Some(n) = s.split(';').nth(1).and_then(|p| p.parse::<u8>().ok()) else {
            return Ok(KeyModifiers::empty());
        };
        let n = n.saturating_sub(1);
        let mut mods = KeyModifiers::empty();
        if n & 1 != 0 {
            mods |= KeyModifiers::SHIFT;
        }
        if n & 2 != 0 {
            mods |= KeyModifiers::ALT;
        }
        if n & 4 != 0 {
            mods |= KeyModifiers::CTRL;
        }
        Ok(mods)
    }

    /// Parse tilde key sequences (Insert, Delete, Page Up/Down, F5+).
    fn parse_tilde_key(&self, params: &[u8], consumed: usize) -> ParseResult {
        let s = std::str::from_utf8(params).map_err(|_| ParseError::InvalidUtf8)?;
        let num: u8 = s.split(';').next().and_then(|p| p.parse().ok()).unwrap_or(0);

        let code = match num {
            1 | 7 => KeyCode::Home,
            2 => KeyCode::Insert,
            3 => KeyCode::Delete,
            4 | 8 => KeyCode::End,
            5 => KeyCode::PageUp,
            6 => KeyCode::PageDown,
            15 => KeyCode::F(5),
            17 => KeyCode::F(6),
            18 => KeyCode::F(7),
            19 => KeyCode::F(8),
            20 => KeyCode::F(9),
            21 => KeyCode::F(10),
            23 => KeyCode::F(11),
            24 => KeyCode::F(12),
            _ => {
                let mut seq = b"\x1b[".to_vec();
                seq.extend_from_slice(params);
                seq.push(b'~');
                return Err(ParseError::UnrecognizedSequence(seq));
            }
        };

        let modifiers = self.parse_modifiers(params)?;
        Ok((KeyEvent::new(code, modifiers).into(), consumed))
    }

    /// Parse SS3 sequences (ESC O <char>).
    fn parse_ss3(&self, input: &[u8]) -> ParseResult {
        if input.len() < 3 {
            return Err(ParseError::Incomplete);
        }

        let code = match input[2] {
            b'P' => KeyCode::F(1),
            b'Q' => KeyCode::F(2),
            b'R' => KeyCode::F(3),
            b'S' => KeyCode::F(4),
            b'A' => KeyCode::Up,
            b'B' => KeyCode::Down,
            b'C' => KeyCode::Right,
            b'D' => KeyCode::Left,
            b'H' => KeyCode::Home,
            b'F' => KeyCode::End,
            b'M' => KeyCode::Enter,
            _ => return Err(ParseError::UnrecognizedSequence(input[..3].to_vec())),
        };

        Ok((KeyEvent::key(code).into(), 3))
    }

    /// Parse resize report (CSI 8 ; height ; width t).
    fn parse_resize(&self, params: &[u8], consumed: usize) -> ParseResult {
        let s = std::str::from_utf8(params).map_err(|_| ParseError::InvalidUtf8)?;
        let parts: Vec<&str> = s.split(';').collect();

        if parts.len() >= 3 && parts[0] == "8" {
            let height: u16 = parts[1]
                .parse()
                .map_err(|_| ParseError::InvalidResizeFormat)?;
            let width: u16 = parts[2]
                .parse()
                .map_err(|_| ParseError::InvalidResizeFormat)?;
            Ok((ResizeEvent::new(width, height).into(), consumed))
        } else {
            let mut seq = b"\x1b[".to_vec();
            seq.extend_from_slice(params);
            seq.push(b't');
            Err(ParseError::UnrecognizedSequence(seq))
        }
    }

    /// Parse one UTF-8 encoded character.
    fn parse_utf8(&self, input: &[u8]) -> ParseResult {
        let first = input[0];

        let expected_len = if first & 0b1110_0000 == 0b1100_0000 {
            2
        } else if first & 0b1111_0000 == 0b1110_0000 {
            3
        } else if first & 0b1111_1000 == 0b1111_0000 {
            4
        } else {
            return Err(ParseError::InvalidUtf8);
        };

        if input.len() < expected_len {
            return Err(ParseError::Incomplete);
        }

        let s = std::str::from_utf8(&input[..expected_len]).map_err(|_| ParseError::InvalidUtf8)?;
        let c = s.chars().next().ok_or(ParseError::InvalidUtf8)?;

        Ok((KeyEvent::char(c).into(), expected_len))
    }
}
