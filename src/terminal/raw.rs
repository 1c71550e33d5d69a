//! termios plumbing for the editor's terminal.
//!
//! While editing, stdin must hand over every byte as it arrives: no echo, no
//! line editing, and Ctrl+S/Ctrl+X must reach the keymap instead of pausing
//! output or being swallowed. Reads also time out so the input loop wakes up
//! on its own to settle a lone ESC and to notice a resized window.
//!
//! # Safety
//! The termios, isatty and ioctl calls go through libc FFI.

#![allow(unsafe_code)]
#![allow(clippy::borrow_as_ptr)]

use std::io;
use std::os::unix::io::{AsRawFd, RawFd};

/// Tenths of a second a stdin read waits before returning empty.
const READ_TIMEOUT_DECISECONDS: u8 = 1;

/// Keeps stdin in editing mode; the saved settings come back on drop.
#[derive(Debug)]
pub struct RawModeGuard {
    fd: RawFd,
    saved: libc::termios,
}

impl RawModeGuard {
    /// Switch `fd` into editing mode, remembering its current settings.
    pub fn new<F: AsRawFd>(fd: &F) -> io::Result<Self> {
        let fd = fd.as_raw_fd();
        let saved = get_termios(fd)?;

        let mut editing = saved;
        make_editing_mode(&mut editing);
        set_termios(fd, &editing)?;

        Ok(Self { fd, saved })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = set_termios(self.fd, &self.saved);
    }
}

/// Rewrite `termios` for byte-at-a-time keyboard input.
fn make_editing_mode(termios: &mut libc::termios) {
    // Ctrl+S is a key binding, not flow control. Enter arrives as CR.
    termios.c_iflag &= !(libc::BRKINT | libc::ICRNL | libc::INPCK | libc::ISTRIP | libc::IXON);
    // Frames position the cursor explicitly.
    termios.c_oflag &= !libc::OPOST;
    termios.c_cflag |= libc::CS8;
    // Ctrl+C, Ctrl+Z and Ctrl+V become ordinary keys.
    termios.c_lflag &= !(libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG);

    termios.c_cc[libc::VMIN] = 0;
    termios.c_cc[libc::VTIME] = READ_TIMEOUT_DECISECONDS;
}

/// Put stdin into editing mode.
pub fn enable_raw_mode() -> io::Result<RawModeGuard> {
    RawModeGuard::new(&io::stdin())
}

/// Whether `fd` is attached to a terminal.
#[must_use]
pub fn is_tty<F: AsRawFd>(fd: &F) -> bool {
    // SAFETY: isatty accepts any fd
    unsafe { libc::isatty(fd.as_raw_fd()) == 1 }
}

/// Window size of the terminal on stdout as (columns, rows).
///
/// A window with no columns or no rows cannot hold the three screen regions
/// and is reported as an error.
pub fn terminal_size() -> io::Result<(u16, u16)> {
    let mut size: libc::winsize = unsafe { std::mem::zeroed() };

    // SAFETY: TIOCGWINSZ fills the winsize passed by pointer
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut size) };

    if result == -1 {
        return Err(io::Error::last_os_error());
    }
    match (size.ws_col, size.ws_row) {
        (0, _) | (_, 0) => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "terminal reported zero dimensions",
        )),
        (cols, rows) => Ok((cols, rows)),
    }
}

fn get_termios(fd: RawFd) -> io::Result<libc::termios> {
    let mut termios: libc::termios = unsafe { std::mem::zeroed() };

    // SAFETY: tcgetattr fills the termios passed by pointer
    if unsafe { libc::tcgetattr(fd, &mut termios) } == -1 {
        return Err(io::Error::last_os_error());
    }
    Ok(termios)
}

fn set_termios(fd: RawFd, termios: &libc::termios) -> io::Result<()> {
    // SAFETY: tcsetattr only reads the termios passed by pointer
    if unsafe { libc::tcsetattr(fd, libc::TCSAFLUSH, termios) } == -1 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}
