//! Error types for scrawl.

use std::io;

/// Result type alias for scrawl operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for scrawl operations.
///
/// Only [`Error::TerminalInit`] is fatal to a session. Everything else is
/// reported once through the status bar and the editor keeps running.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error from file or terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The terminal could not be put into editing mode.
    #[error("terminal initialization failed: {0}")]
    TerminalInit(#[source] io::Error),
    /// The settings document is not valid TOML or has mistyped keys.
    #[error("invalid settings: {0}")]
    ConfigParse(#[from] toml::de::Error),
    /// The default settings could not be serialized.
    #[error("could not write settings: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
    /// `tabSize` must be positive.
    #[error("invalid tab size {0}: must be at least 1")]
    InvalidTabSize(usize),
    /// No home directory to resolve the settings location against.
    #[error("home directory could not be determined")]
    NoHomeDir,
}
