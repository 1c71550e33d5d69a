//! `scrawl` - edit one file in the terminal.
//!
//! # Usage
//!
//! ```bash
//! scrawl notes.txt
//! SCRAWL_LOG=debug scrawl main.go
//! ```
//!
//! Ctrl+S saves, Ctrl+X quits.

use scrawl::config::Config;
use scrawl::editor::ExitStatus;
use scrawl::session::Session;
use scrawl::terminal::AnsiTerminal;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: scrawl <file>";

const HELP_TEXT: &str = "scrawl - small terminal text editor

USAGE:
    scrawl <file>

OPTIONS:
    -h, --help    Print this help message and exit

KEYS:
    Ctrl+S        Save
    Ctrl+X        Quit
    Ctrl+A, Home  Line start (press again for column 0)
    Ctrl+E, End   Line end

ENVIRONMENT:
    SCRAWL_LOG    Log filter (e.g. `debug`); logs go to ~/.scrawl/scrawl.log
";

/// Environment variable holding the log filter.
const LOG_ENV: &str = "SCRAWL_LOG";

const LOG_FILE_NAME: &str = "scrawl.log";

/// Parsed command line.
#[derive(Debug, PartialEq, Eq)]
struct Args {
    path: PathBuf,
}

/// Result of CLI parsing.
#[derive(Debug, PartialEq, Eq)]
enum ParseResult {
    Args(Args),
    Help,
    Error(String),
}

impl Args {
    fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        let mut path = None;
        for arg in args {
            let arg_str = arg.to_string_lossy().into_owned();
            match arg_str.as_str() {
                "-h" | "--help" => return ParseResult::Help,
                other if other.starts_with('-') && other.len() > 1 => {
                    return ParseResult::Error(format!("Unknown option: {other}"));
                }
                _ if path.is_some() => {
                    return ParseResult::Error("expected exactly one file".to_string());
                }
                _ => path = Some(PathBuf::from(arg)),
            }
        }

        match path {
            Some(path) => ParseResult::Args(Self { path }),
            None => ParseResult::Error("missing file argument".to_string()),
        }
    }
}

/// Send logs to a file in the settings directory when `SCRAWL_LOG` is set.
///
/// Nothing is ever written to the terminal.
fn configure_logging() -> Option<WorkerGuard> {
    let filter = std::env::var(LOG_ENV).ok()?;
    let log_dir = Config::settings_dir().ok()?;
    std::fs::create_dir_all(&log_dir).ok()?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(nb_writer)
        .with_ansi(false)
        .try_init()
        .ok()?;
    Some(guard)
}

fn run(args: &Args) -> ExitCode {
    let (config, config_error) = Config::load_or_default();

    let mut terminal = match AnsiTerminal::new() {
        Ok(terminal) => terminal,
        Err(err) => {
            error!(target: "scrawl::terminal", %err, "terminal unavailable");
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::open_with_config(&args.path, config, config_error);
    let result = session.run(&mut terminal);
    drop(terminal);

    match result {
        Ok(ExitStatus::Clean) => ExitCode::SUCCESS,
        Ok(ExitStatus::Unsaved) => {
            info!(target: "scrawl::editor", path = %args.path.display(), "quit with unsaved changes");
            eprintln!("Unsaved changes to {} were discarded.", args.path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(target: "scrawl::terminal", %err, "session aborted");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    match Args::from_args(std::env::args_os()) {
        ParseResult::Args(args) => {
            let _log_guard = configure_logging();
            run(&args)
        }
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            ExitCode::SUCCESS
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(strs: &[&str]) -> Vec<OsString> {
        strs.iter().map(|s| OsString::from(*s)).collect()
    }

    #[test]
    fn test_single_path() {
        let result = Args::from_args(args(&["scrawl", "notes.txt"]));
        assert_eq!(
            result,
            ParseResult::Args(Args {
                path: PathBuf::from("notes.txt")
            })
        );
    }

    #[test]
    fn test_missing_path_is_error() {
        let result = Args::from_args(args(&["scrawl"]));
        assert!(matches!(result, ParseResult::Error(_)));
    }

    #[test]
    fn test_help_flag() {
        assert_eq!(Args::from_args(args(&["scrawl", "--help"])), ParseResult::Help);
        assert_eq!(Args::from_args(args(&["scrawl", "a.txt", "-h"])), ParseResult::Help);
    }

    #[test]
    fn test_unknown_option() {
        let result = Args::from_args(args(&["scrawl", "--fps", "30"]));
        assert_eq!(result, ParseResult::Error("Unknown option: --fps".to_string()));
    }

    #[test]
    fn test_two_paths_rejected() {
        let result = Args::from_args(args(&["scrawl", "a", "b"]));
        assert!(matches!(result, ParseResult::Error(_)));
    }

    #[test]
    fn test_dash_is_a_path() {
        let result = Args::from_args(args(&["scrawl", "-"]));
        assert!(matches!(result, ParseResult::Args(_)));
    }
}
