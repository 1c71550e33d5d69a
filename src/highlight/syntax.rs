//! Per-language syntax tables.

use super::filetype::FileType;
use super::languages;

/// Keywords and comment delimiters for one language family.
///
/// Tables are static and shared by every line of every buffer.
#[derive(Debug, PartialEq, Eq)]
pub struct Syntax {
    pub keywords: &'static [&'static str],
    pub single_line_comment: &'static str,
    pub multi_line_comment_start: &'static str,
    pub multi_line_comment_end: &'static str,
}

impl Syntax {
    /// Table used to highlight files of the given type, if any.
    #[must_use]
    pub fn for_file_type(file_type: FileType) -> Option<&'static Self> {
        match file_type {
            FileType::C | FileType::Cpp => Some(&languages::C),
            FileType::Go => Some(&languages::GO),
            FileType::Makefile
            | FileType::CMake
            | FileType::GoModule
            | FileType::Markdown
            | FileType::Plaintext
            | FileType::Unknown => None,
        }
    }
}
