//! File type detection.

use std::fmt;
use std::path::Path;

/// Kind of file being edited, derived once from its name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FileType {
    Makefile,
    CMake,
    Go,
    GoModule,
    C,
    Cpp,
    Markdown,
    Plaintext,
    #[default]
    Unknown,
}

impl FileType {
    /// Guess the file type from a path.
    ///
    /// Build-system files are matched by exact file name; everything else by
    /// extension.
    #[must_use]
    pub fn detect(path: &Path) -> Self {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return Self::Unknown;
        };

        match name {
            "Makefile" => return Self::Makefile,
            "CMakeLists.txt" => return Self::CMake,
            _ => {}
        }

        match Path::new(name).extension().and_then(|e| e.to_str()) {
            Some("go") => Self::Go,
            Some("mod") => Self::GoModule,
            Some("c" | "h") => Self::C,
            Some("cpp" | "hpp" | "cc") => Self::Cpp,
            Some("md") => Self::Markdown,
            Some("txt") => Self::Plaintext,
            _ => Self::Unknown,
        }
    }

    /// Display name used in the status bar.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Makefile => "Makefile",
            Self::CMake => "CMake",
            Self::Go => "Go",
            Self::GoModule => "Go Module",
            Self::C => "C",
            Self::Cpp => "C++",
            Self::Markdown => "Markdown",
            Self::Plaintext => "Plaintext",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
