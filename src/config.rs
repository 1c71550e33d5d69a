//! Editor settings and the settings file.
//!
//! Settings live in `~/.scrawl/config.toml`:
//!
//! ```toml
//! tabSize = 4
//! softTabs = false
//! useHighlighting = true
//! ```
//!
//! A missing file is created with the defaults. Missing keys take their
//! default value. The settings are read once per session and never change
//! afterwards.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Name of the settings directory inside the home directory.
pub const SETTINGS_DIR_NAME: &str = ".scrawl";

/// Name of the settings file inside the settings directory.
pub const SETTINGS_FILE_NAME: &str = "config.toml";

/// Session-wide editor settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Width of a tab stop in columns.
    pub tab_size: usize,
    /// Insert `tab_size` spaces instead of a tab character.
    pub soft_tabs: bool,
    /// Classify line contents for coloring.
    pub use_highlighting: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_size: 4,
            soft_tabs: false,
            use_highlighting: true,
        }
    }
}

impl Config {
    /// Parse settings from a TOML document.
    pub fn from_toml_str(document: &str) -> Result<Self> {
        let config: Self = toml::from_str(document)?;
        config.validate()
    }

    /// Serialize settings to a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// The per-user settings directory.
    pub fn settings_dir() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(SETTINGS_DIR_NAME))
            .ok_or(Error::NoHomeDir)
    }

    /// The per-user settings file.
    pub fn settings_path() -> Result<PathBuf> {
        Ok(Self::settings_dir()?.join(SETTINGS_FILE_NAME))
    }

    /// Load settings from the per-user location.
    pub fn load() -> Result<Self> {
        Self::load_from_dir(&Self::settings_dir()?)
    }

    /// Load settings from `dir`, creating the directory and a default
    /// settings file when they are missing.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
            debug!(target: "scrawl::config", dir = %dir.display(), "created settings directory");
        }

        let path = dir.join(SETTINGS_FILE_NAME);
        if !path.exists() {
            let defaults = Self::default();
            fs::write(&path, defaults.to_toml_string()?)?;
            info!(target: "scrawl::config", path = %path.display(), "wrote default settings");
            return Ok(defaults);
        }

        let document = fs::read_to_string(&path)?;
        let config = Self::from_toml_str(&document)?;
        debug!(target: "scrawl::config", path = %path.display(), ?config, "loaded settings");
        Ok(config)
    }

    /// Load settings, falling back to the defaults.
    ///
    /// The error, if any, is handed back so the caller can report it.
    #[must_use]
    pub fn load_or_default() -> (Self, Option<Error>) {
        match Self::load() {
            Ok(config) => (config, None),
            Err(err) => {
                warn!(target: "scrawl::config", %err, "using default settings");
                (Self::default(), Some(err))
            }
        }
    }

    fn validate(self) -> Result<Self> {
        if self.tab_size == 0 {
            return Err(Error::InvalidTabSize(self.tab_size));
        }
        Ok(self)
    }
}
