//! TOML configuration for the threshold and the line format.
//!
//! Separated from struct definitions so that the loading logic (file lookup, path
//! expansion) stays independent of the serde schema.

mod structs;

pub use structs::{GeneralConfig, LevelSetting, WriterConfig};

use crate::level::RawLevel;
use crate::output::SourceLocation;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// `#[serde(default)]` on every section means an empty file yields a working logger.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Severity filtering applies regardless of how lines are formatted.
    pub general: GeneralConfig,
    /// Header layout of every written line.
    pub writer: WriterConfig,
}

impl Config {
    /// Reads `<config dir>/logshim/logshim.toml`, or returns defaults when it doesn't exist.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read,
    /// or it isn't valid TOML for this schema.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration text.
    ///
    /// # Errors
    /// Returns error on TOML syntax errors, wrong field types, or unknown level names.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// Platform config directory, e.g. `~/.config/logshim/logshim.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("logshim").join("logshim.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// The configured threshold, unvalidated when it was given as a code.
    #[must_use]
    pub const fn threshold(&self) -> RawLevel {
        self.general.level.raw()
    }

    /// Unknown values fall back to the short form.
    #[must_use]
    pub fn parse_source(&self) -> SourceLocation {
        match self.writer.source.to_lowercase().as_str() {
            "none" | "off" => SourceLocation::None,
            "long" | "full" => SourceLocation::Long,
            _ => SourceLocation::Short,
        }
    }
}

/// Expands a leading `~` and `$VAR`s so CLI and config paths can use the shell's shorthand.
///
/// Variables that aren't set are left as written.
#[must_use]
pub fn expand_path(path: &str) -> PathBuf {
    shellexpand::full(path).map_or_else(
        |_| PathBuf::from(shellexpand::tilde(path).as_ref()),
        |expanded| PathBuf::from(expanded.as_ref()),
    )
}
