//! Configuration struct definitions.

use crate::level::{Level, ParseLevelError, RawLevel};
use crate::output::DEFAULT_TIMESTAMP_FORMAT;
use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum log level.
    pub level: LevelSetting,
}

/// A threshold as written in config: a level name or a raw integer code.
///
/// Names are checked while parsing, so a typo fails the load. Codes are kept as-is
/// and validated by the logger, which falls back to `warn` with a diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "LevelRepr")]
pub struct LevelSetting(RawLevel);

impl LevelSetting {
    /// Keeps `raw` unchecked, like an integer code read from a file.
    #[must_use]
    pub const fn from_raw(raw: RawLevel) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> RawLevel {
        self.0
    }
}

impl Default for LevelSetting {
    fn default() -> Self {
        Self(Level::default().into())
    }
}

impl From<Level> for LevelSetting {
    fn from(level: Level) -> Self {
        Self(level.into())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Code(i32),
    Name(String),
}

impl TryFrom<LevelRepr> for LevelSetting {
    type Error = ParseLevelError;

    fn try_from(repr: LevelRepr) -> Result<Self, Self::Error> {
        match repr {
            LevelRepr::Code(code) => Ok(Self(RawLevel(code))),
            LevelRepr::Name(name) => name.parse::<Level>().map(Self::from),
        }
    }
}

/// Line writer configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Text at the start of every line.
    pub prefix: String,
    /// Move the prefix from line start to just before the level word.
    pub prefix_before_message: bool,
    /// Print a timestamp header.
    pub timestamp: bool,
    /// Timestamp format (strftime).
    pub timestamp_format: String,
    /// Use UTC instead of local time.
    pub utc: bool,
    /// Source location (short, long, none).
    pub source: String,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            prefix_before_message: false,
            timestamp: true,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            utc: false,
            source: "short".to_string(),
        }
    }
}
