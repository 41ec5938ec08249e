//! Severity levels and their translation into the backend's fixed vocabulary.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so a message's severity can be compared against a logger's threshold.
///
/// Discriminants grow with importance: a message is emitted when its level is at or
/// above the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(i32)]
pub enum Level {
    /// Development-time detail that is too noisy for normal operation.
    Debug = 0,
    /// Normal operational milestones.
    #[default]
    Info = 1,
    /// Noteworthy but expected events. The backend has no separate word for these.
    Notice = 2,
    /// Non-fatal anomalies that may need attention.
    Warn = 3,
    /// Failures that prevent an operation from completing.
    Error = 4,
}

impl Level {
    /// Lowercase because config files and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Notice => "notice",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Convenience for iteration in help output and tests.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Debug,
            Self::Info,
            Self::Notice,
            Self::Warn,
            Self::Error,
        ]
    }

    /// The numeric code used wherever a level crosses a boundary untyped.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "notice" => Ok(Self::Notice),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// An unvalidated severity code, as it arrives from config files, CLI flags or foreign callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawLevel(pub i32);

impl From<Level> for RawLevel {
    fn from(level: Level) -> Self {
        Self(level.code())
    }
}

impl From<i32> for RawLevel {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl TryFrom<RawLevel> for Level {
    type Error = InvalidLevel;

    fn try_from(raw: RawLevel) -> Result<Self, InvalidLevel> {
        match raw.0 {
            0 => Ok(Self::Debug),
            1 => Ok(Self::Info),
            2 => Ok(Self::Notice),
            3 => Ok(Self::Warn),
            4 => Ok(Self::Error),
            value => Err(InvalidLevel { value }),
        }
    }
}

/// The fixed vocabulary the line-writer backend prints in front of every message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelName {
    Error,
    Warn,
    Info,
    Debug,
}

impl LevelName {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for LevelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Total over validated levels; `Notice` shares `INFO` with `Info`.
impl From<Level> for LevelName {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => Self::Error,
            Level::Warn => Self::Warn,
            Level::Notice | Level::Info => Self::Info,
            Level::Debug => Self::Debug,
        }
    }
}

/// A severity code outside the known range.
///
/// Carries the word the backend should fall back to, so callers that choose to
/// continue don't need to hardcode it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLevel {
    value: i32,
}

impl InvalidLevel {
    /// The rejected code.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Always `WARN`.
    #[must_use]
    pub const fn fallback(&self) -> LevelName {
        LevelName::Warn
    }
}

impl fmt::Display for InvalidLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid log level {}, defaulting to {} level",
            self.value,
            self.fallback()
        )
    }
}

impl std::error::Error for InvalidLevel {}

/// Maps a severity code to the backend word.
///
/// Pure: no state, no output. Whether an `Err` gets surfaced is up to the caller;
/// `err.fallback()` is the word to use if it continues.
///
/// # Errors
/// Returns [`InvalidLevel`] for codes that name no [`Level`].
pub fn translate(level: impl Into<RawLevel>) -> Result<LevelName, InvalidLevel> {
    Level::try_from(level.into()).map(LevelName::from)
}
