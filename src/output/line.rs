//! Plain line output: optional prefix, timestamp and source location, then the level word
//! and the message body, one `\n`-terminated line per record.

use super::{Record, Sink};
use chrono::{Local, Utc};
use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

/// How much of the committing call's file path goes into the line header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceLocation {
    /// No location.
    None,
    /// Final path element and line number, e.g. `main.rs:12`.
    #[default]
    Short,
    /// Full path as the compiler recorded it, and line number.
    Long,
}

/// Default header timestamp, `2024/01/31 23:59:59`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Line-oriented writer backend.
///
/// The writer sits behind a mutex so concurrent loggers sharing one `LineWriter`
/// never interleave partial lines.
#[derive(Debug)]
pub struct LineWriter<W> {
    writer: Mutex<W>,
    prefix: String,
    /// Put the prefix right before the level word instead of at line start.
    prefix_before_message: bool,
    /// `None` disables the timestamp.
    timestamp_format: Option<String>,
    utc: bool,
    source: SourceLocation,
}

impl LineWriter<io::Stderr> {
    /// The usual destination for diagnostics.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl LineWriter<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> LineWriter<W> {
    /// Local-time timestamp and short source location, no prefix.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            prefix: String::new(),
            prefix_before_message: false,
            timestamp_format: Some(DEFAULT_TIMESTAMP_FORMAT.to_string()),
            utc: false,
            source: SourceLocation::Short,
        }
    }

    /// Text written at the start of every line.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Moves the prefix from line start to just before the level word.
    #[must_use]
    pub const fn prefix_before_message(mut self, enabled: bool) -> Self {
        self.prefix_before_message = enabled;
        self
    }

    /// strftime pattern for the header timestamp.
    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = Some(format.into());
        self
    }

    /// Drops the timestamp from the header, e.g. when the destination adds its own.
    #[must_use]
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp_format = None;
        self
    }

    #[must_use]
    pub const fn utc(mut self, enabled: bool) -> Self {
        self.utc = enabled;
        self
    }

    #[must_use]
    pub const fn source(mut self, source: SourceLocation) -> Self {
        self.source = source;
        self
    }

    /// Gives the writer back, e.g. to inspect an in-memory buffer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Renders one complete line, trailing newline included.
    #[must_use]
    pub fn format_line(&self, record: &Record<'_>) -> String {
        let mut line = String::with_capacity(64 + record.body.len());

        if !self.prefix_before_message {
            line.push_str(&self.prefix);
        }

        // A malformed strftime pattern makes `write!` fail; the line goes out without it.
        if let Some(format) = &self.timestamp_format {
            let mut stamp = String::new();
            let rendered = if self.utc {
                write!(stamp, "{}", Utc::now().format(format))
            } else {
                write!(stamp, "{}", Local::now().format(format))
            };
            if rendered.is_ok() && !stamp.is_empty() {
                line.push_str(&stamp);
                line.push(' ');
            }
        }

        match self.source {
            SourceLocation::None => {}
            SourceLocation::Short => {
                let file = Path::new(record.caller.file())
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or_else(|| record.caller.file());
                let _ = write!(line, "{file}:{}: ", record.caller.line());
            }
            SourceLocation::Long => {
                let _ = write!(
                    line,
                    "{}:{}: ",
                    record.caller.file(),
                    record.caller.line()
                );
            }
        }

        if self.prefix_before_message {
            line.push_str(&self.prefix);
        }

        line.push_str(record.level.as_str());
        line.push_str(record.body);
        // Bodies that already end in a newline still make exactly one line.
        if !line.ends_with('\n') {
            line.push('\n');
        }
        line
    }
}

impl<W: Write + Send> Sink for LineWriter<W> {
    fn write(&self, record: &Record<'_>) -> Result<(), crate::Error> {
        let line = self.format_line(record);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        self.writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()?;
        Ok(())
    }
}
