//! The line-writer adapter: a [`StdLogger`] gates each message by severity at the moment
//! it is begun, and hands committed messages to its [`Sink`] as single lines.

mod from_config;
mod message;

pub use message::StdMessage;

use crate::level::{Level, LevelName, RawLevel};
use crate::output::{Record, Sink};
use crate::shim::{Logger, Message};
use std::panic::Location;

/// Reported by [`StdLogger::name`](Logger::name).
pub const NAME: &str = "StdLog";

/// Immutable after construction, so it can be shared across threads without locks.
///
/// There is no way to change the threshold later; build a new logger instead.
pub struct StdLogger {
    threshold: Level,
    sink: Box<dyn Sink>,
}

impl StdLogger {
    /// Binds a sink and a minimum severity.
    ///
    /// Never fails. A code that names no [`Level`] is replaced by [`Level::Warn`],
    /// and one `ERROR` line saying so goes straight to `sink`.
    #[must_use]
    #[track_caller]
    pub fn new(sink: impl Sink + 'static, level: impl Into<RawLevel>) -> Self {
        Self::with_boxed_sink(Box::new(sink), level.into(), Location::caller())
    }

    fn with_boxed_sink(
        sink: Box<dyn Sink>,
        level: RawLevel,
        caller: &'static Location<'static>,
    ) -> Self {
        let threshold = match Level::try_from(level) {
            Ok(level) => level,
            Err(err) => {
                // No message builder exists yet, so this bypasses one.
                let body = format!(" log configuration error: {err}");
                let _ = sink.write(&Record {
                    level: LevelName::Error,
                    body: &body,
                    caller,
                });
                Level::Warn
            }
        };

        Self { threshold, sink }
    }

    /// The effective minimum severity, after any correction made at construction.
    #[must_use]
    pub const fn threshold(&self) -> Level {
        self.threshold
    }

    /// Whether a message at `level` would be written.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.threshold
    }

    /// Flushes the sink.
    ///
    /// # Errors
    /// I/O errors from the underlying writer.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.sink.flush()
    }

    fn begin(&self, level: Level) -> StdMessage<'_> {
        StdMessage::new(self, level, self.enabled(level))
    }

    /// Sink failures are dropped: logging must not break the caller's control flow.
    fn emit(&self, record: &Record<'_>) {
        let _ = self.sink.write(record);
    }
}

impl Logger for StdLogger {
    type Message<'a> = StdMessage<'a>;

    fn name(&self) -> &str {
        NAME
    }

    fn err(&self, err: Option<&dyn std::error::Error>) -> StdMessage<'_> {
        let level = if err.is_some() {
            Level::Error
        } else {
            Level::Info
        };
        let mut msg = self.begin(level);
        msg.err(err);
        msg
    }

    fn error(&self) -> StdMessage<'_> {
        self.begin(Level::Error)
    }

    fn warn(&self) -> StdMessage<'_> {
        self.begin(Level::Warn)
    }

    fn notice(&self) -> StdMessage<'_> {
        self.begin(Level::Info)
    }

    fn info(&self) -> StdMessage<'_> {
        self.begin(Level::Info)
    }

    fn debug(&self) -> StdMessage<'_> {
        self.begin(Level::Debug)
    }
}
