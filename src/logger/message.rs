//! The per-call builder behind every [`StdLogger`] entry point.

use super::StdLogger;
use crate::level::{Level, LevelName};
use crate::output::Record;
use crate::shim::Message;
use chrono::{DateTime, TimeZone};
use std::fmt::{self, Write as _};
use std::panic::Location;
use std::time::Duration;

/// Accumulates ` key: value` tokens until committed.
///
/// `active` is decided once, when the logger begins the message, and cleared for good
/// by the first commit. While it is false every method returns without touching the
/// buffer, so suppressed messages cost one branch per call.
pub struct StdMessage<'a> {
    logger: &'a StdLogger,
    active: bool,
    level: Level,
    buf: String,
}

impl<'a> StdMessage<'a> {
    pub(super) const fn new(logger: &'a StdLogger, level: Level, active: bool) -> Self {
        Self {
            logger,
            active,
            level,
            buf: String::new(),
        }
    }

    /// False when suppressed by the threshold or already committed.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Severity the message was begun at (`Notice` is begun as `Info`).
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    fn field(&mut self, key: &str, val: impl fmt::Display) -> &mut Self {
        if self.active {
            let _ = write!(self.buf, " {key}: {val}");
        }
        self
    }

    fn commit(&mut self, text: fmt::Arguments<'_>, caller: &'static Location<'static>) {
        if !self.active {
            return;
        }

        let _ = write!(self.buf, " {text}");
        self.logger.emit(&Record {
            level: LevelName::from(self.level),
            body: &self.buf,
            caller,
        });
        self.active = false;
    }
}

impl Message for StdMessage<'_> {
    fn err(&mut self, err: Option<&dyn std::error::Error>) -> &mut Self {
        if self.active {
            let _ = match err {
                Some(err) => write!(self.buf, " error: {err}"),
                None => write!(self.buf, " error: <none>"),
            };
        }
        self
    }

    fn bool(&mut self, key: &str, val: bool) -> &mut Self {
        self.field(key, val)
    }

    fn dur(&mut self, key: &str, val: Duration) -> &mut Self {
        self.field(key, format_args!("{val:?}"))
    }

    fn int(&mut self, key: &str, val: i32) -> &mut Self {
        self.field(key, val)
    }

    fn int64(&mut self, key: &str, val: i64) -> &mut Self {
        self.field(key, val)
    }

    fn uint64(&mut self, key: &str, val: u64) -> &mut Self {
        self.field(key, val)
    }

    fn str(&mut self, key: &str, val: &str) -> &mut Self {
        self.field(key, val)
    }

    fn time<Tz: TimeZone>(&mut self, key: &str, val: &DateTime<Tz>) -> &mut Self
    where
        Tz::Offset: fmt::Display,
    {
        self.field(key, val)
    }

    #[track_caller]
    fn msg(&mut self, text: &str) {
        self.commit(format_args!("{text}"), Location::caller());
    }

    #[track_caller]
    fn msgf(&mut self, args: fmt::Arguments<'_>) {
        self.commit(args, Location::caller());
    }
}
