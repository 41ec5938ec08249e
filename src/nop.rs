//! A backend that discards everything.
//!
//! Useful as a default for libraries that accept a logger but shouldn't print
//! unless the application asks them to.

use crate::shim::{Logger, Message};
use chrono::{DateTime, TimeZone};
use std::fmt;
use std::time::Duration;

/// Reported by [`NopLogger::name`](Logger::name).
pub const NAME: &str = "NopLog";

#[derive(Debug, Clone, Copy, Default)]
pub struct NopLogger;

impl NopLogger {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NopMessage;

impl Logger for NopLogger {
    type Message<'a> = NopMessage;

    fn name(&self) -> &str {
        NAME
    }

    fn err(&self, _err: Option<&dyn std::error::Error>) -> NopMessage {
        NopMessage
    }

    fn error(&self) -> NopMessage {
        NopMessage
    }

    fn warn(&self) -> NopMessage {
        NopMessage
    }

    fn notice(&self) -> NopMessage {
        NopMessage
    }

    fn info(&self) -> NopMessage {
        NopMessage
    }

    fn debug(&self) -> NopMessage {
        NopMessage
    }
}

impl Message for NopMessage {
    fn err(&mut self, _err: Option<&dyn std::error::Error>) -> &mut Self {
        self
    }

    fn bool(&mut self, _key: &str, _val: bool) -> &mut Self {
        self
    }

    fn dur(&mut self, _key: &str, _val: Duration) -> &mut Self {
        self
    }

    fn int(&mut self, _key: &str, _val: i32) -> &mut Self {
        self
    }

    fn int64(&mut self, _key: &str, _val: i64) -> &mut Self {
        self
    }

    fn uint64(&mut self, _key: &str, _val: u64) -> &mut Self {
        self
    }

    fn str(&mut self, _key: &str, _val: &str) -> &mut Self {
        self
    }

    fn time<Tz: TimeZone>(&mut self, _key: &str, _val: &DateTime<Tz>) -> &mut Self
    where
        Tz::Offset: fmt::Display,
    {
        self
    }

    fn msg(&mut self, _text: &str) {}

    fn msgf(&mut self, _args: fmt::Arguments<'_>) {}
}
