//! The backend-agnostic logging contract.
//!
//! Application code writes against [`Logger`] and [`Message`]; each backend
//! ([`StdLogger`](crate::StdLogger), [`NopLogger`](crate::NopLogger)) implements
//! both independently.
//!
//! Both traits are static-dispatch only: `Logger::Message` is a generic associated
//! type and `Message::time` is generic over the time zone, so neither can be used
//! as a trait object. Accept backends as `L: Logger`.
//!
//! ```
//! use logshim::shim::{Logger, Message};
//!
//! fn report<L: Logger>(log: &L, files: i64) {
//!     log.info().int64("files", files).str("phase", "scan").msg("scan finished");
//! }
//! ```

use chrono::{DateTime, TimeZone};
use std::fmt;
use std::time::Duration;

/// Begins messages at a fixed severity.
///
/// Implementations are immutable once built, so one logger can be shared by
/// any number of threads.
pub trait Logger: Send + Sync {
    /// The builder returned by every entry point.
    type Message<'a>: Message
    where
        Self: 'a;

    /// Identifies the backend.
    fn name(&self) -> &str;

    /// Begins an `Error` message with `err` attached, or an `Info` message when
    /// there is no error.
    fn err(&self, err: Option<&dyn std::error::Error>) -> Self::Message<'_>;

    fn error(&self) -> Self::Message<'_>;

    fn warn(&self) -> Self::Message<'_>;

    /// Gated and printed as `Info`.
    fn notice(&self) -> Self::Message<'_>;

    fn info(&self) -> Self::Message<'_>;

    fn debug(&self) -> Self::Message<'_>;
}

/// A single-use message under construction.
///
/// Field methods append `key: value` in call order and return the same builder
/// for chaining. Exactly one [`msg`](Message::msg) or [`msgf`](Message::msgf)
/// commits it; every call after that is a no-op.
///
/// A builder belongs to one caller. Sharing one between threads is a misuse
/// and nothing inside guards against it.
pub trait Message {
    /// Appends ` error: <err>`, or ` error: <none>`.
    fn err(&mut self, err: Option<&dyn std::error::Error>) -> &mut Self;

    fn bool(&mut self, key: &str, val: bool) -> &mut Self;

    /// Durations render with `Debug`, like `1.5s` or `250ms`. There is no minute or hour
    /// unit: ninety seconds is `90s`.
    fn dur(&mut self, key: &str, val: Duration) -> &mut Self;

    fn int(&mut self, key: &str, val: i32) -> &mut Self;

    fn int64(&mut self, key: &str, val: i64) -> &mut Self;

    fn uint64(&mut self, key: &str, val: u64) -> &mut Self;

    fn str(&mut self, key: &str, val: &str) -> &mut Self;

    fn time<Tz: TimeZone>(&mut self, key: &str, val: &DateTime<Tz>) -> &mut Self
    where
        Tz::Offset: fmt::Display;

    /// Commits the message with `text` as its final token.
    fn msg(&mut self, text: &str);

    /// Commits the message with formatted text, e.g. `m.msgf(format_args!("{n} items"))`.
    ///
    /// Suppressed or already-committed messages never format `args`.
    fn msgf(&mut self, args: fmt::Arguments<'_>);
}
