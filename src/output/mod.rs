//! The shim never formats final lines itself: it hands a [`Record`] to a [`Sink`], and the
//! sink decides how the line looks and where it goes.

mod line;

pub use line::{DEFAULT_TIMESTAMP_FORMAT, LineWriter, SourceLocation};

use crate::level::LevelName;
use std::panic::Location;

/// Everything a sink needs to print one line.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    /// Backend word printed first on the line.
    pub level: LevelName,
    /// Accumulated fields and message text. Starts with a space when non-empty.
    pub body: &'a str,
    /// Where the committing call was made, for sinks that print source locations.
    pub caller: &'static Location<'static>,
}

/// `Send + Sync` bounds let one logger be shared by many threads; sinks that hold a
/// writer must serialize access themselves.
pub trait Sink: Send + Sync {
    /// Writes exactly one line for `record`.
    ///
    /// # Errors
    /// I/O errors from the underlying writer.
    fn write(&self, record: &Record<'_>) -> Result<(), crate::Error>;

    /// Buffered writers may lose tail data on abrupt exit without an explicit flush.
    ///
    /// # Errors
    /// I/O errors from the underlying writer.
    fn flush(&self) -> Result<(), crate::Error>;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&self, record: &Record<'_>) -> Result<(), crate::Error> {
        (**self).write(record)
    }

    fn flush(&self) -> Result<(), crate::Error> {
        (**self).flush()
    }
}
