//! Logger construction from a loaded [`Config`].

use super::StdLogger;
use crate::config::{Config, WriterConfig};
use crate::output::{LineWriter, SourceLocation};
use std::io::Write;
use std::panic::Location;

impl StdLogger {
    /// Builds a [`LineWriter`] over `writer` with the configured header layout, bound to the
    /// configured threshold.
    ///
    /// A threshold given as an out-of-range code is corrected to `Warn`, with the usual
    /// one-line diagnostic written to `writer`.
    #[must_use]
    #[track_caller]
    pub fn from_config<W: Write + Send + 'static>(config: &Config, writer: W) -> Self {
        let sink = LineWriter::configured(writer, &config.writer, config.parse_source());
        Self::with_boxed_sink(Box::new(sink), config.threshold(), Location::caller())
    }
}

impl<W: Write + Send> LineWriter<W> {
    /// Applies a `[writer]` config section.
    #[must_use]
    pub fn configured(writer: W, config: &WriterConfig, source: SourceLocation) -> Self {
        let sink = Self::new(writer)
            .prefix(config.prefix.as_str())
            .prefix_before_message(config.prefix_before_message)
            .utc(config.utc)
            .source(source);

        if config.timestamp {
            sink.timestamp_format(config.timestamp_format.as_str())
        } else {
            sink.without_timestamp()
        }
    }
}
