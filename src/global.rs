//! A process-wide logger slot for code that can't have a logger passed in.
//!
//! Prefer handing a [`StdLogger`] to the code that needs it. When that isn't
//! practical, install one here at startup; it is read-only afterwards.
//!
//! Uses `OnceLock` so the slot is filled exactly once, even if several entry
//! points race to initialize it.
//!
//! The slot holds a [`StdLogger`], not any [`Logger`](crate::Logger): the traits
//! carry a generic associated type and a generic `time` method, so there is no
//! `dyn Logger` to store. Code that should work with either backend takes
//! `L: Logger` and is handed `get()` once the slot is filled, or a
//! [`NopLogger`](crate::NopLogger) until then.

use crate::config::Config;
use crate::logger::StdLogger;
use crate::output::LineWriter;
use std::sync::OnceLock;

static GLOBAL_LOGGER: OnceLock<StdLogger> = OnceLock::new();

/// Installs `logger` if the slot is empty.
///
/// Returns `false`, dropping `logger`, when another logger was installed first.
pub fn init(logger: StdLogger) -> bool {
    let mut installed = false;
    GLOBAL_LOGGER.get_or_init(|| {
        installed = true;
        logger
    });
    installed
}

/// Installs a stderr logger built from `config` if the slot is empty.
pub fn init_with_config(config: &Config) -> bool {
    if GLOBAL_LOGGER.get().is_some() {
        return false;
    }
    let sink = LineWriter::configured(std::io::stderr(), &config.writer, config.parse_source());
    init(StdLogger::new(sink, config.threshold()))
}

/// The installed logger. `None` before initialization; callers decide whether to
/// skip logging or use a [`NopLogger`](crate::NopLogger) meanwhile.
#[must_use]
pub fn get() -> Option<&'static StdLogger> {
    GLOBAL_LOGGER.get()
}
