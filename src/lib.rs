//! `logshim` - one leveled, field-building logging API over a swappable backend.
//!
//! Application code logs through the [`Logger`] and [`Message`] traits. This crate
//! ships two backends:
//! - [`StdLogger`]: writes one formatted line per message to a [`Sink`], by default a
//!   [`LineWriter`] that adds a timestamp and the caller's source location
//! - [`NopLogger`]: discards everything
//!
//! # Example
//!
//! ```
//! use logshim::{Level, LineWriter, Logger, Message, StdLogger};
//!
//! let log = StdLogger::new(LineWriter::stderr(), Level::Info);
//!
//! log.info().str("addr", "127.0.0.1:8080").msg("listening");
//! log.debug().int("retries", 3).msg("dropped, below the threshold");
//! log.warn().uint64("queued", 512).msgf(format_args!("backlog over {}", 500));
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `logshim` command-line tool

// Core modules (always available)
pub mod config;
pub mod error;
pub mod global;
pub mod level;
pub mod logger;
pub mod nop;
pub mod output;
pub mod shim;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use config::Config;
pub use error::Error;
pub use level::{InvalidLevel, Level, LevelName, RawLevel, translate};
pub use logger::{StdLogger, StdMessage};
pub use nop::{NopLogger, NopMessage};
pub use output::{LineWriter, Record, Sink, SourceLocation};
pub use shim::{Logger, Message};
