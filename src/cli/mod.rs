//! CLI module for logshim.
//!
//! Emits one message from the command line, which is handy in shell scripts that
//! want the same line format as the programs they drive.

pub mod util;

use crate::config::{self, Config};
use crate::level::{Level, RawLevel};
use crate::logger::StdLogger;
use crate::shim::{Logger, Message};
use clap::Parser;
use std::process::ExitCode;

pub use util::{parse_field, parse_threshold};

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Notice,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Notice => Self::Notice,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
        }
    }
}

/// logshim - Log a message from the command line.
#[derive(Debug, Parser)]
#[command(
    name = "logshim",
    version,
    about = "Log a message from the command line"
)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,

    /// Minimum level to emit, as a name or numeric code (overrides config)
    #[arg(short, long, value_name = "LEVEL", value_parser = parse_threshold)]
    pub threshold: Option<RawLevel>,

    /// Field to attach, in order (repeatable)
    #[arg(short, long = "field", value_name = "KEY=VALUE", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,

    /// Message level
    #[arg(value_enum)]
    pub level: LogLevel,

    /// Message text
    #[arg(required = true)]
    pub message: Vec<String>,
}

impl Cli {
    /// Explicit `--config` wins; otherwise the default location, where a missing file means defaults.
    ///
    /// # Errors
    /// Fails when the chosen file can't be read or parsed.
    pub fn load_config(&self) -> Result<Config, crate::Error> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(&config::expand_path(path))?,
            None => Config::load()?,
        };
        if let Some(threshold) = self.threshold {
            config.general.level = config::LevelSetting::from_raw(threshold);
        }
        Ok(config)
    }
}

/// Loads config, builds a stderr logger and emits the message.
#[must_use]
pub fn run(cli: &Cli) -> ExitCode {
    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let logger = StdLogger::from_config(&config, std::io::stderr());
    emit(&logger, cli.level.into(), &cli.fields, &cli.message.join(" "));
    let _ = logger.flush();
    ExitCode::SUCCESS
}

/// Begins a message at `level`, attaches `fields` as string fields in order, and commits `text`.
pub fn emit<L: Logger>(logger: &L, level: Level, fields: &[(String, String)], text: &str) {
    let mut msg = match level {
        Level::Debug => logger.debug(),
        Level::Info => logger.info(),
        Level::Notice => logger.notice(),
        Level::Warn => logger.warn(),
        Level::Error => logger.error(),
    };
    for (key, val) in fields {
        msg.str(key, val);
    }
    msg.msg(text);
}
