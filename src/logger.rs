//! Console logger for the `bitmx` binary.
//!
//! The library only emits `log` records; this backend prints the ones coming
//! from our own modules to stderr so they never mix with command output.

use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record};

pub struct Logger;

static LOGGER: Logger = Logger;

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // filter out messages not from our modules
        let path = record.module_path().unwrap_or("");
        if !path.starts_with("bitmx") {
            return;
        }

        let level = match record.level() {
            Level::Error => "error:".bold().red(),
            Level::Warn => "warning:".bold().yellow(),
            Level::Info => "info:".bold().green(),
            Level::Debug => "debug:".bold().blue(),
            Level::Trace => "trace:".dimmed(),
        };
        eprintln!("{} {}", level, record.args());
    }

    fn flush(&self) {}
}

/// Install the logger. Verbose runs show debug records, others only warnings
/// and errors.
pub fn init(verbose: bool) {
    // a second call keeps the first logger and only adjusts the level
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level_filter(verbose));
}

pub fn level_filter(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}
