//! Logging for the hunter and game loop.
//!
//! Components take a [`Logger`] rather than consulting a process-wide switch.
//! [`NoopLogger`] is the default; [`LogFacade`] forwards to the `log` crate,
//! whose output the binaries configure with [`init_logging`].

use core::fmt;

use log::Level;

/// Sink for diagnostic messages.
pub trait Logger {
    fn log(&self, level: Level, args: fmt::Arguments<'_>);
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _level: Level, _args: fmt::Arguments<'_>) {}
}

/// Forwards to the `log` facade under the given target.
#[derive(Debug, Clone, Copy)]
pub struct LogFacade {
    target: &'static str,
}

impl LogFacade {
    pub const fn new(target: &'static str) -> Self {
        Self { target }
    }
}

impl Logger for LogFacade {
    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        log::log!(target: self.target, level, "{}", args);
    }
}

#[cfg(feature = "std")]
mod stdout {
    use std::env;

    use log::{LevelFilter, Metadata, Record};

    struct SimpleLogger;

    impl log::Log for SimpleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                println!("{} - {}", record.level(), record.args());
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: SimpleLogger = SimpleLogger;

    /// Install a stdout logger with its level taken from the `HUNTER_LOG`
    /// environment variable, `info` if unset or invalid.
    pub fn init_logging() {
        let level = env::var("HUNTER_LOG")
            .ok()
            .and_then(|lvl| lvl.parse().ok())
            .unwrap_or(LevelFilter::Info);
        let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
    }
}

#[cfg(feature = "std")]
pub use stdout::init_logging;
