//! Logger capability injected into the [`Mapper`](crate::Mapper).
//!
//! The mapper reports recoverable problems (unknown tags) through this trait
//! instead of talking to a global logger directly.

use log::Level;

/// Receives diagnostic messages from a conversion.
pub trait Logger: Send + Sync {
    fn log(&self, level: Level, message: &str);
}

impl<F> Logger for F
where
    F: Fn(Level, &str) + Send + Sync,
{
    fn log(&self, level: Level, message: &str) {
        self(level, message)
    }
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _level: Level, _message: &str) {}
}

/// Forwards messages to the `log` crate facade.
///
/// Nothing is printed unless the host application installed a logger.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

impl Logger for LogFacade {
    fn log(&self, level: Level, message: &str) {
        log::log!(target: "reverse_markdown", level, "{}", message);
    }
}
