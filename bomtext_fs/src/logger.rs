//! Logging collaborator injected into readers, resolvers and sessions.

use std::fmt;
use std::sync::Arc;

/// Severity of an activity message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Severe,
}

/// Sink for diagnostic messages. Callers never depend on what it does.
pub trait ActivityLogger: Send + Sync {
    fn log(&self, level: Level, message: fmt::Arguments<'_>);

    /// Lets callers skip building expensive arguments.
    fn is_enabled(&self, _level: Level) -> bool {
        true
    }

    fn debug(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Debug, message);
    }

    fn info(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Info, message);
    }

    fn warn(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Warn, message);
    }

    fn severe(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Severe, message);
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl ActivityLogger for NullLogger {
    fn log(&self, _level: Level, _message: fmt::Arguments<'_>) {}

    fn is_enabled(&self, _level: Level) -> bool {
        false
    }
}

/// Forwards to the `tracing` macros under the `bomtext_fs` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl ActivityLogger for TracingLogger {
    fn log(&self, level: Level, message: fmt::Arguments<'_>) {
        match level {
            Level::Debug => tracing::debug!(target: "bomtext_fs", "{}", message),
            Level::Info => tracing::info!(target: "bomtext_fs", "{}", message),
            Level::Warn => tracing::warn!(target: "bomtext_fs", "{}", message),
            Level::Severe => tracing::error!(target: "bomtext_fs", "{}", message),
        }
    }

    fn is_enabled(&self, level: Level) -> bool {
        match level {
            Level::Debug => tracing::enabled!(target: "bomtext_fs", tracing::Level::DEBUG),
            Level::Info => tracing::enabled!(target: "bomtext_fs", tracing::Level::INFO),
            Level::Warn => tracing::enabled!(target: "bomtext_fs", tracing::Level::WARN),
            Level::Severe => tracing::enabled!(target: "bomtext_fs", tracing::Level::ERROR),
        }
    }
}

pub(crate) fn null_logger() -> Arc<dyn ActivityLogger> {
    Arc::new(NullLogger)
}
