//! `tracing` backend for the [`Logger`] trait.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;

/// Logger that forwards to the `tracing` macros.
///
/// The CLI installs a subscriber through [`crate::logging::init_logging`] and
/// hands this adapter to the classifier and dispatcher, so library messages
/// land in the same log file as the CLI's own `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    /// Create a new tracing logger adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        match level {
            LogLevel::Trace => tracing::trace!(target: "stripprinter", "{}", args),
            LogLevel::Debug => tracing::debug!(target: "stripprinter", "{}", args),
            LogLevel::Info => tracing::info!(target: "stripprinter", "{}", args),
            LogLevel::Warn => tracing::warn!(target: "stripprinter", "{}", args),
            LogLevel::Error => tracing::error!(target: "stripprinter", "{}", args),
        }
    }
}
