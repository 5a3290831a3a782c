//! Logger trait definition.

use std::fmt::{self, Arguments};

/// Severity of a log message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Per-event detail (suppressed updates, skipped feed lines)
    Trace,
    /// Diagnostic detail (no-change classifications, spawned commands)
    Debug,
    /// Strips printed, session milestones
    Info,
    /// Degraded behaviour that does not stop the session (failed prints)
    Warn,
    /// Failures that end the session
    Error,
}

impl LogLevel {
    /// Lower-case name, as used by `RUST_LOG` directives.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logging interface shared by the classifier, the dispatcher and the feed reader.
///
/// Components hold an `Arc<dyn Logger>` so the CLI can route messages into
/// `tracing` while tests swap in [`NoOpLogger`](super::NoOpLogger) or
/// [`MemoryLogger`](super::MemoryLogger).
///
/// # Example
///
/// ```
/// use stripprinter::log::{Logger, NoOpLogger};
/// use stripprinter::{log_debug, log_info};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
/// log_info!(logger, "Printed strip for {}", "ACA123");
/// log_debug!(logger, "No change for {}", "WJA456");
/// ```
pub trait Logger: Send + Sync {
    /// Log a message at the specified level.
    fn log(&self, level: LogLevel, args: Arguments<'_>);

    /// Log a trace-level message.
    fn trace(&self, args: Arguments<'_>) {
        self.log(LogLevel::Trace, args);
    }

    /// Log a debug-level message.
    fn debug(&self, args: Arguments<'_>) {
        self.log(LogLevel::Debug, args);
    }

    /// Log an info-level message.
    fn info(&self, args: Arguments<'_>) {
        self.log(LogLevel::Info, args);
    }

    /// Log a warning-level message.
    fn warn(&self, args: Arguments<'_>) {
        self.log(LogLevel::Warn, args);
    }

    /// Log an error-level message.
    fn error(&self, args: Arguments<'_>) {
        self.log(LogLevel::Error, args);
    }
}

/// Log a trace-level message with a format string.
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {
        $logger.trace(format_args!($($arg)*))
    };
}

/// Log a debug-level message with a format string.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(format_args!($($arg)*))
    };
}

/// Log an info-level message with a format string.
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(format_args!($($arg)*))
    };
}

/// Log a warning with a format string.
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(format_args!($($arg)*))
    };
}

/// Log an error with a format string.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_log_level_display_matches_env_filter_names() {
        assert_eq!(LogLevel::Trace.to_string(), "trace");
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::Error.as_str(), "error");
    }

    #[test]
    fn test_default_methods_route_through_log() {
        use std::sync::Mutex;

        struct LevelSink(Mutex<Vec<LogLevel>>);

        impl Logger for LevelSink {
            fn log(&self, level: LogLevel, _args: Arguments<'_>) {
                self.0.lock().unwrap().push(level);
            }
        }

        let sink = LevelSink(Mutex::new(Vec::new()));
        log_trace!(sink, "t");
        log_debug!(sink, "d");
        log_info!(sink, "i");
        log_warn!(sink, "w");
        log_error!(sink, "e");

        assert_eq!(
            *sink.0.lock().unwrap(),
            vec![
                LogLevel::Trace,
                LogLevel::Debug,
                LogLevel::Info,
                LogLevel::Warn,
                LogLevel::Error
            ]
        );
    }
}
