//! In-memory logger for assertions in tests.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;
use std::sync::Mutex;

/// A logger that keeps every formatted message.
///
/// ```
/// use stripprinter::log::{LogLevel, Logger, MemoryLogger};
///
/// let logger = MemoryLogger::new();
/// logger.warn(format_args!("could not spawn {}", "StripPrinter.exe"));
/// assert!(logger.contains(LogLevel::Warn, "StripPrinter.exe"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl MemoryLogger {
    /// Create an empty logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded messages, oldest first.
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Messages recorded at exactly `level`.
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }

    /// True if a message at `level` contains `needle`.
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.messages_at(level).iter().any(|m| m.contains(needle))
    }

    /// Number of recorded messages.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// True if nothing was logged.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((level, args.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order_with_levels() {
        let logger = MemoryLogger::new();
        logger.info(format_args!("first"));
        logger.debug(format_args!("second {}", 2));

        assert_eq!(
            logger.entries(),
            vec![
                (LogLevel::Info, "first".to_string()),
                (LogLevel::Debug, "second 2".to_string())
            ]
        );
    }

    #[test]
    fn test_contains_filters_by_level() {
        let logger = MemoryLogger::new();
        logger.info(format_args!("ACA123 printed"));

        assert!(logger.contains(LogLevel::Info, "ACA123"));
        assert!(!logger.contains(LogLevel::Warn, "ACA123"));
    }

    #[test]
    fn test_empty() {
        let logger = MemoryLogger::new();
        assert!(logger.is_empty());
        logger.error(format_args!("x"));
        assert_eq!(logger.len(), 1);
    }
}
