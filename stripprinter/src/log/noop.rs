//! Silent logger.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;

/// A logger that discards every message.
///
/// The dispatcher and classifier stay completely quiet with this logger,
/// which is what an embedding host gets when it does not care about
/// print failures.
///
/// ```
/// use stripprinter::log::{Logger, NoOpLogger};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
/// logger.warn(format_args!("Strip printer not found"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline]
    fn log(&self, _level: LogLevel, _args: Arguments<'_>) {}
}
