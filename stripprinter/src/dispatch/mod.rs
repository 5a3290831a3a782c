//! Print dispatch.
//!
//! Hands formatted strips to the external printing tool. Dispatch is
//! fire-and-forget: [`PrintDispatcher::dispatch`] never fails, never blocks on
//! the tool, and never tells the caller whether paper came out. A missing
//! printer degrades to "no strip", not to a broken session.
//!
//! # Components
//!
//! - [`TempFileDispatcher`] - writes a uniquely named temp file, then runs
//!   `StripPrinter.exe --file <path>`
//! - [`ProcessLauncher`] / [`DetachedLauncher`] - the process-start capability
//! - [`RecordingDispatcher`] - keeps payloads in memory

mod error;
mod launcher;
mod recording;
mod temp_file;

use std::sync::Arc;

pub use error::DispatchError;
pub use launcher::{DetachedLauncher, PrintCommand, ProcessLauncher};
pub use recording::RecordingDispatcher;
pub use temp_file::{
    TempFileDispatcher, DEFAULT_PRINTER_EXECUTABLE, TEMP_FILE_PREFIX, TEMP_FILE_SUFFIX,
};

/// Sink for formatted strip payloads.
///
/// Failures never reach the caller. An implementation may report them only
/// through a [`Logger`](crate::log::Logger) injected into it; the default is
/// [`NoOpLogger`](crate::log::NoOpLogger), so out of the box the core itself
/// says nothing about a strip that did not print.
pub trait PrintDispatcher: Send + Sync {
    /// Hand `payload` to the printer. Failures are absorbed.
    fn dispatch(&self, payload: &str);
}

impl<D: PrintDispatcher + ?Sized> PrintDispatcher for Arc<D> {
    fn dispatch(&self, payload: &str) {
        (**self).dispatch(payload)
    }
}

impl<D: PrintDispatcher + ?Sized> PrintDispatcher for Box<D> {
    fn dispatch(&self, payload: &str) {
        (**self).dispatch(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_recorder_sees_dispatches() {
        let recorder = Arc::new(RecordingDispatcher::new());
        let boxed: Box<dyn PrintDispatcher> = Box::new(recorder.clone());

        boxed.dispatch("first");
        recorder.dispatch("second");

        assert_eq!(recorder.payloads(), vec!["first", "second"]);
    }
}
