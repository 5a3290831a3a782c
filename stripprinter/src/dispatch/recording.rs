//! In-memory dispatcher.

use std::sync::Mutex;

use super::PrintDispatcher;

/// Keeps payloads instead of printing them.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    payloads: Mutex<Vec<String>>,
}

impl RecordingDispatcher {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every payload dispatched so far, oldest first.
    pub fn payloads(&self) -> Vec<String> {
        self.payloads
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of payloads dispatched.
    pub fn len(&self) -> usize {
        self.payloads
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// True if nothing was dispatched.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PrintDispatcher for RecordingDispatcher {
    fn dispatch(&self, payload: &str) {
        self.payloads
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(payload.to_string());
    }
}
